//! Eased interpolation for animated zoom and scroll changes.

use egui::Vec2;

/// Duration of animated zoom/offset changes, in seconds.
pub const ANIMATION_DURATION: f32 = 0.25;

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

/// Ease-out cubic: fast start, gentle landing.
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// A value moving from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    elapsed: f32,
    duration: f32,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    /// Steps the tween forward by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    pub fn value(&self) -> T {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ease_out_cubic(self.elapsed / self.duration);
        self.from.lerp(self.to, t)
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// A value that is either at rest or animating toward a target.
///
/// Logic reads [`target`](Self::target); drawing reads [`current`](Self::current).
#[derive(Debug, Clone, Copy)]
pub struct Animated<T: Lerp> {
    target: T,
    tween: Option<Tween<T>>,
}

impl<T: Lerp> Animated<T> {
    pub fn new(value: T) -> Self {
        Self {
            target: value,
            tween: None,
        }
    }

    /// Sets a new target, animating from the currently displayed value if `animated`.
    pub fn set(&mut self, value: T, animated: bool) {
        self.tween = if animated {
            Some(Tween::new(self.current(), value, ANIMATION_DURATION))
        } else {
            None
        };
        self.target = value;
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn current(&self) -> T {
        self.tween.map_or(self.target, |tween| tween.value())
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Advances any running animation; returns true while still animating.
    pub fn advance(&mut self, dt: f32) -> bool {
        if let Some(tween) = self.tween.as_mut() {
            tween.advance(dt);
            if tween.is_finished() {
                self.tween = None;
            }
        }
        self.tween.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_animated_reaches_target() {
        let mut value = Animated::new(1.0_f32);
        value.set(2.0, true);
        assert_eq!(value.target(), 2.0);
        assert_eq!(value.current(), 1.0);

        assert!(value.advance(ANIMATION_DURATION / 2.0));
        let midway = value.current();
        assert!(midway > 1.0 && midway < 2.0);

        assert!(!value.advance(ANIMATION_DURATION));
        assert_eq!(value.current(), 2.0);
    }

    #[test]
    fn test_unanimated_set_jumps() {
        let mut offset = Animated::new(Vec2::ZERO);
        offset.set(Vec2::new(10.0, -5.0), false);
        assert!(!offset.is_animating());
        assert_eq!(offset.current(), Vec2::new(10.0, -5.0));
    }
}
