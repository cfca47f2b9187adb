//! Board input handling for panning, zooming, and cell taps.
//!
//! This module handles all pointer input over the board, including:
//! - Drag panning, with momentum scrolling after a fling
//! - Pinch zoom and Ctrl + wheel zoom around the pointer
//! - Scroll wheel pan (wheel without Ctrl)
//! - Cell taps, forwarded to the grid surface
//! - Hovered cell tracking
//!
//! Gesture ends are reported to the viewport through its scroll delegate so
//! it can recenter a field smaller than the frame.

use eframe::egui;
use egui::Vec2;
use sweepview::{CellCoord, GestureDelegate, GestureKind, GridViewport, ScrollDelegate};

/// Release speed (points per second) above which a drag turns into momentum scrolling
const FLING_THRESHOLD: f32 = 150.0;

/// Speed (points per second) below which momentum scrolling stops
const MOMENTUM_STOP_SPEED: f32 = 10.0;

/// Fraction of momentum velocity kept after one second
const MOMENTUM_DECAY_PER_SECOND: f32 = 0.05;

/// Result of board input handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardInputResult {
    /// No interaction occurred
    None,
    /// Viewport was updated (pan, zoom or momentum)
    ViewportUpdated,
    /// A cell was tapped and the tap was delivered to the surface
    CellTapped(CellCoord),
}

/// Decays a momentum velocity over `dt` seconds.
///
/// Returns the remaining velocity, or `None` once it drops below the stop speed.
pub fn decay_momentum(velocity: Vec2, dt: f32) -> Option<Vec2> {
    let remaining = velocity * MOMENTUM_DECAY_PER_SECOND.powf(dt);
    (remaining.length() >= MOMENTUM_STOP_SPEED).then_some(remaining)
}

/// Handles all board input events and updates viewport/interaction state.
///
/// # Arguments
/// * `ctx` - The egui context for input access
/// * `frame_rect` - Screen rectangle of the viewport frame
/// * `response` - The board's interaction response
/// * `viewport` - Viewport to pan, zoom and tap through
/// * `is_dragging` - Drag state flag (mutable)
/// * `is_zooming` - Whether a zoom gesture was active last frame (mutable)
/// * `momentum` - Remaining momentum velocity (mutable)
/// * `hovered_cell` - Cell under the pointer (mutable)
///
/// # Returns
/// The result of input handling
#[allow(clippy::too_many_arguments)]
pub fn handle_board_input(
    ctx: &egui::Context,
    frame_rect: egui::Rect,
    response: &egui::Response,
    viewport: &mut GridViewport,
    is_dragging: &mut bool,
    is_zooming: &mut bool,
    momentum: &mut Option<Vec2>,
    hovered_cell: &mut Option<CellCoord>,
) -> BoardInputResult {
    let mut result = BoardInputResult::None;
    let dt = ctx.input(|i| i.stable_dt).min(0.1);
    let hover_pos = ctx
        .input(|i| i.pointer.hover_pos())
        .filter(|pos| frame_rect.contains(*pos));

    // Handle drag panning
    if response.dragged() {
        if !*is_dragging {
            *is_dragging = true;
            // A new drag catches the content mid-fling
            if momentum.take().is_some() {
                viewport.on_decelerating_ended();
            }
        }
        let delta = response.drag_delta();
        if delta != Vec2::ZERO {
            viewport.pan_by(delta);
            result = BoardInputResult::ViewportUpdated;
        }
    } else if *is_dragging {
        // Drag ended
        *is_dragging = false;
        let velocity = ctx.input(|i| i.pointer.velocity());
        let will_decelerate = velocity.length() > FLING_THRESHOLD;
        viewport.on_drag_ended(will_decelerate);
        if will_decelerate {
            *momentum = Some(velocity);
        }
    }

    // Momentum scrolling
    if let Some(velocity) = *momentum {
        viewport.pan_by(velocity * dt);
        *momentum = decay_momentum(velocity, dt);
        if momentum.is_none() {
            viewport.on_decelerating_ended();
        }
        result = BoardInputResult::ViewportUpdated;
    }

    // Handle zoom (pinch, or Ctrl + wheel)
    let zoom_delta = ctx.input(|i| i.zoom_delta());
    match hover_pos {
        Some(pos) if zoom_delta != 1.0 => {
            *is_zooming = true;
            viewport.zoom_by(zoom_delta, pos - frame_rect.min.to_vec2());
            result = BoardInputResult::ViewportUpdated;
        }
        _ => {
            if *is_zooming {
                *is_zooming = false;
                viewport.on_zoom_ended(viewport.zoom_scale());
            }
        }
    }

    // Handle scroll wheel pan when hovering over the board
    if hover_pos.is_some() {
        let scroll = ctx.input(|i| i.smooth_scroll_delta);
        if scroll != Vec2::ZERO {
            viewport.pan_by(scroll);
            result = BoardInputResult::ViewportUpdated;
        }
    }

    // Track hovered cell
    *hovered_cell = hover_pos.and_then(|pos| viewport.cell_at_frame_point(pos - frame_rect.min.to_vec2()));

    // Handle taps; recognized alongside pan and zoom when the viewport allows it
    let gesture_active = *is_dragging || *is_zooming || momentum.is_some();
    let tap_allowed = !gesture_active
        || viewport.should_recognize_simultaneously(GestureKind::Tap, GestureKind::Pan);
    if response.clicked() && tap_allowed {
        if let Some(coord) = response
            .interact_pointer_pos()
            .and_then(|pos| viewport.cell_at_frame_point(pos - frame_rect.min.to_vec2()))
        {
            if viewport.surface_mut().tap(coord) {
                result = BoardInputResult::CellTapped(coord);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_momentum_decays_and_stops() {
        let velocity = Vec2::new(1000.0, 0.0);
        let slowed = decay_momentum(velocity, 0.5).unwrap();
        assert!(slowed.x < velocity.x && slowed.x > 0.0);

        // After a few seconds the fling is spent
        assert_eq!(decay_momentum(velocity, 3.0), None);
    }

    #[test]
    fn test_slow_momentum_stops_immediately() {
        assert_eq!(decay_momentum(Vec2::new(5.0, 0.0), 0.016), None);
    }
}
