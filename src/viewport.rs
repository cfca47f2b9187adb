//! Pannable, zoomable viewport over a grid surface.
//!
//! The viewport owns the grid surface, sizes it to fit the visible frame,
//! keeps it centered when it is smaller than the frame, and batches refreshes
//! of cells that changed since the last full reload.
//!
//! Zoom and offset changes that depend on settled layout never run inline.
//! They are queued as [`PostLayoutTask`]s and executed by
//! [`GridViewport::run_post_layout`], which the host calls once its layout
//! pass has finished. State mutations made by a call always happen before any
//! task that call schedules.

use crate::animation::Animated;
use crate::error::{Result, ViewportError};
use crate::field_grid::FieldGrid;
use crate::post_layout::{PostLayoutQueue, PostLayoutTask};
use crate::traits::{
    CellCoord, GestureDelegate, GestureKind, GridSurface, ReadyHandler, ScrollDelegate,
    SharedDataSource, TapHandler,
};
use egui::{Pos2, Rect, Vec2};
use std::collections::HashSet;

/// Zoom floor before any grid has been configured.
pub const DEFAULT_MIN_SCALE: f32 = 0.5;

/// Zoom ceiling once a grid has been configured.
pub const DEFAULT_MAX_SCALE: f32 = 2.0;

/// Smallest scale at which a `field`-sized grid fits inside `frame`.
///
/// The axis that is relatively longer than the frame decides the scale. The
/// result never exceeds 1.0, so small fields are not blown up; an empty field
/// yields 1.0.
pub fn fit_scale(frame: Vec2, field: Vec2) -> f32 {
    if field.x <= 0.0 || field.y <= 0.0 {
        return 1.0;
    }
    let screen_aspect = frame.x / frame.y;
    let field_aspect = field.x / field.y;
    let scale = if field_aspect > screen_aspect {
        frame.x / field.x
    } else {
        frame.y / field.y
    };
    scale.min(1.0)
}

/// Clamps one axis of a content offset so the content stays reachable.
///
/// Content longer than the frame scrolls between its edges; shorter content
/// may move anywhere as long as it stays fully inside the frame.
fn clamp_axis(offset: f32, content: f32, frame: f32) -> f32 {
    if content >= frame {
        offset.clamp(0.0, content - frame)
    } else {
        offset.clamp(content - frame, 0.0)
    }
}

fn validate_frame(size: Vec2) -> Result<()> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if valid(size.x) && valid(size.y) {
        Ok(())
    } else {
        Err(ViewportError::InvalidFrame {
            width: size.x,
            height: size.y,
        })
    }
}

/// Scrollable, zoomable container for a grid surface.
///
/// Offsets follow the scroll-view convention: the content offset is the point
/// of the (scaled) content shown at the frame's top-left corner. A negative
/// offset pushes the content right/down, which is how a grid smaller than the
/// frame gets centered.
pub struct GridViewport<S: GridSurface = FieldGrid> {
    surface: S,
    frame_size: Vec2,

    rows: usize,
    columns: usize,
    /// Pixel size of the grid as reported by the last rebuild.
    field_size: Vec2,
    /// Unscaled size of the scrollable content.
    content_base: Vec2,

    min_scale: f32,
    max_scale: f32,
    zoom: Animated<f32>,
    offset: Animated<Vec2>,

    /// Cells changed since the last full reload, re-shown on the next
    /// same-dimension `configure`.
    modified_cells: HashSet<CellCoord>,
    post_layout: PostLayoutQueue,
}

impl<S: GridSurface> std::fmt::Debug for GridViewport<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridViewport")
            .field("frame_size", &self.frame_size)
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("field_size", &self.field_size)
            .field("min_scale", &self.min_scale)
            .field("max_scale", &self.max_scale)
            .field("zoom", &self.zoom.target())
            .field("offset", &self.offset.target())
            .field("modified_cells", &self.modified_cells.len())
            .field("post_layout", &self.post_layout.len())
            .finish_non_exhaustive()
    }
}

impl GridViewport<FieldGrid> {
    /// Creates a viewport over a default [`FieldGrid`].
    pub fn with_field_grid(frame_size: Vec2) -> Result<Self> {
        Self::new(frame_size, FieldGrid::new())
    }

    /// Cell under a point given in frame coordinates, using displayed zoom/offset.
    pub fn cell_at_frame_point(&self, point: Pos2) -> Option<CellCoord> {
        if self.surface.is_hidden() {
            return None;
        }
        self.surface.cell_at(self.frame_to_field(point))
    }

    /// Screen rectangle of a cell, relative to the frame's top-left corner.
    pub fn cell_frame_rect(&self, coord: CellCoord) -> Rect {
        self.field_to_frame(self.surface.cell_rect(coord))
    }
}

impl<S: GridSurface> GridViewport<S> {
    /// Creates a viewport with a visible area of `frame_size`.
    ///
    /// The surface starts hidden and becomes visible on the first
    /// [`configure`](Self::configure).
    pub fn new(frame_size: Vec2, mut surface: S) -> Result<Self> {
        validate_frame(frame_size)?;
        surface.set_hidden(true);

        Ok(Self {
            surface,
            frame_size,
            rows: 0,
            columns: 0,
            field_size: Vec2::ZERO,
            content_base: Vec2::ZERO,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            zoom: Animated::new(1.0),
            offset: Animated::new(Vec2::ZERO),
            modified_cells: HashSet::new(),
            post_layout: PostLayoutQueue::new(),
        })
    }

    // ===== Configuration =====

    /// Shows a `rows` x `columns` grid backed by `data_source`.
    ///
    /// When the dimensions match the current grid this is a cheap refresh:
    /// the data source and tap handler are swapped and only the cells passed
    /// to [`mark_cells_changed`](Self::mark_cells_changed) since the last full
    /// reload are re-read. Content that changed without being marked keeps
    /// showing its old value; callers reusing a board layout for new content
    /// must mark every changed cell first.
    ///
    /// When the dimensions differ the surface is rebuilt, the zoom range is
    /// recomputed so the whole grid can fit, and every cell is reloaded.
    ///
    /// Either way, `on_ready` and the zoom reset/recenter run from the next
    /// [`run_post_layout`](Self::run_post_layout). Returns the grid's pixel size.
    pub fn configure(
        &mut self,
        rows: usize,
        columns: usize,
        data_source: SharedDataSource,
        tap_handler: TapHandler,
        on_ready: Option<ReadyHandler>,
    ) -> Vec2 {
        if rows == self.rows && columns == self.columns {
            self.surface.set_data_source(data_source);
            self.surface.set_tap_handler(tap_handler);
            self.surface.set_hidden(false);

            let mut cells: Vec<CellCoord> = self.modified_cells.drain().collect();
            cells.sort_unstable();
            self.surface.refresh(&cells);
            log::debug!(
                "reconfigured {}x{} grid in place, refreshed {} cells",
                rows,
                columns,
                cells.len()
            );

            if let Some(handler) = on_ready {
                self.post_layout.schedule(PostLayoutTask::NotifyReady {
                    handler,
                    size: self.field_size,
                });
            }
            self.post_layout.schedule(PostLayoutTask::ResetZoomAndRecenter);
            return self.field_size;
        }

        self.rows = rows;
        self.columns = columns;
        self.modified_cells.clear();

        let field_size = self
            .surface
            .rebuild(rows, columns, data_source, tap_handler);
        self.field_size = field_size;

        self.min_scale = fit_scale(self.frame_size, field_size);
        self.max_scale = DEFAULT_MAX_SCALE;
        self.content_base = field_size;
        let zoom = self.zoom.target().clamp(self.min_scale, self.max_scale);
        self.zoom.set(zoom, false);

        self.surface.set_hidden(false);
        self.surface.reload_all();
        log::info!(
            "rebuilt {}x{} grid at {:.0}x{:.0}, zoom range {:.3}..{:.1}",
            rows,
            columns,
            field_size.x,
            field_size.y,
            self.min_scale,
            self.max_scale
        );

        self.post_layout.schedule(PostLayoutTask::ResetZoomAndRecenter);
        if let Some(handler) = on_ready {
            self.post_layout.schedule(PostLayoutTask::NotifyReady {
                handler,
                size: field_size,
            });
        }
        field_size
    }

    /// Records `cells` as changed and schedules a refresh of exactly those cells.
    ///
    /// The cells stay recorded until the next same-dimension `configure`, so
    /// they are re-shown even if the surface misses the deferred refresh.
    /// Fails without recording anything if a cell lies outside the grid.
    pub fn mark_cells_changed<I>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = CellCoord>,
    {
        let cells: Vec<CellCoord> = cells.into_iter().collect();
        if let Some(bad) = cells
            .iter()
            .find(|c| c.row >= self.rows || c.column >= self.columns)
        {
            return Err(ViewportError::CellOutOfBounds {
                row: bad.row,
                column: bad.column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        if cells.is_empty() {
            return Ok(());
        }

        self.modified_cells.extend(cells.iter().copied());
        self.post_layout.schedule(PostLayoutTask::RefreshCells(cells));
        Ok(())
    }

    /// Updates the visible area, e.g. after a window resize.
    ///
    /// The zoom floor is recomputed for the current grid, the zoom is pulled
    /// back into range if needed, and the offset is re-clamped to the new
    /// frame. A grid smaller than the new frame is recentered.
    pub fn set_frame_size(&mut self, frame_size: Vec2) -> Result<()> {
        validate_frame(frame_size)?;
        if frame_size == self.frame_size {
            return Ok(());
        }
        self.frame_size = frame_size;

        if self.field_size != Vec2::ZERO {
            self.min_scale = fit_scale(frame_size, self.field_size);
            let zoom = self.zoom.target();
            let clamped = zoom.clamp(self.min_scale, self.max_scale);
            if clamped != zoom {
                self.zoom.set(clamped, false);
            }

            let offset = self.offset.target();
            let clamped = self.clamp_offset(offset, self.content_size());
            if clamped != offset {
                self.offset.set(clamped, false);
            }
            let _ = self.recenter();
        }
        Ok(())
    }

    // ===== Deferred work =====

    /// Runs every task scheduled before this call, in order.
    ///
    /// Call once per frame after layout has settled. Returns the number of
    /// tasks executed.
    pub fn run_post_layout(&mut self) -> usize {
        let batch = self.post_layout.take_batch();
        let count = batch.len();
        for task in batch {
            match task {
                PostLayoutTask::ResetZoomAndRecenter => {
                    self.set_zoom_scale(1.0, true);
                    if !self.recenter() {
                        self.set_content_offset(Vec2::ZERO, false);
                    }
                }
                PostLayoutTask::NotifyReady { handler, size } => handler(size),
                PostLayoutTask::RefreshCells(cells) => self.surface.refresh(&cells),
            }
        }
        count
    }

    /// Advances zoom/offset animations by `dt` seconds.
    ///
    /// Returns true while anything is still animating.
    pub fn advance(&mut self, dt: f32) -> bool {
        let zooming = self.zoom.advance(dt);
        let scrolling = self.offset.advance(dt);
        zooming || scrolling
    }

    /// True while deferred tasks are queued or an animation is running.
    pub fn needs_update(&self) -> bool {
        !self.post_layout.is_empty() || self.zoom.is_animating() || self.offset.is_animating()
    }

    // ===== Zoom and pan =====

    /// Centers the grid on every axis where it is smaller than the frame.
    ///
    /// Returns false, changing nothing, when the grid is larger than the frame
    /// on both axes; panning is then entirely up to the user.
    pub fn recenter(&mut self) -> bool {
        let content = self.content_size();
        let frame = self.frame_size;

        if content.x > frame.x && content.y > frame.y {
            return false;
        }

        let mut offset = self.offset.target();
        if content.x < frame.x {
            offset.x = (content.x - frame.x) / 2.0;
        }
        if content.y < frame.y {
            offset.y = (content.y - frame.y) / 2.0;
        }
        self.offset.set(offset, true);
        true
    }

    /// Zooms out so the entire field is visible.
    pub fn show_entire_field(&mut self) {
        self.set_zoom_scale(self.min_scale, true);
        // Programmatic zooms settle the same way as gestures do.
        self.on_zoom_ended(self.min_scale);
    }

    /// Sets the zoom scale about the frame's center, clamped to the zoom range.
    pub fn set_zoom_scale(&mut self, scale: f32, animated: bool) {
        let old = self.zoom.target();
        let new = scale.clamp(self.min_scale, self.max_scale);
        if old > 0.0 && new != old {
            let center = self.frame_size / 2.0;
            let offset = (self.offset.target() + center) * (new / old) - center;
            let clamped = self.clamp_offset(offset, self.content_base * new);
            self.offset.set(clamped, animated);
        }
        self.zoom.set(new, animated);
    }

    /// Sets the content offset as-is, without clamping.
    pub fn set_content_offset(&mut self, offset: Vec2, animated: bool) {
        self.offset.set(offset, animated);
    }

    /// Moves the content by a pointer delta, in frame points.
    pub fn pan_by(&mut self, delta: Vec2) {
        let offset = self.offset.current() - delta;
        let clamped = self.clamp_offset(offset, self.content_base * self.zoom.target());
        self.offset.set(clamped, false);
    }

    /// Scales by `factor` keeping the field point under `anchor` fixed.
    ///
    /// `anchor` is in frame coordinates. The result is clamped to the zoom range.
    pub fn zoom_by(&mut self, factor: f32, anchor: Pos2) {
        let old = self.zoom.current();
        let new = (old * factor).clamp(self.min_scale, self.max_scale);
        if old <= 0.0 || new == old {
            return;
        }
        let anchor = anchor.to_vec2();
        let offset = (self.offset.current() + anchor) * (new / old) - anchor;
        self.zoom.set(new, false);
        let clamped = self.clamp_offset(offset, self.content_base * new);
        self.offset.set(clamped, false);
    }

    fn clamp_offset(&self, offset: Vec2, content: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(offset.x, content.x, self.frame_size.x),
            clamp_axis(offset.y, content.y, self.frame_size.y),
        )
    }

    // ===== Coordinate mapping =====

    /// Maps a point in frame coordinates to unscaled field coordinates.
    pub fn frame_to_field(&self, point: Pos2) -> Pos2 {
        let zoom = self.zoom.current();
        ((point.to_vec2() + self.offset.current()) / zoom).to_pos2()
    }

    /// Maps an unscaled field rectangle to frame coordinates.
    pub fn field_to_frame(&self, rect: Rect) -> Rect {
        let zoom = self.zoom.current();
        let offset = self.offset.current();
        Rect::from_min_max(
            (rect.min.to_vec2() * zoom - offset).to_pos2(),
            (rect.max.to_vec2() * zoom - offset).to_pos2(),
        )
    }

    // ===== Queries =====

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn frame_size(&self) -> Vec2 {
        self.frame_size
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Grid pixel size from the last rebuild.
    pub fn field_size(&self) -> Vec2 {
        self.field_size
    }

    pub fn min_scale(&self) -> f32 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    /// Zoom scale the viewport is at or animating toward.
    pub fn zoom_scale(&self) -> f32 {
        self.zoom.target()
    }

    /// Zoom scale as currently drawn.
    pub fn displayed_zoom_scale(&self) -> f32 {
        self.zoom.current()
    }

    /// Content offset the viewport is at or animating toward.
    pub fn content_offset(&self) -> Vec2 {
        self.offset.target()
    }

    /// Content offset as currently drawn.
    pub fn displayed_content_offset(&self) -> Vec2 {
        self.offset.current()
    }

    /// Scaled size of the scrollable content.
    pub fn content_size(&self) -> Vec2 {
        self.content_base * self.zoom.target()
    }

    /// Cells marked changed since the last full reload.
    pub fn modified_cells(&self) -> &HashSet<CellCoord> {
        &self.modified_cells
    }

    pub fn pending_tasks(&self) -> usize {
        self.post_layout.len()
    }

    pub fn is_field_visible(&self) -> bool {
        !self.surface.is_hidden()
    }
}

impl<S: GridSurface> ScrollDelegate for GridViewport<S> {
    fn on_zoom_ended(&mut self, _scale: f32) {
        let _ = self.recenter();
    }

    fn on_drag_ended(&mut self, will_decelerate: bool) {
        if will_decelerate {
            return;
        }
        let _ = self.recenter();
    }

    fn on_decelerating_ended(&mut self) {
        let _ = self.recenter();
    }
}

impl<S: GridSurface> GestureDelegate for GridViewport<S> {
    /// Always allowed, so cell taps are never starved by pan/zoom recognition.
    fn should_recognize_simultaneously(&self, _gesture: GestureKind, _other: GestureKind) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{CellContent, CellDataSource};
    use std::rc::Rc;

    struct Blank;

    impl CellDataSource for Blank {
        fn cell(&self, _coord: CellCoord) -> CellContent {
            CellContent::Covered
        }
    }

    fn viewport(frame: Vec2, cell: f32, rows: usize, columns: usize) -> GridViewport {
        let mut viewport = GridViewport::new(frame, FieldGrid::with_cell_size(cell, 0.0)).unwrap();
        viewport.configure(rows, columns, Rc::new(Blank), Box::new(|_| {}), None);
        viewport.run_post_layout();
        viewport
    }

    #[test]
    fn test_fit_scale_picks_constraining_axis() {
        let frame = Vec2::new(300.0, 400.0);
        assert!((fit_scale(frame, Vec2::new(500.0, 200.0)) - 0.6).abs() < 1e-6);
        assert!((fit_scale(frame, Vec2::new(300.0, 800.0)) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_fit_scale_never_exceeds_one() {
        let frame = Vec2::new(300.0, 400.0);
        assert_eq!(fit_scale(frame, Vec2::new(100.0, 100.0)), 1.0);
        assert_eq!(fit_scale(frame, Vec2::ZERO), 1.0);
    }

    #[test]
    fn test_invalid_frame_is_rejected() {
        let err = GridViewport::with_field_grid(Vec2::new(0.0, 100.0)).unwrap_err();
        assert_eq!(
            err,
            ViewportError::InvalidFrame {
                width: 0.0,
                height: 100.0
            }
        );
        assert!(GridViewport::with_field_grid(Vec2::new(f32::NAN, 1.0)).is_err());
    }

    #[test]
    fn test_small_grid_is_centered_after_configure() {
        let viewport = viewport(Vec2::new(300.0, 400.0), 10.0, 10, 10);
        assert_eq!(viewport.content_offset(), Vec2::new(-100.0, -150.0));
    }

    #[test]
    fn test_recenter_keeps_offset_on_long_axis() {
        // 200 wide (narrower than frame), 1000 tall (taller than frame)
        let mut viewport = viewport(Vec2::new(300.0, 400.0), 100.0, 10, 2);
        viewport.set_content_offset(Vec2::new(0.0, 250.0), false);

        assert!(viewport.recenter());
        assert_eq!(viewport.content_offset(), Vec2::new(-50.0, 250.0));
    }

    #[test]
    fn test_pan_is_clamped_to_content() {
        let mut viewport = viewport(Vec2::new(300.0, 400.0), 100.0, 10, 10);
        assert_eq!(viewport.content_offset(), Vec2::ZERO);

        viewport.pan_by(Vec2::new(50.0, 50.0));
        assert_eq!(viewport.content_offset(), Vec2::ZERO);

        viewport.pan_by(Vec2::new(-5000.0, -5000.0));
        assert_eq!(viewport.content_offset(), Vec2::new(700.0, 600.0));
    }

    #[test]
    fn test_zoom_by_respects_range_and_anchor() {
        let mut viewport = viewport(Vec2::new(300.0, 400.0), 100.0, 10, 10);
        let anchor = Pos2::new(150.0, 200.0);
        let before = viewport.frame_to_field(anchor);

        viewport.zoom_by(1.5, anchor);
        assert!((viewport.zoom_scale() - 1.5).abs() < 1e-6);
        let after = viewport.frame_to_field(anchor);
        assert!((before - after).length() < 1e-3);

        viewport.zoom_by(100.0, anchor);
        assert_eq!(viewport.zoom_scale(), DEFAULT_MAX_SCALE);
        viewport.zoom_by(0.0001, anchor);
        assert_eq!(viewport.zoom_scale(), viewport.min_scale());
    }

    #[test]
    fn test_show_entire_field_zooms_to_floor() {
        let mut viewport = viewport(Vec2::new(300.0, 400.0), 100.0, 10, 10);
        viewport.show_entire_field();
        assert!((viewport.zoom_scale() - 0.3).abs() < 1e-6);
        // 300x300 content in a 300x400 frame: centered vertically
        assert!((viewport.content_offset().y + 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_drag_with_momentum_waits_for_deceleration() {
        let mut viewport = viewport(Vec2::new(300.0, 400.0), 10.0, 10, 10);
        viewport.set_content_offset(Vec2::new(-10.0, -10.0), false);

        viewport.on_drag_ended(true);
        assert_eq!(viewport.content_offset(), Vec2::new(-10.0, -10.0));

        viewport.on_decelerating_ended();
        assert_eq!(viewport.content_offset(), Vec2::new(-100.0, -150.0));
    }

    #[test]
    fn test_frame_resize_recomputes_floor() {
        let mut viewport = viewport(Vec2::new(300.0, 400.0), 100.0, 10, 10);
        assert!((viewport.min_scale() - 0.3).abs() < 1e-6);

        viewport.set_frame_size(Vec2::new(600.0, 800.0)).unwrap();
        assert!((viewport.min_scale() - 0.6).abs() < 1e-6);
        assert!(viewport.set_frame_size(Vec2::new(-1.0, 5.0)).is_err());
    }

    #[test]
    fn test_frame_resize_recenters_small_grid() {
        // 100x100 grid centered in 300x400
        let mut viewport = viewport(Vec2::new(300.0, 400.0), 10.0, 10, 10);
        assert_eq!(viewport.content_offset(), Vec2::new(-100.0, -150.0));

        viewport.set_frame_size(Vec2::new(600.0, 800.0)).unwrap();
        assert_eq!(viewport.content_offset(), Vec2::new(-250.0, -350.0));

        viewport.set_frame_size(Vec2::new(200.0, 150.0)).unwrap();
        assert_eq!(viewport.content_offset(), Vec2::new(-50.0, -25.0));
    }

    #[test]
    fn test_frame_resize_clamps_offset_of_large_grid() {
        // 1000x1000 grid scrolled to its bottom-right corner
        let mut viewport = viewport(Vec2::new(300.0, 400.0), 100.0, 10, 10);
        viewport.set_content_offset(Vec2::new(700.0, 600.0), false);

        viewport.set_frame_size(Vec2::new(500.0, 500.0)).unwrap();
        assert_eq!(viewport.content_offset(), Vec2::new(500.0, 500.0));
    }

    fn scheduled(viewport: &GridViewport) -> Vec<&'static str> {
        viewport
            .post_layout
            .iter()
            .map(|task| match task {
                PostLayoutTask::ResetZoomAndRecenter => "reset",
                PostLayoutTask::NotifyReady { .. } => "ready",
                PostLayoutTask::RefreshCells(_) => "refresh",
            })
            .collect()
    }

    #[test]
    fn test_rebuild_resets_zoom_before_notifying() {
        let mut viewport = viewport(Vec2::new(300.0, 400.0), 10.0, 5, 5);
        viewport.configure(6, 6, Rc::new(Blank), Box::new(|_| {}), Some(Box::new(|_| {})));
        assert_eq!(scheduled(&viewport), vec!["reset", "ready"]);
    }

    #[test]
    fn test_in_place_refresh_notifies_before_zoom_reset() {
        let mut viewport = viewport(Vec2::new(300.0, 400.0), 10.0, 5, 5);
        viewport.configure(5, 5, Rc::new(Blank), Box::new(|_| {}), Some(Box::new(|_| {})));
        assert_eq!(scheduled(&viewport), vec!["ready", "reset"]);
    }

    #[test]
    fn test_gestures_always_recognize_together() {
        let viewport = viewport(Vec2::new(300.0, 400.0), 10.0, 1, 1);
        assert!(viewport.should_recognize_simultaneously(GestureKind::Pan, GestureKind::Tap));
        assert!(viewport.should_recognize_simultaneously(GestureKind::Zoom, GestureKind::Pan));
    }
}
