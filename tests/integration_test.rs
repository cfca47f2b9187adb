use anyhow::Result;
use egui::Vec2;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use sweepview::{
    CellContent, CellCoord, CellDataSource, FieldGrid, GridSurface, GridViewport, ScrollDelegate,
    SharedDataSource, TapHandler, ViewportError,
};

/// Surface with a fixed pixel extent that records what the viewport asks of it.
#[derive(Default)]
struct RecordingSurface {
    extent: Vec2,
    rebuilds: usize,
    reloads: usize,
    refreshes: Vec<Vec<CellCoord>>,
    hidden: bool,
}

impl RecordingSurface {
    fn with_extent(width: f32, height: f32) -> Self {
        Self {
            extent: Vec2::new(width, height),
            ..Default::default()
        }
    }
}

impl GridSurface for RecordingSurface {
    fn rebuild(&mut self, _rows: usize, _columns: usize, _ds: SharedDataSource, _tap: TapHandler) -> Vec2 {
        self.rebuilds += 1;
        self.extent
    }

    fn set_data_source(&mut self, _data_source: SharedDataSource) {}

    fn set_tap_handler(&mut self, _tap_handler: TapHandler) {}

    fn refresh(&mut self, cells: &[CellCoord]) {
        self.refreshes.push(cells.to_vec());
    }

    fn reload_all(&mut self) {
        self.reloads += 1;
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

struct Blank;

impl CellDataSource for Blank {
    fn cell(&self, _coord: CellCoord) -> CellContent {
        CellContent::Covered
    }
}

/// Sparse board; cells not set are covered.
#[derive(Default)]
struct SparseBoard(HashMap<CellCoord, CellContent>);

impl CellDataSource for SparseBoard {
    fn cell(&self, coord: CellCoord) -> CellContent {
        self.0.get(&coord).copied().unwrap_or_default()
    }
}

fn frame() -> Vec2 {
    Vec2::new(300.0, 400.0)
}

#[test]
fn test_min_scale_fits_wide_field() -> Result<()> {
    let mut viewport = GridViewport::new(frame(), RecordingSurface::with_extent(500.0, 200.0))?;
    let size = viewport.configure(4, 10, Rc::new(Blank), Box::new(|_| {}), None);

    assert_eq!(size, Vec2::new(500.0, 200.0));
    assert!((viewport.min_scale() - 0.6).abs() < 1e-6);
    assert_eq!(viewport.max_scale(), 2.0);
    assert_eq!(viewport.surface().rebuilds, 1);
    assert_eq!(viewport.surface().reloads, 1);
    Ok(())
}

#[test]
fn test_same_dimensions_refresh_only_marked_cells() -> Result<()> {
    let mut viewport = GridViewport::new(frame(), RecordingSurface::with_extent(200.0, 200.0))?;
    viewport.configure(5, 5, Rc::new(Blank), Box::new(|_| {}), None);
    viewport.run_post_layout();

    let marked = [CellCoord::new(0, 0), CellCoord::new(2, 3), CellCoord::new(4, 4)];
    viewport.mark_cells_changed(marked)?;
    viewport.run_post_layout();

    viewport.configure(5, 5, Rc::new(Blank), Box::new(|_| {}), None);

    let surface = viewport.surface();
    assert_eq!(surface.rebuilds, 1, "same dimensions must not rebuild");
    assert_eq!(surface.reloads, 1);
    assert_eq!(surface.refreshes.last(), Some(&marked.to_vec()));
    assert!(viewport.modified_cells().is_empty());
    Ok(())
}

#[test]
fn test_new_dimensions_rebuild_and_clear_dirty_set() -> Result<()> {
    let mut viewport = GridViewport::new(frame(), RecordingSurface::with_extent(200.0, 200.0))?;
    viewport.configure(5, 5, Rc::new(Blank), Box::new(|_| {}), None);
    viewport.mark_cells_changed([CellCoord::new(1, 1)])?;

    viewport.configure(6, 5, Rc::new(Blank), Box::new(|_| {}), None);

    assert_eq!(viewport.surface().rebuilds, 2);
    assert_eq!(viewport.surface().reloads, 2);
    assert!(viewport.modified_cells().is_empty());
    assert_eq!((viewport.rows(), viewport.columns()), (6, 5));
    Ok(())
}

#[test]
fn test_marking_is_an_idempotent_union() -> Result<()> {
    let mut viewport = GridViewport::new(frame(), RecordingSurface::with_extent(200.0, 200.0))?;
    viewport.configure(5, 5, Rc::new(Blank), Box::new(|_| {}), None);

    let (a, b, c) = (CellCoord::new(0, 1), CellCoord::new(1, 2), CellCoord::new(3, 3));
    viewport.mark_cells_changed([a, b])?;
    viewport.mark_cells_changed([b, c])?;
    viewport.mark_cells_changed([a])?;

    let mut dirty: Vec<CellCoord> = viewport.modified_cells().iter().copied().collect();
    dirty.sort();
    assert_eq!(dirty, vec![a, b, c]);

    viewport.mark_cells_changed(Vec::new())?;
    assert_eq!(viewport.modified_cells().len(), 3);
    Ok(())
}

#[test]
fn test_out_of_bounds_mark_is_rejected() -> Result<()> {
    let mut viewport = GridViewport::new(frame(), RecordingSurface::with_extent(200.0, 200.0))?;
    viewport.configure(5, 5, Rc::new(Blank), Box::new(|_| {}), None);
    viewport.run_post_layout();

    let err = viewport
        .mark_cells_changed([CellCoord::new(1, 1), CellCoord::new(5, 0)])
        .unwrap_err();
    assert_eq!(
        err,
        ViewportError::CellOutOfBounds {
            row: 5,
            column: 0,
            rows: 5,
            columns: 5
        }
    );
    assert!(viewport.modified_cells().is_empty());
    assert_eq!(viewport.pending_tasks(), 0);
    Ok(())
}

#[test]
fn test_large_field_is_not_recentered() -> Result<()> {
    // 1000x1000 at zoom 1.0 overflows the frame on both axes
    let mut viewport = GridViewport::new(frame(), FieldGrid::with_cell_size(100.0, 0.0))?;
    viewport.configure(10, 10, Rc::new(Blank), Box::new(|_| {}), None);
    viewport.run_post_layout();

    let offset = Vec2::new(100.0, 200.0);
    viewport.set_content_offset(offset, false);
    assert!(!viewport.recenter());
    assert_eq!(viewport.content_offset(), offset);
    Ok(())
}

/// 1000x1000 field in a 300x400 frame, zoomed in and scrolled away from the origin.
fn zoomed_large_field() -> Result<GridViewport> {
    let mut viewport = GridViewport::new(frame(), FieldGrid::with_cell_size(100.0, 0.0))?;
    viewport.configure(10, 10, Rc::new(Blank), Box::new(|_| {}), None);
    viewport.run_post_layout();

    viewport.set_zoom_scale(1.5, false);
    viewport.set_content_offset(Vec2::new(120.0, 80.0), false);
    assert_eq!(viewport.zoom_scale(), 1.5);
    Ok(viewport)
}

#[test]
fn test_in_place_setup_resets_large_field_to_origin() -> Result<()> {
    let mut viewport = zoomed_large_field()?;
    viewport.configure(10, 10, Rc::new(Blank), Box::new(|_| {}), None);

    // Nothing moves until the post-layout pass
    assert_eq!(viewport.zoom_scale(), 1.5);
    viewport.run_post_layout();

    assert_eq!(viewport.zoom_scale(), 1.0);
    assert_eq!(viewport.content_offset(), Vec2::ZERO);
    Ok(())
}

#[test]
fn test_rebuild_resets_large_field_to_origin() -> Result<()> {
    let mut viewport = zoomed_large_field()?;
    viewport.configure(12, 12, Rc::new(Blank), Box::new(|_| {}), None);
    viewport.run_post_layout();

    assert_eq!(viewport.zoom_scale(), 1.0);
    assert_eq!(viewport.content_offset(), Vec2::ZERO);
    Ok(())
}

#[test]
fn test_rebuild_recenters_small_field_after_reset() -> Result<()> {
    let mut viewport = zoomed_large_field()?;
    // 200x200 at zoom 1.0 fits inside the frame
    viewport.configure(2, 2, Rc::new(Blank), Box::new(|_| {}), None);
    viewport.run_post_layout();

    assert_eq!(viewport.zoom_scale(), 1.0);
    assert_eq!(viewport.content_offset(), Vec2::new(-50.0, -100.0));
    Ok(())
}

#[test]
fn test_zoom_settle_recenters_short_axis() -> Result<()> {
    let mut viewport = GridViewport::new(frame(), FieldGrid::with_cell_size(100.0, 0.0))?;
    viewport.configure(10, 10, Rc::new(Blank), Box::new(|_| {}), None);
    viewport.run_post_layout();

    // 350x350 content: wider than the frame, shorter than it
    viewport.set_zoom_scale(0.35, false);
    viewport.on_zoom_ended(0.35);

    assert!((viewport.content_offset().y + 25.0).abs() < 1e-3);
    Ok(())
}

#[test]
fn test_ready_callback_runs_once_after_layout() -> Result<()> {
    let calls = Rc::new(Cell::new(0));
    let reported = Rc::new(Cell::new(Vec2::ZERO));

    let mut viewport = GridViewport::new(frame(), RecordingSurface::with_extent(120.0, 80.0))?;
    let (calls_in, reported_in) = (calls.clone(), reported.clone());
    viewport.configure(
        2,
        3,
        Rc::new(Blank),
        Box::new(|_| {}),
        Some(Box::new(move |size| {
            calls_in.set(calls_in.get() + 1);
            reported_in.set(size);
        })),
    );

    assert_eq!(calls.get(), 0, "callback must wait for the post-layout pass");
    viewport.run_post_layout();
    assert_eq!(calls.get(), 1);
    assert_eq!(reported.get(), Vec2::new(120.0, 80.0));

    viewport.run_post_layout();
    assert_eq!(calls.get(), 1);

    // The in-place path defers its callback too
    let calls_in = calls.clone();
    viewport.configure(
        2,
        3,
        Rc::new(Blank),
        Box::new(|_| {}),
        Some(Box::new(move |_| calls_in.set(calls_in.get() + 1))),
    );
    assert_eq!(calls.get(), 1);
    viewport.run_post_layout();
    assert_eq!(calls.get(), 2);
    Ok(())
}

#[test]
fn test_unmarked_changes_stay_stale() -> Result<()> {
    let board = Rc::new(RefCell::new(SparseBoard::default()));
    let mut viewport = GridViewport::with_field_grid(frame())?;
    viewport.configure(4, 4, board.clone(), Box::new(|_| {}), None);
    viewport.run_post_layout();

    let marked = CellCoord::new(1, 1);
    let unmarked = CellCoord::new(2, 2);
    board.borrow_mut().0.insert(marked, CellContent::Flagged);
    board.borrow_mut().0.insert(unmarked, CellContent::Mine);

    viewport.mark_cells_changed([marked])?;
    viewport.configure(4, 4, board.clone(), Box::new(|_| {}), None);

    let grid = viewport.surface();
    assert_eq!(grid.shown_cell(marked), Some(CellContent::Flagged));
    assert_eq!(grid.shown_cell(unmarked), Some(CellContent::Covered));
    Ok(())
}

#[test]
fn test_tap_reaches_handler_through_viewport() -> Result<()> {
    let tapped = Rc::new(RefCell::new(Vec::new()));
    let sink = tapped.clone();

    let mut viewport = GridViewport::new(frame(), FieldGrid::with_cell_size(10.0, 0.0))?;
    viewport.configure(10, 10, Rc::new(Blank), Box::new(move |c| sink.borrow_mut().push(c)), None);
    viewport.run_post_layout();

    // 100x100 field centered in 300x400: top-left at (100, 150)
    let coord = viewport
        .cell_at_frame_point(egui::pos2(125.0, 155.0))
        .ok_or_else(|| anyhow::anyhow!("no cell under point"))?;
    assert_eq!(coord, CellCoord::new(0, 2));
    assert!(viewport.surface_mut().tap(coord));
    assert_eq!(*tapped.borrow(), vec![coord]);
    Ok(())
}
