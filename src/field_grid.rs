//! Concrete grid surface for the minefield.
//!
//! `FieldGrid` lays cells out on a fixed pitch inside a thin border and keeps
//! a cache of the content it was last told to show. Drawing code reads the
//! cache only, so a cell that was never refreshed keeps its old content.

use crate::traits::{CellContent, CellCoord, GridSurface, SharedDataSource, TapHandler};
use egui::{Pos2, Rect, Vec2};

/// Side length of a square cell, in points.
pub const CELL_SIZE: f32 = 40.0;

/// Width of the border drawn around the whole field, in points.
pub const FIELD_BORDER_WIDTH: f32 = 1.0;

/// The grid surface hosted by [`GridViewport`](crate::GridViewport).
pub struct FieldGrid {
    rows: usize,
    columns: usize,
    cell_size: f32,
    border_width: f32,
    hidden: bool,
    data_source: Option<SharedDataSource>,
    tap_handler: Option<TapHandler>,
    /// Row-major snapshot of what is currently shown.
    cells: Vec<CellContent>,
    /// Number of cells re-read from the data source since creation.
    cells_loaded: usize,
}

impl std::fmt::Debug for FieldGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldGrid")
            .field("rows", &self.rows)
            .field("columns", &self.columns)
            .field("cell_size", &self.cell_size)
            .field("hidden", &self.hidden)
            .finish_non_exhaustive()
    }
}

impl Default for FieldGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldGrid {
    /// Creates an empty, hidden grid with the default cell pitch.
    pub fn new() -> Self {
        Self::with_cell_size(CELL_SIZE, FIELD_BORDER_WIDTH)
    }

    pub fn with_cell_size(cell_size: f32, border_width: f32) -> Self {
        Self {
            rows: 0,
            columns: 0,
            cell_size,
            border_width,
            hidden: true,
            data_source: None,
            tap_handler: None,
            cells: Vec::new(),
            cells_loaded: 0,
        }
    }

    // ===== Geometry =====

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    /// Pixel size of the laid-out field including its border.
    pub fn pixel_size(&self) -> Vec2 {
        let border = 2.0 * self.border_width;
        Vec2::new(
            self.columns as f32 * self.cell_size + border,
            self.rows as f32 * self.cell_size + border,
        )
    }

    /// Rectangle of a cell in unscaled field coordinates.
    pub fn cell_rect(&self, coord: CellCoord) -> Rect {
        let min = Pos2::new(
            self.border_width + coord.column as f32 * self.cell_size,
            self.border_width + coord.row as f32 * self.cell_size,
        );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Cell under a point given in unscaled field coordinates.
    pub fn cell_at(&self, point: Pos2) -> Option<CellCoord> {
        let x = point.x - self.border_width;
        let y = point.y - self.border_width;
        if x < 0.0 || y < 0.0 || self.cell_size <= 0.0 {
            return None;
        }
        let column = (x / self.cell_size) as usize;
        let row = (y / self.cell_size) as usize;
        (row < self.rows && column < self.columns).then(|| CellCoord::new(row, column))
    }

    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.row < self.rows && coord.column < self.columns
    }

    // ===== Content =====

    /// Content currently shown for `coord`, as of its last refresh.
    pub fn shown_cell(&self, coord: CellCoord) -> Option<CellContent> {
        self.index_of(coord).map(|i| self.cells[i])
    }

    /// Iterates over every cell with its currently shown content.
    pub fn shown_cells(&self) -> impl Iterator<Item = (CellCoord, CellContent)> + '_ {
        let columns = self.columns.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, content)| (CellCoord::new(i / columns, i % columns), *content))
    }

    /// Total number of cell reads from the data source since creation.
    pub fn cells_loaded(&self) -> usize {
        self.cells_loaded
    }

    /// Forwards a tap on `coord` to the current tap handler.
    ///
    /// Returns false when the grid is hidden, the cell is outside the grid or
    /// no handler is installed.
    pub fn tap(&mut self, coord: CellCoord) -> bool {
        if self.hidden || !self.contains(coord) {
            return false;
        }
        match self.tap_handler.as_mut() {
            Some(handler) => {
                handler(coord);
                true
            }
            None => false,
        }
    }

    fn index_of(&self, coord: CellCoord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.columns + coord.column)
    }

    fn load_cell(&mut self, coord: CellCoord) {
        let Some(index) = self.index_of(coord) else {
            return;
        };
        if let Some(source) = &self.data_source {
            self.cells[index] = source.cell(coord);
            self.cells_loaded += 1;
        }
    }
}

impl GridSurface for FieldGrid {
    fn rebuild(
        &mut self,
        rows: usize,
        columns: usize,
        data_source: SharedDataSource,
        tap_handler: TapHandler,
    ) -> Vec2 {
        self.rows = rows;
        self.columns = columns;
        self.data_source = Some(data_source);
        self.tap_handler = Some(tap_handler);
        self.cells = vec![CellContent::default(); rows * columns];
        log::debug!("field grid rebuilt to {}x{}", rows, columns);
        self.pixel_size()
    }

    fn set_data_source(&mut self, data_source: SharedDataSource) {
        self.data_source = Some(data_source);
    }

    fn set_tap_handler(&mut self, tap_handler: TapHandler) {
        self.tap_handler = Some(tap_handler);
    }

    fn refresh(&mut self, cells: &[CellCoord]) {
        for &coord in cells {
            self.load_cell(coord);
        }
    }

    fn reload_all(&mut self) {
        for row in 0..self.rows {
            for column in 0..self.columns {
                self.load_cell(CellCoord::new(row, column));
            }
        }
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CellDataSource;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Uniform(CellContent);

    impl CellDataSource for Uniform {
        fn cell(&self, _coord: CellCoord) -> CellContent {
            self.0
        }
    }

    #[test]
    fn test_pixel_size_includes_border() {
        let mut grid = FieldGrid::with_cell_size(10.0, 1.0);
        let size = grid.rebuild(3, 5, Rc::new(Uniform(CellContent::Covered)), Box::new(|_| {}));
        assert_eq!(size, Vec2::new(52.0, 32.0));
    }

    #[test]
    fn test_cell_at_and_rect_agree() {
        let mut grid = FieldGrid::with_cell_size(10.0, 1.0);
        grid.rebuild(4, 4, Rc::new(Uniform(CellContent::Covered)), Box::new(|_| {}));

        let coord = CellCoord::new(2, 3);
        let rect = grid.cell_rect(coord);
        assert_eq!(grid.cell_at(rect.center()), Some(coord));
        assert_eq!(grid.cell_at(Pos2::new(0.5, 0.5)), None);
        assert_eq!(grid.cell_at(Pos2::new(45.0, 5.0)), None);
    }

    #[test]
    fn test_refresh_reads_only_requested_cells() {
        let source = Rc::new(RefCell::new(Uniform(CellContent::Covered)));
        let mut grid = FieldGrid::with_cell_size(10.0, 0.0);
        grid.rebuild(2, 2, source.clone(), Box::new(|_| {}));
        grid.reload_all();
        assert_eq!(grid.cells_loaded(), 4);

        source.borrow_mut().0 = CellContent::Flagged;
        grid.refresh(&[CellCoord::new(1, 0)]);

        assert_eq!(grid.cells_loaded(), 5);
        assert_eq!(grid.shown_cell(CellCoord::new(1, 0)), Some(CellContent::Flagged));
        assert_eq!(grid.shown_cell(CellCoord::new(0, 0)), Some(CellContent::Covered));
    }

    #[test]
    fn test_tap_requires_visible_grid() {
        let taps = Rc::new(Cell::new(0));
        let counter = taps.clone();
        let mut grid = FieldGrid::new();
        grid.rebuild(
            2,
            2,
            Rc::new(Uniform(CellContent::Covered)),
            Box::new(move |_| counter.set(counter.get() + 1)),
        );

        assert!(!grid.tap(CellCoord::new(0, 0)));
        grid.set_hidden(false);
        assert!(grid.tap(CellCoord::new(0, 0)));
        assert!(!grid.tap(CellCoord::new(5, 0)));
        assert_eq!(taps.get(), 1);
    }
}
