use egui::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Position of a cell in the field grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    pub row: usize,
    pub column: usize,
}

impl CellCoord {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// What a data source reports for a single cell.
///
/// The grid surface caches these values and draws from the cache, so a cell
/// only changes on screen after it has been refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellContent {
    #[default]
    Covered,
    Flagged,
    Revealed { adjacent: u8 },
    Mine,
    Exploded,
}

/// Supplies cell content to a grid surface on demand.
pub trait CellDataSource {
    /// Returns the content of the cell at `coord`.
    fn cell(&self, coord: CellCoord) -> CellContent;
}

impl<T: CellDataSource + ?Sized> CellDataSource for RefCell<T> {
    fn cell(&self, coord: CellCoord) -> CellContent {
        self.borrow().cell(coord)
    }
}

/// Data source handle shared between the caller and the grid surface.
pub type SharedDataSource = Rc<dyn CellDataSource>;

/// Invoked by the grid surface when a cell is tapped.
pub type TapHandler = Box<dyn FnMut(CellCoord)>;

/// Invoked once per viewport configuration with the grid's pixel size.
pub type ReadyHandler = Box<dyn FnOnce(Vec2)>;

/// Widget that lays out and renders cells in a row/column grid.
///
/// The viewport treats the surface as a black box: it asks for a rebuild when
/// dimensions change and for targeted refreshes otherwise.
pub trait GridSurface {
    /// Lays out a `rows` x `columns` grid and returns its pixel size.
    fn rebuild(
        &mut self,
        rows: usize,
        columns: usize,
        data_source: SharedDataSource,
        tap_handler: TapHandler,
    ) -> Vec2;

    /// Replaces the data source without relaying out.
    fn set_data_source(&mut self, data_source: SharedDataSource);

    /// Replaces the tap handler.
    fn set_tap_handler(&mut self, tap_handler: TapHandler);

    /// Re-reads exactly the given cells from the data source.
    fn refresh(&mut self, cells: &[CellCoord]);

    /// Re-reads every cell from the data source.
    fn reload_all(&mut self);

    fn set_hidden(&mut self, hidden: bool);

    fn is_hidden(&self) -> bool;
}

/// Settle notifications from the pan/zoom container.
///
/// The container reports the end of a gesture through one of three events
/// depending on how much momentum the gesture carried.
pub trait ScrollDelegate {
    /// A pinch or wheel zoom finished at `scale`.
    fn on_zoom_ended(&mut self, scale: f32);

    /// A drag finished; `will_decelerate` is true when momentum scrolling follows.
    fn on_drag_ended(&mut self, will_decelerate: bool);

    /// Momentum scrolling after a drag came to rest.
    fn on_decelerating_ended(&mut self);
}

/// Kinds of gesture recognizers that compete for pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Pan,
    Zoom,
    Tap,
}

/// Arbitrates between gesture recognizers that see the same input.
pub trait GestureDelegate {
    /// Whether `gesture` may be recognized while `other` is also recognizing.
    fn should_recognize_simultaneously(&self, gesture: GestureKind, other: GestureKind) -> bool;
}
