//! Application-level coordination and workflow management.
//!
//! Handles high-level operations like opening and restarting boards, feeding
//! cell taps back into the board, and tracking viewport setup completion.

use crate::app::AppState;
use crate::domain::board::BoardPreset;
use egui::Vec2;
use sweepview::CellCoord;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Configuring the viewport for the current board
/// - Turning taps into board changes and dirty-cell marks
/// - Collecting setup completions reported by the viewport
/// - Managing error states
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Shows the current board in the viewport.
    ///
    /// The viewport decides between a full rebuild (new dimensions) and an
    /// in-place refresh of the cells marked changed (same dimensions).
    pub fn setup_board(state: &mut AppState) -> Vec2 {
        let (rows, columns) = {
            let board = state.board.board().borrow();
            (board.rows(), board.columns())
        };
        let data_source = state.board.data_source();
        let tap_handler = state.board.tap_handler();
        let ready_handler = state.board.ready_handler();

        state.viewport.configure(
            rows,
            columns,
            data_source,
            tap_handler,
            Some(ready_handler),
        )
    }

    /// Replaces the board with a fresh one of the given preset.
    pub fn open_board(state: &mut AppState, preset: BoardPreset) {
        log::info!("opening {} board", preset.label());

        // Taps aimed at the old board must not land on the new one
        let _ = state.board.drain_taps();

        state.board.replace_board(preset);
        state.preferences.preset = preset;
        state.interaction.reset();
        state.error_message = None;
        Self::setup_board(state);
    }

    /// Covers every cell of the current board and shows it again in place.
    ///
    /// Only the cells that were uncovered are marked changed, so the viewport
    /// refreshes just those on the same-dimension setup that follows.
    pub fn restart_board(state: &mut AppState) {
        let _ = state.board.drain_taps();

        let changed = state.board.board().borrow_mut().reset();
        log::debug!("restarting board, {} cells to re-show", changed.len());
        Self::mark_changed(state, changed);

        state.interaction.reset();
        Self::setup_board(state);
    }

    /// Applies every tap reported since the last frame.
    ///
    /// Returns the number of taps handled.
    pub fn handle_pending_taps(state: &mut AppState) -> usize {
        let taps = state.board.drain_taps();
        for &coord in &taps {
            let changed = state.board.board().borrow_mut().cycle(coord);
            Self::mark_changed(state, changed);
        }
        taps.len()
    }

    /// Applies a tap the board panel just delivered to the surface.
    ///
    /// The tap is picked up from the surface's tap channel so it lands in the
    /// same frame, before the post-layout pass refreshes the changed cells.
    /// Returns the number of taps handled.
    pub fn handle_tap(state: &mut AppState, coord: CellCoord) -> usize {
        log::debug!("tapped cell ({}, {})", coord.row, coord.column);
        Self::handle_pending_taps(state)
    }

    /// Collects completed viewport setups.
    ///
    /// Called once per frame in the update loop. Returns true if a setup completed.
    pub fn check_setup_completion(state: &mut AppState) -> bool {
        match state.board.collect_completed_setups() {
            Some(size) => {
                log::info!("board ready at {:.0}x{:.0} px", size.x, size.y);
                true
            }
            None => false,
        }
    }

    /// Zooms out so the whole field is visible.
    pub fn show_entire_field(state: &mut AppState) {
        state.viewport.show_entire_field();
    }

    fn mark_changed(state: &mut AppState, cells: Vec<CellCoord>) {
        if let Err(e) = state.viewport.mark_cells_changed(cells) {
            log::warn!("could not mark cells changed: {}", e);
            state.error_message = Some(format!("Refresh failed: {}", e));
        }
    }
}
