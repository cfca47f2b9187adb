//! Pointer gesture state for the board panel.
//!
//! This module encapsulates the state of ongoing gestures over the board:
//! dragging, momentum scrolling after a fling, pinch/wheel zooming, and the
//! cell under the pointer.

use egui::Vec2;
use sweepview::CellCoord;

/// State related to ongoing pointer gestures.
///
/// Responsibilities:
/// - Tracking drag/pan operations
/// - Carrying fling velocity while momentum scrolling decays
/// - Detecting when a zoom gesture ends
/// - Remembering the hovered cell for highlighting
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Whether user is currently dragging to pan
    is_dragging: bool,
    /// Whether a zoom gesture was active on the previous frame
    is_zooming: bool,
    /// Remaining momentum velocity in points per second
    momentum: Option<Vec2>,
    /// Cell under the pointer, if any
    hovered_cell: Option<CellCoord>,
}

impl InteractionState {
    /// Creates a new interaction state with no active gestures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all gesture state, e.g. when the board is replaced.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ===== Gesture Queries =====

    /// Returns true if a drag operation is in progress.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Returns true while momentum scrolling is running.
    pub fn is_decelerating(&self) -> bool {
        self.momentum.is_some()
    }

    pub fn hovered_cell(&self) -> Option<CellCoord> {
        self.hovered_cell
    }

    // ===== Low-Level Accessors (for input handlers) =====

    /// Returns multiple mutable references for input handling (splits borrows).
    ///
    /// # Returns
    /// Tuple of (is_dragging, is_zooming, momentum, hovered_cell)
    pub(crate) fn for_input_handler(
        &mut self,
    ) -> (&mut bool, &mut bool, &mut Option<Vec2>, &mut Option<CellCoord>) {
        (
            &mut self.is_dragging,
            &mut self.is_zooming,
            &mut self.momentum,
            &mut self.hovered_cell,
        )
    }
}
