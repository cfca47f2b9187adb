//! Board content and configuration bookkeeping.
//!
//! This module holds the demo board shared with the grid surface, plus the
//! channels through which the surface reports taps and the viewport reports
//! completed setups back to the application.

use crate::domain::board::{BoardPreset, DemoBoard};
use egui::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{channel, Receiver, Sender};
use sweepview::{CellCoord, ReadyHandler, SharedDataSource, TapHandler};

/// State related to the board being shown.
///
/// Responsibilities:
/// - Owning the demo board (shared with the grid surface as its data source)
/// - Handing out tap and setup-completion callbacks
/// - Collecting what those callbacks reported since the last frame
pub struct BoardState {
    /// Preset the current board was created from
    preset: BoardPreset,
    /// Board content, shared with the grid surface
    board: Rc<RefCell<DemoBoard>>,
    /// Cells tapped on the grid surface, drained once per frame
    tap_sender: Sender<CellCoord>,
    tap_receiver: Receiver<CellCoord>,
    /// Field sizes reported by completed viewport setups
    ready_sender: Sender<Vec2>,
    ready_receiver: Receiver<Vec2>,
    /// Field size from the most recent completed setup
    field_size: Option<Vec2>,
    /// Setups requested but not yet reported complete
    pending_setups: usize,
}

impl std::fmt::Debug for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardState")
            .field("preset", &self.preset)
            .field("field_size", &self.field_size)
            .field("pending_setups", &self.pending_setups)
            .finish_non_exhaustive()
    }
}

impl BoardState {
    /// Creates board state with a fresh board for `preset`.
    pub fn new(preset: BoardPreset) -> Self {
        let (tap_sender, tap_receiver) = channel();
        let (ready_sender, ready_receiver) = channel();
        Self {
            preset,
            board: Rc::new(RefCell::new(DemoBoard::for_preset(preset))),
            tap_sender,
            tap_receiver,
            ready_sender,
            ready_receiver,
            field_size: None,
            pending_setups: 0,
        }
    }

    // ===== Board Queries =====

    pub fn preset(&self) -> BoardPreset {
        self.preset
    }

    pub fn board(&self) -> &Rc<RefCell<DemoBoard>> {
        &self.board
    }

    /// Field size reported by the last completed setup, if any.
    pub fn field_size(&self) -> Option<Vec2> {
        self.field_size
    }

    /// Returns true while a requested setup has not reported back yet.
    pub fn is_setting_up(&self) -> bool {
        self.pending_setups > 0
    }

    // ===== Board Mutations =====

    /// Replaces the board with a fresh one for `preset`.
    ///
    /// The surface keeps reading the old board until the next setup swaps in
    /// the new data source.
    pub fn replace_board(&mut self, preset: BoardPreset) {
        self.preset = preset;
        self.board = Rc::new(RefCell::new(DemoBoard::for_preset(preset)));
    }

    // ===== Callbacks for the viewport =====

    /// Data source handle for the grid surface.
    pub fn data_source(&self) -> SharedDataSource {
        self.board.clone()
    }

    /// Tap handler forwarding tapped cells into this state.
    pub fn tap_handler(&self) -> TapHandler {
        let sender = self.tap_sender.clone();
        Box::new(move |coord| {
            let _ = sender.send(coord);
        })
    }

    /// Completion handler for one setup; counts the setup as pending.
    pub fn ready_handler(&mut self) -> ReadyHandler {
        self.pending_setups += 1;
        let sender = self.ready_sender.clone();
        Box::new(move |size| {
            let _ = sender.send(size);
        })
    }

    /// Takes every cell tapped since the last call.
    pub fn drain_taps(&mut self) -> Vec<CellCoord> {
        self.tap_receiver.try_iter().collect()
    }

    /// Records completed setups; returns the latest reported field size.
    pub fn collect_completed_setups(&mut self) -> Option<Vec2> {
        let mut latest = None;
        for size in self.ready_receiver.try_iter() {
            self.pending_setups = self.pending_setups.saturating_sub(1);
            latest = Some(size);
        }
        if latest.is_some() {
            self.field_size = latest;
        }
        latest
    }
}
