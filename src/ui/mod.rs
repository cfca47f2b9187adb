//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the minefield viewer:
//! - Header panel (preset selector, restart, show entire field, theme selector)
//! - Board panel (the viewport frame hosting the field)
//! - Status bar (board and zoom readout)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (pan, zoom, momentum, taps)

pub mod header;
pub mod board_panel;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
