//! Input handling subsystem for UI interactions.
//!
//! This module contains all input handling logic:
//! - Board input handling (pan, momentum, zoom, taps, hover tracking)

pub mod board_input_handler;
