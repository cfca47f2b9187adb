//! Rendering subsystem for drawing the board
//!
//! This module contains the low-level painting of the field grid:
//! - Field rendering (border, visible cells, cell decorations)

pub mod field_renderer;
