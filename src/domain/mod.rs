//! Domain logic modules for the minefield viewer.
//!
//! This module contains the content the viewer displays:
//! - Board presets (standard board dimensions)
//! - The demo board (cell states served to the grid surface)

pub mod board;
