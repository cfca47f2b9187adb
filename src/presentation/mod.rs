//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from board content:
//! - Color mapping for cells and digits

pub mod color_mapping;
