//! Utility modules for the minefield viewer.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_scale, get_current_memory_mb, format_memory_mb};
