//! State management modules for the minefield viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Board state (demo board, tap and setup callbacks)
//! - Interaction state (drag, momentum, zoom gesture, hover)
//! - Theme state (theme manager, current theme)
//! - Preferences (persisted board preset and display options)

mod board_state;
mod interaction;
mod theme_state;
mod preferences;

pub use board_state::BoardState;
pub use interaction::InteractionState;
pub use theme_state::{ThemeState, DEFAULT_THEME};
pub use preferences::Preferences;
