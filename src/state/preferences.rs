//! Persisted viewer preferences.

use crate::domain::board::BoardPreset;
use serde::{Deserialize, Serialize};

/// User preferences saved between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Board size to open on startup
    pub preset: BoardPreset,
    /// Whether to draw lines between cells
    pub show_grid_lines: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            preset: BoardPreset::Beginner,
            show_grid_lines: true,
        }
    }
}
