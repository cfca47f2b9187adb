//! Centralized application state for the minefield viewer.
//!
//! This module composes focused state components that each manage one aspect
//! of the application, next to the grid viewport that everything revolves
//! around. Keeping the components separate lets the UI borrow them
//! independently.

use crate::state::{BoardState, InteractionState, Preferences, ThemeState};
use egui::Vec2;
use sweepview::{GridViewport, ViewportError};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Pannable, zoomable viewport hosting the field grid
    pub viewport: GridViewport,

    /// Demo board and viewport callbacks
    pub board: BoardState,

    /// Interaction state (drag, momentum, zoom, hover)
    pub interaction: InteractionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Persisted preferences
    pub preferences: Preferences,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates the application state with a viewport of `frame_size`.
    ///
    /// The frame size only needs to be a sensible first guess; the board
    /// panel reports the real size every frame.
    pub fn new(
        frame_size: Vec2,
        theme_name: String,
        preferences: Preferences,
    ) -> Result<Self, ViewportError> {
        Ok(Self {
            viewport: GridViewport::with_field_grid(frame_size)?,
            board: BoardState::new(preferences.preset),
            interaction: InteractionState::new(),
            theme: ThemeState::with_theme(theme_name),
            preferences,
            error_message: None,
        })
    }
}
