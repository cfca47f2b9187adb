//! Minefield Viewer GUI Application
//!
//! This module provides an interactive viewer for a minesweeper field using the egui framework.
//! The viewer features:
//! - A pannable, zoomable board that recenters when smaller than the window

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! - Momentum scrolling after a fling and pinch/Ctrl+wheel zoom around the pointer
//! - Targeted refresh of only the cells that changed
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `domain/` - Board presets and the demo board
//! - `presentation/` - Visual styling and color mapping
//! - `utils/` - Utility functions for formatting
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `rendering/` - Low-level rendering of the field
//! - `state/` - State management for the board, gestures, theme and preferences

use anyhow::Context as _;
use eframe::egui;

mod utils;
mod domain;
mod presentation;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use domain::board::BoardPreset;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Initial window size, also the first guess for the board frame
const WINDOW_SIZE: [f32; 2] = [900.0, 700.0];

/// Main application entry point that initializes and launches the viewer GUI.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional first argument selects the board preset
    let preset = std::env::args()
        .nth(1)
        .map(|name| {
            BoardPreset::from_name(&name).with_context(|| {
                format!("unknown board preset '{}' (expected beginner, intermediate or expert)", name)
            })
        })
        .transpose()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title("Minefield Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Minefield Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(SweepViewerApp::new(cc, preset)?))),
    )
    .map_err(|e| anyhow::anyhow!("viewer exited with an error: {}", e))
}

/// The main minefield viewer application.
///
/// Most functionality is delegated to coordinators:
/// - `ApplicationCoordinator` handles board setup, taps, and completion tracking
/// - `ThemeCoordinator` handles theme persistence and application
/// - `SettingsCoordinator` handles preference persistence
/// - `PanelManager` handles UI panel layout and rendering
struct SweepViewerApp {
    /// Centralized application state
    state: AppState,
}

impl SweepViewerApp {
    /// Creates a new viewer instance with theme and preferences loaded from persistent storage.
    ///
    /// A preset given on the command line overrides the persisted one.
    fn new(cc: &eframe::CreationContext, preset: Option<BoardPreset>) -> Result<Self, sweepview::ViewportError> {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let mut preferences = SettingsCoordinator::load_preferences(cc.storage);
        if let Some(preset) = preset {
            preferences.preset = preset;
        }

        let frame_size = egui::Vec2::from(WINDOW_SIZE);
        let mut state = AppState::new(frame_size, current_theme_name, preferences)?;
        ApplicationCoordinator::setup_board(&mut state);
        log::info!("viewer started with {} board", state.board.preset().label());

        Ok(Self { state })
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::NewBoardRequested(preset) => {
                ApplicationCoordinator::open_board(&mut self.state, preset);
            }
            PanelInteraction::RestartRequested => {
                ApplicationCoordinator::restart_board(&mut self.state);
            }
            PanelInteraction::ShowEntireFieldRequested => {
                ApplicationCoordinator::show_entire_field(&mut self.state);
            }
            PanelInteraction::CellTapped(coord) => {
                ApplicationCoordinator::handle_tap(&mut self.state, coord);
            }
        }
    }
}

impl eframe::App for SweepViewerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_preferences(storage, &self.state.preferences);
    }

    /// Main update loop that renders all UI panels and handles application state.
    ///
    /// 1. Collect completed setups and apply taps from the last frame
    /// 2. Apply theme
    /// 3. Render all panels via PanelManager (the board panel sizes the viewport frame)
    /// 4. Handle panel interactions
    /// 5. Run the viewport's post-layout tasks now that layout has settled
    /// 6. Advance animations and keep repainting while anything moves
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_setup_completion(&mut self.state);
        ApplicationCoordinator::handle_pending_taps(&mut self.state);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }

        let ran = self.state.viewport.run_post_layout();

        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        let animating = self.state.viewport.advance(dt);

        if ran > 0
            || animating
            || self.state.viewport.needs_update()
            || self.state.interaction.is_decelerating()
            || self.state.board.is_setting_up()
        {
            ctx.request_repaint();
        }
    }
}
