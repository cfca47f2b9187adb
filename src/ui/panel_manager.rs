//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, board, status) and collects their
//! interactions for the application coordinator.

use crate::app::AppState;
use crate::domain::board::BoardPreset;
use crate::presentation::color_mapping;
use crate::ui::input::board_input_handler::BoardInputResult;
use crate::ui::{board_panel, header, status_bar};
use sweepview::CellCoord;

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested a fresh board of the given preset
    NewBoardRequested(BoardPreset),
    /// User requested to restart the current board
    RestartRequested,
    /// User requested to zoom out to the whole field
    ShowEntireFieldRequested,
    /// A cell on the board was tapped
    CellTapped(CellCoord),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Get theme colors for rendering
        let Some(theme_colors) =
            color_mapping::theme_colors(state.theme.theme_manager(), state.theme.current_theme_name()).cloned()
        else {
            log::error!("no themes available");
            return None;
        };

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::NewBoardRequested(preset) => {
                        PanelInteraction::NewBoardRequested(preset)
                    }
                    header::HeaderInteraction::RestartRequested => PanelInteraction::RestartRequested,
                    header::HeaderInteraction::ShowEntireFieldRequested => {
                        PanelInteraction::ShowEntireFieldRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Center: the board
        let board_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(0))
            .fill(theme_colors.background);

        egui::CentralPanel::default()
            .frame(board_frame)
            .show(ctx, |ui| {
                let result = board_panel::render_board_panel(ui, ctx, state, &theme_colors);
                if let BoardInputResult::CellTapped(coord) = result {
                    interaction = Some(PanelInteraction::CellTapped(coord));
                }
            });

        interaction
    }
}
