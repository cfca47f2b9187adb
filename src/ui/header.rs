//! Header panel UI rendering
//!
//! Handles the top bar with board controls, zoom readout, and theme selector.

use eframe::egui;
use egui::Color32;
use crate::app::AppState;
use crate::domain::board::BoardPreset;
use crate::utils::format_scale;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a different board preset
    NewBoardRequested(BoardPreset),
    /// User clicked "New Board" to restart the current board
    RestartRequested,
    /// User clicked "Show Entire Field"
    ShowEntireFieldRequested,
}

/// Renders the application header with board and zoom controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        let current = state.board.preset();
        let mut selected = current;
        egui::ComboBox::from_id_salt("preset_selector")
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for preset in BoardPreset::ALL {
                    let text = format!("{} ({}x{})", preset.label(), preset.rows(), preset.columns());
                    ui.selectable_value(&mut selected, preset, text);
                }
            });
        if selected != current {
            interaction = Some(HeaderInteraction::NewBoardRequested(selected));
        }

        let idle = !state.board.is_setting_up();
        if ui.add_enabled(idle, egui::Button::new("🔄 New Board")).clicked() {
            interaction = Some(HeaderInteraction::RestartRequested);
        }

        ui.separator();

        if ui.button("⛶ Show Entire Field").clicked() {
            interaction = Some(HeaderInteraction::ShowEntireFieldRequested);
        }

        ui.label(format!("Zoom: {}", format_scale(state.viewport.zoom_scale())));

        ui.separator();

        ui.checkbox(&mut state.preferences.show_grid_lines, "Grid Lines");

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name
                        );
                    }
                });

            // Persisted from App::save
            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
