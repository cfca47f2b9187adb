//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying board and viewport metadata.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::utils::{format_memory_mb, format_scale, get_current_memory_mb};

/// Renders the status panel at the bottom of the window with board metadata
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        // Always show memory usage first
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        let preset = state.board.preset();
        let viewport = &state.viewport;

        if state.board.is_setting_up() {
            ui.label(RichText::new(format!("{} | Preparing board...", preset.label())).strong());
            return;
        }

        // Size reported by the last completed setup
        let field = state.board.field_size().unwrap_or_else(|| viewport.field_size());
        ui.label(RichText::new(format!(
            "{} {}x{} | Field: {:.0}x{:.0} px | Zoom: {} (min {}) | Pending refresh: {}",
            preset.label(),
            viewport.rows(),
            viewport.columns(),
            field.x,
            field.y,
            format_scale(viewport.zoom_scale()),
            format_scale(viewport.min_scale()),
            viewport.modified_cells().len(),
        )).strong());
    });
}
