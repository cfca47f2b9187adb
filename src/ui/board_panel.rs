//! Board panel UI rendering
//!
//! Handles the central panel hosting the viewport: it reports the available
//! area to the viewport as its frame, routes pointer input, and paints the
//! field.

use crate::app::AppState;
use crate::rendering::field_renderer;
use crate::ui::input::board_input_handler::{self, BoardInputResult};
use sweepview::ThemeColors;

/// Renders the board panel and handles its input.
///
/// Returns the result of input handling so the caller can repaint while a
/// gesture is in flight.
pub fn render_board_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> BoardInputResult {
    let frame_rect = ui.available_rect_before_wrap();

    // The available area is the viewport frame; a collapsed panel keeps the old frame
    if frame_rect.width() > 0.0 && frame_rect.height() > 0.0 {
        if let Err(e) = state.viewport.set_frame_size(frame_rect.size()) {
            log::warn!("ignoring board frame: {}", e);
        }
    }

    let response = ui.interact(
        frame_rect,
        ui.id().with("board_canvas"),
        egui::Sense::click_and_drag().union(egui::Sense::hover()),
    );

    let (is_dragging, is_zooming, momentum, hovered_cell) = state.interaction.for_input_handler();
    let result = board_input_handler::handle_board_input(
        ctx,
        frame_rect,
        &response,
        &mut state.viewport,
        is_dragging,
        is_zooming,
        momentum,
        hovered_cell,
    );

    if state.interaction.is_dragging() {
        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
    }

    let painter = ui.painter_at(frame_rect);
    painter.rect_filled(frame_rect, 0.0, theme_colors.background);
    field_renderer::render_field(
        &painter,
        frame_rect,
        &state.viewport,
        theme_colors,
        state.interaction.hovered_cell(),
        state.preferences.show_grid_lines,
    );

    if !state.viewport.is_field_visible() {
        painter.text(
            frame_rect.center(),
            egui::Align2::CENTER_CENTER,
            "Preparing board...",
            egui::FontId::proportional(16.0),
            theme_colors.text_dim,
        );
    }

    result
}
