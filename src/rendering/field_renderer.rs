//! Field rendering logic
//!
//! Paints the grid surface hosted by the viewport: the field border, the
//! cells inside the visible frame, and cell decorations. Cells are drawn from
//! the surface's cached content, so a cell only changes on screen once the
//! viewport has refreshed it.

use eframe::egui;
use egui::{pos2, Align2, FontId, Pos2, Rect, Shape, Stroke, StrokeKind, Vec2};
use std::ops::Range;
use sweepview::{adjust_brightness, CellContent, CellCoord, GridViewport, ThemeColors};

use crate::presentation::color_mapping;

/// Renders the field shown by `viewport` inside `frame_rect`.
///
/// # Arguments
/// * `painter` - Painter clipped to the board frame
/// * `frame_rect` - Screen rectangle of the viewport frame
/// * `viewport` - Viewport holding the field grid
/// * `colors` - Color palette for the current theme
/// * `hovered` - Cell under the pointer, highlighted if covered
/// * `show_grid_lines` - Whether to leave a gap between cells
pub fn render_field(
    painter: &egui::Painter,
    frame_rect: Rect,
    viewport: &GridViewport,
    colors: &ThemeColors,
    hovered: Option<CellCoord>,
    show_grid_lines: bool,
) {
    if !viewport.is_field_visible() {
        return;
    }

    let origin = frame_rect.min.to_vec2();
    let grid = viewport.surface();
    let zoom = viewport.displayed_zoom_scale();

    let field_rect = viewport
        .field_to_frame(Rect::from_min_size(Pos2::ZERO, grid.pixel_size()))
        .translate(origin);
    painter.rect_filled(field_rect, 0.0, colors.grid_line);
    painter.rect_stroke(
        field_rect,
        0.0,
        Stroke::new(grid.border_width() * zoom, colors.field_border),
        StrokeKind::Inside,
    );

    let Some((rows, columns)) = visible_cells(viewport, frame_rect.size()) else {
        return;
    };

    let gap = if show_grid_lines { (zoom * 0.5).max(0.5) } else { 0.0 };
    for row in rows {
        for column in columns.clone() {
            let coord = CellCoord::new(row, column);
            let Some(content) = grid.shown_cell(coord) else {
                continue;
            };
            let rect = viewport.cell_frame_rect(coord).translate(origin).shrink(gap);
            render_cell(painter, rect, content, hovered == Some(coord), colors);
        }
    }
}

/// Row and column ranges of the cells that intersect the frame.
///
/// Returns `None` when no cell is visible.
pub fn visible_cells(viewport: &GridViewport, frame_size: Vec2) -> Option<(Range<usize>, Range<usize>)> {
    let grid = viewport.surface();
    if grid.rows() == 0 || grid.columns() == 0 {
        return None;
    }

    let top_left = viewport.frame_to_field(Pos2::ZERO);
    let bottom_right = viewport.frame_to_field(frame_size.to_pos2());
    let cell = grid.cell_size();
    let border = grid.border_width();

    let first = |v: f32, n: usize| (((v - border) / cell).floor().max(0.0) as usize).min(n);
    let end = |v: f32, n: usize| (((v - border) / cell).ceil().max(0.0) as usize).min(n);

    let rows = first(top_left.y, grid.rows())..end(bottom_right.y, grid.rows());
    let columns = first(top_left.x, grid.columns())..end(bottom_right.x, grid.columns());
    (!rows.is_empty() && !columns.is_empty()).then_some((rows, columns))
}

fn render_cell(painter: &egui::Painter, rect: Rect, content: CellContent, hovered: bool, colors: &ThemeColors) {
    let mut fill = color_mapping::cell_fill(content, colors);
    if hovered && matches!(content, CellContent::Covered | CellContent::Flagged) {
        fill = adjust_brightness(fill, 1.15);
    }
    painter.rect_filled(rect, rect.width() * 0.08, fill);

    match content {
        CellContent::Covered => {}
        CellContent::Revealed { adjacent } => {
            if let Some(color) = color_mapping::number_color(adjacent, colors) {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    adjacent.to_string(),
                    FontId::proportional(rect.height() * 0.6),
                    color,
                );
            }
        }
        CellContent::Flagged => render_flag(painter, rect, colors.cell_flag),
        CellContent::Mine | CellContent::Exploded => {
            painter.circle_filled(rect.center(), rect.width() * 0.25, colors.cell_mine);
        }
    }
}

fn render_flag(painter: &egui::Painter, rect: Rect, color: egui::Color32) {
    let center = rect.center();
    let size = rect.width();
    let pole_x = center.x - size * 0.1;
    let top = center.y - size * 0.3;

    painter.line_segment(
        [pos2(pole_x, top), pos2(pole_x, center.y + size * 0.3)],
        Stroke::new((size * 0.05).max(1.0), color),
    );
    painter.add(Shape::convex_polygon(
        vec![
            pos2(pole_x, top),
            pos2(pole_x + size * 0.3, top + size * 0.15),
            pos2(pole_x, top + size * 0.3),
        ],
        color,
        Stroke::NONE,
    ));
}
