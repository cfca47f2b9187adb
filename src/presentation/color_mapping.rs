//! Color mapping for board cells.
//!
//! This module provides functions for:
//! - Picking the fill color of a cell from its content
//! - Picking the digit color for revealed cells
//! - Getting the current theme's color palette

use egui::Color32;
use sweepview::{CellContent, ThemeColors, ThemeManager};

/// Returns a reference to the current theme's color palette.
///
/// Falls back to the first available theme if the name is unknown.
pub fn theme_colors<'a>(
    theme_manager: &'a ThemeManager,
    current_theme_name: &str,
) -> Option<&'a ThemeColors> {
    theme_manager
        .get_theme(current_theme_name)
        .or_else(|| {
            let fallback = theme_manager.list_themes().first().copied()?;
            theme_manager.get_theme(fallback)
        })
        .map(|t| &t.colors)
}

/// Background fill for a cell.
pub fn cell_fill(content: CellContent, colors: &ThemeColors) -> Color32 {
    match content {
        CellContent::Covered | CellContent::Flagged => colors.cell_covered,
        CellContent::Revealed { .. } | CellContent::Mine => colors.cell_revealed,
        CellContent::Exploded => colors.cell_exploded,
    }
}

/// Digit color for a revealed cell with `adjacent` neighbours, if a digit is drawn.
pub fn number_color(adjacent: u8, colors: &ThemeColors) -> Option<Color32> {
    match adjacent {
        1..=8 => Some(colors.numbers[usize::from(adjacent) - 1]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_colors_cover_one_to_eight() {
        let manager = ThemeManager::new();
        let colors = theme_colors(&manager, "Classic").unwrap();
        assert_eq!(number_color(0, colors), None);
        assert_eq!(number_color(1, colors), Some(colors.numbers[0]));
        assert_eq!(number_color(8, colors), Some(colors.numbers[7]));
        assert_eq!(number_color(9, colors), None);
    }

    #[test]
    fn test_unknown_theme_uses_fallback() {
        let manager = ThemeManager::new();
        assert!(theme_colors(&manager, "Nope").is_some());
    }
}
