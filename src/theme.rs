//! Theme support for the minefield viewer
//!
//! Provides color palettes for the board and the surrounding UI, with a small
//! set of built-in themes (Light, Dark, Classic) behind a theme manager.
//!
//! # Examples
//!
//! ```
//! use sweepview::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let classic = manager.get_theme("Classic").unwrap();
//! println!("Covered cells: {:?}", classic.colors.cell_covered);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme, covering the UI chrome and the board
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,

    // Board colors
    pub field_border: Color32,
    pub grid_line: Color32,
    pub cell_covered: Color32,
    pub cell_revealed: Color32,
    pub cell_flag: Color32,
    pub cell_mine: Color32,
    pub cell_exploded: Color32,

    /// Digit colors for 1 through 8 adjacent mines
    pub numbers: [Color32; 8],
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Classic".to_string(), classic_theme());

        Self { themes }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.error_fg_color = colors.cell_exploded;
        visuals.warn_fg_color = colors.cell_flag;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Conventional digit colors, tuned for light cell backgrounds
fn light_numbers() -> [Color32; 8] {
    [
        hex_to_color32("#1f4fd1"),
        hex_to_color32("#2e8b32"),
        hex_to_color32("#d12a2a"),
        hex_to_color32("#1a1f7a"),
        hex_to_color32("#7a1a1a"),
        hex_to_color32("#178080"),
        hex_to_color32("#222222"),
        hex_to_color32("#7a7a7a"),
    ]
}

/// Creates the Light theme using egui defaults for the chrome
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with egui default colors".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(248, 248, 248),
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),

            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),

            field_border: Color32::BLACK,
            grid_line: Color32::from_rgb(170, 170, 170),
            cell_covered: Color32::from_rgb(200, 210, 225),
            cell_revealed: Color32::from_rgb(250, 250, 250),
            cell_flag: Color32::from_rgb(230, 120, 20),
            cell_mine: Color32::from_rgb(40, 40, 40),
            cell_exploded: Color32::from_rgb(200, 40, 40),

            numbers: light_numbers(),
        },
    }
}

/// Creates the Dark theme using egui defaults for the chrome
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default colors".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(39, 39, 39),
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),

            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),

            field_border: Color32::from_rgb(10, 10, 10),
            grid_line: Color32::from_rgb(25, 25, 25),
            cell_covered: Color32::from_rgb(84, 98, 118),
            cell_revealed: Color32::from_rgb(52, 52, 52),
            cell_flag: Color32::from_rgb(243, 156, 18),
            cell_mine: Color32::from_rgb(220, 220, 220),
            cell_exploded: Color32::from_rgb(231, 76, 60),

            numbers: [
                hex_to_color32("#3498db"),
                hex_to_color32("#2ecc71"),
                hex_to_color32("#e74c3c"),
                hex_to_color32("#9b59b6"),
                hex_to_color32("#f39c12"),
                hex_to_color32("#1abc9c"),
                hex_to_color32("#ecf0f1"),
                hex_to_color32("#95a5a6"),
            ],
        },
    }
}

/// Creates the Classic theme, the gray bevel look of the original desktop game
fn classic_theme() -> Theme {
    Theme {
        name: "Classic".to_string(),
        description: "Gray board with the traditional digit palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#c0c0c0"),
            panel_background: hex_to_color32("#c0c0c0"),
            extreme_background: hex_to_color32("#dcdcdc"),

            text: Color32::BLACK,
            text_dim: hex_to_color32("#606060"),

            selection: hex_to_color32("#000080"),
            hover: hex_to_color32("#d4d4d4"),

            field_border: hex_to_color32("#808080"),
            grid_line: hex_to_color32("#808080"),
            cell_covered: hex_to_color32("#bdbdbd"),
            cell_revealed: hex_to_color32("#e0e0e0"),
            cell_flag: hex_to_color32("#ff0000"),
            cell_mine: Color32::BLACK,
            cell_exploded: hex_to_color32("#ff0000"),

            numbers: [
                hex_to_color32("#0000ff"),
                hex_to_color32("#008000"),
                hex_to_color32("#ff0000"),
                hex_to_color32("#000080"),
                hex_to_color32("#800000"),
                hex_to_color32("#008080"),
                hex_to_color32("#000000"),
                hex_to_color32("#808080"),
            ],
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}
