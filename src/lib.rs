pub mod traits;
pub mod error;
pub mod animation;
pub mod post_layout;
pub mod field_grid;
pub mod viewport;
pub mod theme;

// Export surface and delegate traits
pub use traits::{
    CellCoord, CellContent, CellDataSource, SharedDataSource,
    TapHandler, ReadyHandler, GridSurface,
    ScrollDelegate, GestureDelegate, GestureKind
};

// Export the viewport
pub use viewport::{GridViewport, fit_scale, DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE};

// Export the concrete grid surface
pub use field_grid::{FieldGrid, CELL_SIZE, FIELD_BORDER_WIDTH};

// Export deferred work and animation helpers
pub use post_layout::{PostLayoutQueue, PostLayoutTask};
pub use animation::{Animated, Tween, ANIMATION_DURATION};

// Export errors
pub use error::ViewportError;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness};
