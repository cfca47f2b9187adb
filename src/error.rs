//! Error types for the grid viewport.

/// Errors reported by [`GridViewport`](crate::GridViewport).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewportError {
    /// The visible frame must have a positive, finite size on both axes.
    #[error("invalid viewport frame {width}x{height}")]
    InvalidFrame { width: f32, height: f32 },

    /// A cell coordinate lies outside the configured grid.
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    CellOutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ViewportError>;
