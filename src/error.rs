//! Errors raised by the cell grid

use thiserror::Error;

/// Caller-input errors from the Game of Life core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A grid was requested with a zero dimension
    #[error("Grid dimensions must be positive, got {rows}x{columns}")]
    InvalidDimensions { rows: i64, columns: i64 },

    /// The requested grid holds more cells than can be allocated
    #[error("Grid of {rows}x{columns} cells is too large to allocate")]
    TooLarge { rows: usize, columns: usize },

    /// A coordinate outside the grid was used to place or clear a cell
    #[error("No such cell ({row}, {column}) in a {rows}x{columns} grid")]
    NoSuchCell {
        row: i64,
        column: i64,
        rows: usize,
        columns: usize,
    },
}
