//! Error types for solver construction.

use micromouse_core::Point;
use thiserror::Error;

/// Reasons a [`MazeConfig`](crate::MazeConfig) is rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// A maze dimension is zero, negative, or above the supported maximum.
    #[error("maze size {width}x{height} is outside 1..={max} cells per side")]
    MazeSize { width: i32, height: i32, max: i32 },

    /// A physical length is negative, non-finite, or (for cells) zero.
    #[error("{name} of {value} cm is not a valid length")]
    InvalidLength { name: &'static str, value: f64 },

    /// The start or destination cell lies outside the maze.
    #[error("{name} cell {cell} is outside the maze")]
    CellOutOfBounds { name: &'static str, cell: Point },
}
