//! Error types for monoraster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in monoraster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a bitmap.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Negative circle radius.
    #[error("Invalid radius: {radius}")]
    InvalidRadius {
        /// The rejected radius.
        radius: i32,
    },

    /// Negative ellipse semi-axis.
    #[error("Invalid semi-axes: {rx}x{ry}")]
    InvalidSemiAxes {
        /// Horizontal semi-axis.
        rx: i32,
        /// Vertical semi-axis.
        ry: i32,
    },
}
