//! Error types for keyline-core
//!
//! The error taxonomy is deliberately narrow: only pixel access and hex
//! color parsing can fail. The border and occupied-area algorithms are
//! total over any well-formed pixmap and signal no errors.

use thiserror::Error;

/// Keyline error type
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Pixel coordinates outside the pixmap
    #[error("pixel coordinates out of bounds: ({x}, {y}) in {width}x{height} pixmap")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Negative box dimensions
    #[error("invalid box dimensions: {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    /// Hex color string is not exactly 6 characters
    #[error("invalid hex color: expected 6 characters, got {0}")]
    InvalidHexLength(usize),

    /// Hex color string contains a non-hex character
    #[error("invalid hex color: {0:?} is not a hex digit")]
    InvalidHexDigit(char),
}

/// Result type alias for keyline operations
pub type Result<T> = std::result::Result<T, Error>;
