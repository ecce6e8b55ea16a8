//! RGBA color values
//!
//! [`Rgba`] is the color unit for every pixmap operation: pixel storage,
//! border fill colors, and the hex string parser used when a border
//! color arrives as `"rrggbb"` text.

use crate::error::{Error, Result};

/// An RGBA color
///
/// Alpha is opacity: 0 is fully transparent, 255 fully opaque.
/// Small and frequently copied, so it is a plain `Copy` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the initial value of every pixmap pixel
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a 6-character hex string such as `"1a2b3c"` into an opaque color.
    ///
    /// Digits are case-insensitive and map to the R, G, B byte pairs in
    /// order; alpha is always 255. The length check counts characters,
    /// not bytes, so a 6-character non-ASCII string fails on the digit
    /// check rather than the length check.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHexLength`] if the input is not exactly
    /// 6 characters, and [`Error::InvalidHexDigit`] if any character is
    /// not a hexadecimal digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyline_core::Rgba;
    ///
    /// let c = Rgba::from_hex("006464").unwrap();
    /// assert_eq!(c, Rgba::new(0, 100, 100, 255));
    /// assert!(Rgba::from_hex("123").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self> {
        let count = s.chars().count();
        if count != 6 {
            return Err(Error::InvalidHexLength(count));
        }

        let mut nibbles = [0u8; 6];
        for (i, c) in s.chars().enumerate() {
            let digit = c.to_digit(16).ok_or(Error::InvalidHexDigit(c))?;
            nibbles[i] = digit as u8;
        }

        Ok(Rgba::opaque(
            (nibbles[0] << 4) | nibbles[1],
            (nibbles[2] << 4) | nibbles[3],
            (nibbles[4] << 4) | nibbles[5],
        ))
    }
}
