//! Pixmap - The RGBA pixel buffer
//!
//! `Pixmap` is the image container every keyline algorithm operates on.
//! Pixels are stored row-major as [`Rgba`] values; creation and release
//! of the buffer belong to the caller, the algorithms only read and
//! write pixel values in place.
//!
//! # Ownership model
//!
//! There is exactly one mutating consumer at a time: the border pass
//! takes `&mut Pixmap`, the occupied-area scan takes `&Pixmap`. The
//! borrow checker enforces the serialization the design requires, so no
//! internal locking exists.

use crate::box_::Box;
use crate::color::Rgba;
use crate::error::{Error, Result};

/// A rectangular grid of RGBA pixels
///
/// Zero-sized pixmaps are valid; every access on them is out of bounds.
///
/// # Examples
///
/// ```
/// use keyline_core::{Pixmap, Rgba};
///
/// let mut pix = Pixmap::new(4, 3);
/// pix.set(1, 2, Rgba::opaque(255, 0, 0)).unwrap();
/// assert_eq!(pix.get(1, 2), Some(Rgba::opaque(255, 0, 0)));
/// assert_eq!(pix.get(4, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<Rgba>,
}

impl Pixmap {
    /// Create a new pixmap with every pixel fully transparent.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![Rgba::TRANSPARENT; len],
        }
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = color;
        Ok(())
    }

    /// Classify the pixel at (x, y) as empty.
    ///
    /// A pixel is empty when its alpha channel is at or below
    /// `threshold` (inclusive). Out-of-bounds coordinates are classified
    /// empty, so neighbor probes at the pixmap edge are well defined.
    #[inline]
    pub fn is_empty(&self, x: u32, y: u32, threshold: u8) -> bool {
        match self.get(x, y) {
            Some(pixel) => pixel.a <= threshold,
            None => true,
        }
    }

    /// Get raw access to the pixel data, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    /// Fill a rectangular region with a color.
    ///
    /// The rectangle is clipped to the pixmap; a rectangle entirely
    /// outside is a no-op.
    pub fn fill_rect(&mut self, rect: &Box, color: Rgba) {
        let Some(clipped) = rect.clip(self.width as i32, self.height as i32) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            let row = y as usize * self.width as usize;
            for x in clipped.x..clipped.right() {
                self.data[row + x as usize] = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let pix = Pixmap::new(100, 200);
        assert_eq!(pix.width(), 100);
        assert_eq!(pix.height(), 200);
        assert_eq!(pix.pixels().len(), 20_000);
        assert!(pix.pixels().iter().all(|&p| p == Rgba::TRANSPARENT));
    }

    #[test]
    fn test_zero_sized() {
        let pix = Pixmap::new(0, 10);
        assert_eq!(pix.get(0, 0), None);
        assert!(pix.is_empty(0, 0, 0));
    }

    #[test]
    fn test_get_set() {
        let mut pix = Pixmap::new(4, 4);
        let red = Rgba::opaque(255, 0, 0);
        pix.set(3, 3, red).unwrap();
        assert_eq!(pix.get(3, 3), Some(red));
        assert_eq!(pix.get(0, 0), Some(Rgba::TRANSPARENT));

        let err = pix.set(4, 0, red).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 4
            }
        );
    }

    #[test]
    fn test_is_empty_threshold() {
        let mut pix = Pixmap::new(2, 2);
        pix.set(0, 0, Rgba::new(10, 20, 30, 120)).unwrap();

        // Threshold is inclusive
        assert!(!pix.is_empty(0, 0, 0));
        assert!(!pix.is_empty(0, 0, 119));
        assert!(pix.is_empty(0, 0, 120));
        assert!(pix.is_empty(1, 1, 0));
        // Out of bounds counts as empty
        assert!(pix.is_empty(5, 5, 255));
    }

    #[test]
    fn test_fill_rect() {
        let mut pix = Pixmap::new(5, 5);
        let blue = Rgba::opaque(0, 0, 255);
        pix.fill_rect(&Box::new(1, 1, 2, 3).unwrap(), blue);

        assert_eq!(pix.get(1, 1), Some(blue));
        assert_eq!(pix.get(2, 3), Some(blue));
        assert_eq!(pix.get(3, 1), Some(Rgba::TRANSPARENT));
        assert_eq!(pix.get(1, 4), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut pix = Pixmap::new(3, 3);
        let c = Rgba::opaque(9, 9, 9);
        // Extends past every edge; only the overlap is painted
        pix.fill_rect(&Box::from_corners(-2, -2, 5, 0), c);
        assert_eq!(pix.get(0, 0), Some(c));
        assert_eq!(pix.get(2, 0), Some(c));
        assert_eq!(pix.get(0, 1), Some(Rgba::TRANSPARENT));

        // Entirely outside: no-op, no panic
        pix.fill_rect(&Box::new(10, 10, 2, 2).unwrap(), c);
    }
}
