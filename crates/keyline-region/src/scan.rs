//! Edge scans for visible content
//!
//! Four independent early-exit raster scans, one per edge, locate the
//! first row or column containing a visible pixel. Visibility here is
//! fixed at alpha > 0; the scans do not take a threshold.

use keyline_core::{Box, Pixmap};

/// Direction for scanning a pixmap to find the edge of visible content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Scan from the left edge toward the right
    FromLeft,
    /// Scan from the right edge toward the left
    FromRight,
    /// Scan from the top edge toward the bottom
    FromTop,
    /// Scan from the bottom edge toward the top
    FromBot,
}

/// Find the first row or column from the given edge containing a
/// visible pixel (alpha > 0).
///
/// Returns the row index for `FromTop`/`FromBot` and the column index
/// for `FromLeft`/`FromRight`, or `None` when the pixmap has no visible
/// content at all.
pub fn scan_for_content(pix: &Pixmap, direction: ScanDirection) -> Option<u32> {
    let w = pix.width();
    let h = pix.height();
    let visible = |x: u32, y: u32| !pix.is_empty(x, y, 0);

    match direction {
        ScanDirection::FromTop => (0..h).find(|&y| (0..w).any(|x| visible(x, y))),
        ScanDirection::FromBot => (0..h).rev().find(|&y| (0..w).any(|x| visible(x, y))),
        ScanDirection::FromLeft => (0..w).find(|&x| (0..h).any(|y| visible(x, y))),
        ScanDirection::FromRight => (0..w).rev().find(|&x| (0..h).any(|y| visible(x, y))),
    }
}

/// Compute the padded bounding box of all visible content.
///
/// The box is the tight bounding rectangle of every pixel with alpha
/// above zero, expanded by exactly one pixel on each side: it spans
/// `(min_x - 1, min_y - 1)` through `(max_x + 1, max_y + 1)` with both
/// corners inclusive. The padding may push the box origin negative or
/// its far edge past the pixmap; clip with [`Box::clip`] when a
/// strictly in-bounds region is needed.
///
/// Returns `None` when the pixmap contains no visible pixel.
///
/// # Examples
///
/// ```
/// use keyline_core::{Pixmap, Rgba};
/// use keyline_region::occupied_area;
///
/// let mut pix = Pixmap::new(5, 5);
/// pix.set(2, 2, Rgba::opaque(255, 0, 0)).unwrap();
///
/// let area = occupied_area(&pix).unwrap();
/// assert_eq!((area.x, area.y, area.w, area.h), (1, 1, 3, 3));
/// assert_eq!(occupied_area(&Pixmap::new(5, 5)), None);
/// ```
pub fn occupied_area(pix: &Pixmap) -> Option<Box> {
    let top = scan_for_content(pix, ScanDirection::FromTop)?;
    let bot = scan_for_content(pix, ScanDirection::FromBot)?;
    let left = scan_for_content(pix, ScanDirection::FromLeft)?;
    let right = scan_for_content(pix, ScanDirection::FromRight)?;

    Some(Box::from_corners(
        left as i32 - 1,
        top as i32 - 1,
        right as i32 + 1,
        bot as i32 + 1,
    ))
}
