//! Raster-scan border growth
//!
//! One growth pass dilates the filled region (alpha above the
//! threshold) by one pixel using four ordered full-buffer scans over
//! the same pixmap:
//!
//!   1. rows top-to-bottom, columns left-to-right: paint left neighbors
//!   2. same row, columns right-to-left: paint right neighbors
//!   3. columns left-to-right, rows top-to-bottom: paint upper neighbors
//!   4. same column, rows bottom-to-top: paint lower neighbors
//!
//! Each sub-scan paints behind its cursor, so no sub-scan ever grows
//! more than one pixel in its own direction. The vertical sub-scans do
//! observe pixels painted by the horizontal ones, which is what closes
//! the diagonal corners and makes a single pass add a full one-pixel
//! ring around every region. The amortized scans are cache-friendly and
//! need no auxiliary queue, unlike BFS dilation.

use keyline_core::{Pixmap, Rgba};

/// Grow a `color`-colored border `border_width` pixels thick around
/// every filled region of the pixmap, in place.
///
/// A pixel is filled when its alpha is strictly above `alpha_threshold`;
/// border pixels are only ever written into empty pixels (alpha at or
/// below the threshold), so existing content is never overwritten. The
/// border color replaces all four channels of painted pixels with no
/// blending. A zero or negative `border_width` is a no-op; the function
/// is total and cannot fail.
///
/// # Examples
///
/// ```
/// use keyline_core::{Pixmap, Rgba};
/// use keyline_morph::add_borders;
///
/// let mut pix = Pixmap::new(5, 5);
/// pix.set(2, 2, Rgba::opaque(255, 0, 0)).unwrap();
///
/// add_borders(&mut pix, Rgba::opaque(0, 0, 0), 1, 0);
/// assert!(!pix.is_empty(1, 2, 0));
/// assert!(!pix.is_empty(2, 1, 0));
/// assert!(pix.is_empty(0, 2, 0));
/// ```
pub fn add_borders(pix: &mut Pixmap, color: Rgba, border_width: i32, alpha_threshold: u8) {
    for _ in 0..border_width.max(0) {
        grow_one_ring(pix, color, alpha_threshold);
    }
}

/// Single growth pass: one ring of dilation via the four directional scans.
fn grow_one_ring(pix: &mut Pixmap, color: Rgba, threshold: u8) {
    let w = pix.width() as i64;
    let h = pix.height() as i64;

    for y in 0..h {
        for x in 0..w {
            if filled(pix, x, y, threshold) {
                paint_if_empty(pix, x - 1, y, color, threshold);
            }
        }
        for x in (0..w).rev() {
            if filled(pix, x, y, threshold) {
                paint_if_empty(pix, x + 1, y, color, threshold);
            }
        }
    }

    for x in 0..w {
        for y in 0..h {
            if filled(pix, x, y, threshold) {
                paint_if_empty(pix, x, y - 1, color, threshold);
            }
        }
        for y in (0..h).rev() {
            if filled(pix, x, y, threshold) {
                paint_if_empty(pix, x, y + 1, color, threshold);
            }
        }
    }
}

/// True when (x, y) is in bounds and its alpha exceeds the threshold.
#[inline]
fn filled(pix: &Pixmap, x: i64, y: i64, threshold: u8) -> bool {
    x >= 0 && y >= 0 && !pix.is_empty(x as u32, y as u32, threshold)
}

/// Paint (x, y) with the border color if it is an in-bounds empty pixel.
#[inline]
fn paint_if_empty(pix: &mut Pixmap, x: i64, y: i64, color: Rgba, threshold: u8) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < pix.width() && y < pix.height() && pix.is_empty(x, y, threshold) {
        // In bounds by the check above
        let _ = pix.set(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible(pix: &Pixmap, x: u32, y: u32) -> bool {
        !pix.is_empty(x, y, 0)
    }

    #[test]
    fn test_single_pass_fills_one_ring() {
        let mut pix = Pixmap::new(5, 5);
        pix.set(2, 2, Rgba::opaque(255, 0, 0)).unwrap();

        add_borders(&mut pix, Rgba::opaque(0, 255, 0), 1, 0);

        // The whole 3x3 block around the seed is filled, including the
        // corners closed by the vertical sub-scans
        for y in 1..=3 {
            for x in 1..=3 {
                assert!(visible(&pix, x, y), "({x}, {y}) should be filled");
            }
        }
        // Chebyshev distance 2 stays empty after one pass
        for i in 0..5 {
            assert!(!visible(&pix, i, 0), "({i}, 0) should stay empty");
            assert!(!visible(&pix, i, 4), "({i}, 4) should stay empty");
            assert!(!visible(&pix, 0, i), "(0, {i}) should stay empty");
            assert!(!visible(&pix, 4, i), "(4, {i}) should stay empty");
        }
    }

    #[test]
    fn test_zero_or_negative_width_is_noop() {
        let mut pix = Pixmap::new(3, 3);
        pix.set(1, 1, Rgba::opaque(1, 2, 3)).unwrap();
        let before = pix.clone();

        add_borders(&mut pix, Rgba::opaque(9, 9, 9), 0, 0);
        assert_eq!(pix, before);
        add_borders(&mut pix, Rgba::opaque(9, 9, 9), -4, 0);
        assert_eq!(pix, before);
    }

    #[test]
    fn test_filled_pixels_never_overwritten() {
        let mut pix = Pixmap::new(4, 1);
        let red = Rgba::opaque(200, 0, 0);
        let blue = Rgba::opaque(0, 0, 200);
        pix.set(1, 0, red).unwrap();
        pix.set(2, 0, blue).unwrap();

        add_borders(&mut pix, Rgba::opaque(255, 255, 255), 3, 0);

        assert_eq!(pix.get(1, 0), Some(red));
        assert_eq!(pix.get(2, 0), Some(blue));
    }

    #[test]
    fn test_passes_compose() {
        let mut once = Pixmap::new(9, 9);
        once.set(4, 4, Rgba::opaque(255, 255, 255)).unwrap();
        let mut twice = once.clone();

        let c = Rgba::opaque(10, 20, 30);
        add_borders(&mut once, c, 3, 0);
        add_borders(&mut twice, c, 1, 0);
        add_borders(&mut twice, c, 2, 0);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_seed_at_edge_is_clamped() {
        let mut pix = Pixmap::new(3, 3);
        pix.set(0, 0, Rgba::opaque(255, 0, 0)).unwrap();

        add_borders(&mut pix, Rgba::opaque(0, 0, 0), 2, 0);

        // Everything in range grows; probes past the edge never panic
        for y in 0..3 {
            for x in 0..3 {
                assert!(visible(&pix, x, y));
            }
        }
    }

    #[test]
    fn test_seed_below_threshold_grows_nothing() {
        let mut pix = Pixmap::new(5, 5);
        pix.set(2, 2, Rgba::new(128, 0, 128, 120)).unwrap();
        let before = pix.clone();

        // alpha 120 <= threshold 125: the seed itself is "empty"
        add_borders(&mut pix, Rgba::opaque(0, 0, 0), 1, 125);
        assert_eq!(pix, before);
    }

    #[test]
    fn test_border_color_alpha_is_kept() {
        let mut pix = Pixmap::new(3, 1);
        pix.set(1, 0, Rgba::opaque(255, 0, 0)).unwrap();

        let translucent = Rgba::new(0, 0, 0, 40);
        add_borders(&mut pix, translucent, 1, 0);

        // No blending: the painted pixel carries the border color verbatim
        assert_eq!(pix.get(0, 0), Some(translucent));
        assert_eq!(pix.get(2, 0), Some(translucent));
    }

    #[test]
    fn test_empty_pixmap() {
        let mut pix = Pixmap::new(0, 0);
        add_borders(&mut pix, Rgba::opaque(1, 1, 1), 5, 0);
        assert_eq!(pix.pixels().len(), 0);
    }
}
