//! keyline-test - Shared test scaffolding
//!
//! Helpers for building pixmaps with known content and summarizing the
//! result of an operation, used by the regression tests of the domain
//! crates. Nothing here touches the filesystem; test images are
//! constructed in memory.

use keyline_core::{Box, Pixmap, Rgba};

/// Build a pixmap with the given rectangles filled, in order.
///
/// Each entry is `(x, y, w, h, color)`. Later rectangles overwrite
/// earlier ones where they overlap.
pub fn pixmap_with_rects(
    width: u32,
    height: u32,
    rects: &[(i32, i32, i32, i32, Rgba)],
) -> Pixmap {
    let mut pix = Pixmap::new(width, height);
    for &(x, y, w, h, color) in rects {
        pix.fill_rect(&Box { x, y, w, h }, color);
    }
    pix
}

/// Count the pixels with non-zero alpha.
pub fn count_visible(pix: &Pixmap) -> usize {
    pix.pixels().iter().filter(|p| p.a > 0).count()
}
