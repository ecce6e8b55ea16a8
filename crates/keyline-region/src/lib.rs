//! keyline-region - Occupied-area scanning for RGBA pixmaps
//!
//! Finds the minimal axis-aligned rectangle enclosing all visible
//! (non-zero alpha) content of a pixmap, padded by one pixel on every
//! side. A pixmap with no visible content yields an explicit `None`
//! rather than a sentinel rectangle.

mod scan;

pub use scan::{ScanDirection, occupied_area, scan_for_content};
