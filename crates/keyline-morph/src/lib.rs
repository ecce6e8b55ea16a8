//! keyline-morph - Border growth for RGBA pixmaps
//!
//! Grows a solid-colored outline around every visible region of a
//! pixmap, one pixel ring per pass, using four directional raster scans
//! instead of a queue-based flood fill. Visibility is alpha-based: a
//! pixel seeds growth when its alpha exceeds a caller-chosen threshold.

mod border;

pub use border::add_borders;
