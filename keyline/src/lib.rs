//! Keyline - Image outlining for Rust
//!
//! Keyline grows a solid-colored outline (a "keyline", in print terms)
//! around every visible region of an RGBA pixel buffer, and computes
//! the padded bounding box of all visible content. Visibility is
//! decided by the alpha channel against a threshold.
//!
//! File decoding and encoding are deliberately out of scope: callers
//! fill a [`Pixmap`] from whatever image data they have and read the
//! mutated pixels back out afterwards.
//!
//! # Example
//!
//! ```
//! use keyline::{Pixmap, Rgba};
//! use keyline::morph::add_borders;
//! use keyline::region::occupied_area;
//!
//! let mut pix = Pixmap::new(16, 16);
//! pix.set(8, 8, Rgba::from_hex("006464").unwrap()).unwrap();
//!
//! add_borders(&mut pix, Rgba::opaque(0, 0, 0), 2, 0);
//!
//! let area = occupied_area(&pix).unwrap();
//! assert_eq!((area.x, area.y, area.w, area.h), (5, 5, 7, 7));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use keyline_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use keyline_morph as morph;
pub use keyline_region as region;
