//! Keyline Core - Basic data structures for image outlining
//!
//! This crate provides the fundamental data structures used throughout
//! the keyline library:
//!
//! - [`Pixmap`] - A mutable RGBA pixel buffer
//! - [`Rgba`] - A color value with an alpha channel
//! - [`Box`] - Rectangle regions
//!
//! Pixel classification is alpha-based: a pixel is "empty" when its
//! alpha channel is at or below a threshold (see [`Pixmap::is_empty`]).
//! Decoding and encoding image files is out of scope; callers fill a
//! [`Pixmap`] from whatever decoded image data they have.

pub mod box_;
pub mod color;
pub mod error;
pub mod pixmap;

pub use box_::Box;
pub use color::Rgba;
pub use error::{Error, Result};
pub use pixmap::Pixmap;
