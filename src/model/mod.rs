//! Domain model types (pure).
//!
//! All types in this module are plain data; nothing here touches the terminal
//! or the filesystem.

pub mod error;
pub mod glyph;
pub mod grid;
pub mod key_action;
pub mod raw_image;
pub mod zoom;

// Re-export for convenience
pub use error::{AppError, GlyphError, SourceError};
pub use glyph::{ColorBucket, Emphasis, GlyphBuffer, GlyphCell};
pub use grid::{Extent, Grid};
pub use key_action::KeyAction;
pub use raw_image::{RawImage, Rgb};
pub use zoom::{InvalidZoom, ZoomPercent};
