//! Error types for glyphview.
//!
//! Errors are layered with `thiserror` and compose via `From`, so `?` carries
//! a failure from the pipeline up to the single exit point in `main`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - any startup failure; always reported with the same fixed
//!   diagnostic and exit status 1
//!   - [`SourceError`] - the image could not be decoded
//!   - [`GlyphError`] - a glyph buffer could not be allocated
//!   - [`ConfigError`](crate::config::ConfigError) - the config file is unreadable or invalid
//!   - [`TuiError`](crate::view::TuiError) - terminal I/O failed
//!
//! Navigation requests that would leave the buffer, and keys without a
//! binding, are not errors at all: they are silent no-ops.

use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure building a glyph buffer.
#[derive(Debug, Error)]
pub enum GlyphError {
    /// Storage for the buffer could not be reserved.
    ///
    /// Fatal both at startup and during a zoom change: keeping a stale scaled
    /// buffer would leave the viewport state pointing into the wrong geometry.
    #[error("Failed to allocate {width}x{height} glyph buffer: {source}")]
    Allocation {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
        /// The rejected reservation
        #[source]
        source: TryReserveError,
    },
}

/// Failure decoding the source image.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The decoder rejected the file (missing, unreadable, unsupported format).
    #[error("Failed to decode image {path:?}: {source}")]
    Decode {
        /// The image path as given on the command line
        path: PathBuf,
        /// The decoder's error
        #[source]
        source: image::ImageError,
    },

    /// The file decoded to an image without pixels.
    #[error("Image {0:?} has no pixels")]
    Empty(PathBuf),

    /// Pixel storage for the decoded image could not be reserved.
    #[error("Failed to allocate pixel storage for {0:?}")]
    Allocation(PathBuf),
}

/// Top-level startup error.
///
/// Every variant is reported identically at the CLI boundary; the variant only
/// matters for the log file.
#[derive(Debug, Error)]
pub enum AppError {
    /// No image path was given.
    #[error("No image path given")]
    MissingArgument,

    /// Decoding failed
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The native buffer could not be built
    #[error(transparent)]
    Glyph(#[from] GlyphError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The terminal session failed
    #[error(transparent)]
    Tui(#[from] crate::view::TuiError),
}
