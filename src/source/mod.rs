//! Image input sources.
//!
//! The decode boundary: a path goes in, a [`RawImage`] comes out. Decode
//! failures are only possible here, at startup, never mid-session.

use crate::model::{RawImage, SourceError};
use std::path::Path;
use tracing::info;

pub mod file;

pub use file::FileSource;

/// Decode the image at `path`.
///
/// # Errors
///
/// Returns `SourceError` if the file cannot be decoded.
pub fn load_image(path: impl AsRef<Path>) -> Result<RawImage, SourceError> {
    let source = FileSource::new(path.as_ref());
    let image = source.decode()?;
    info!(
        path = %source.path().display(),
        width = image.width(),
        height = image.height(),
        channels = image.channels(),
        "Decoded image"
    );
    Ok(image)
}
