//! Image-to-glyph pipeline (pure core).
//!
//! - [`classifier`] maps one pixel to one glyph cell
//! - [`transcode`] classifies a whole decoded image into the native buffer
//! - [`scaler`] derives the zoomed buffer from the native one

pub mod classifier;
pub mod scaler;

pub use classifier::classify;
pub use scaler::{reproject, rescale, scale_coord, scaled_extent};

use crate::model::{GlyphBuffer, GlyphError, Grid, RawImage};
use std::time::Instant;
use tracing::debug;

/// Classify every pixel of `image` into a glyph buffer of the same extent.
///
/// Consumes the image: the decoded pixels are released as soon as the native
/// buffer exists. Pixels are classified independently of one another.
///
/// # Errors
///
/// Returns `GlyphError::Allocation` if the output buffer cannot be reserved;
/// no partial buffer is returned.
pub fn transcode(image: RawImage) -> Result<GlyphBuffer, GlyphError> {
    let started = Instant::now();
    let extent = image.extent();
    let pixels = image.pixels();

    let buffer = Grid::try_from_fn(extent, |col, row| classify(pixels[(col, row)])).map_err(
        |source| GlyphError::Allocation {
            width: extent.width,
            height: extent.height,
            source,
        },
    )?;

    debug!(
        width = extent.width,
        height = extent.height,
        elapsed_us = started.elapsed().as_micros() as u64,
        "Transcoded image to glyph buffer"
    );

    Ok(buffer)
}
