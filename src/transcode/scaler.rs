//! Nearest-neighbor resampling of glyph buffers.
//!
//! Glyphs are discrete symbols, so only coordinates are scaled; a cell is
//! never blended with its neighbors. Output extent, sample coordinates and pan
//! offset re-projection all go through [`scale_coord`] so they truncate the
//! same way and cannot drift apart across zoom steps.

use crate::model::{Extent, GlyphBuffer, GlyphError, Grid, ZoomPercent};

/// Percentage that maps a buffer onto itself.
const FULL_SCALE: usize = 100;

/// `floor(value * numerator / denominator)`, computed without overflow.
///
/// A zero denominator yields 0.
pub fn scale_coord(value: usize, numerator: usize, denominator: usize) -> usize {
    if denominator == 0 {
        return 0;
    }
    let scaled = (value as u128 * numerator as u128) / denominator as u128;
    usize::try_from(scaled).unwrap_or(usize::MAX)
}

/// Extent of `native` resampled at `percent`, never smaller than 1x1.
pub fn scaled_extent(native: Extent, percent: ZoomPercent) -> Extent {
    let p = percent.get() as usize;
    Extent::new(
        scale_coord(native.width, p, FULL_SCALE).max(1),
        scale_coord(native.height, p, FULL_SCALE).max(1),
    )
}

/// Resample `native` at `percent` of its resolution.
///
/// Output cell `(x, y)` copies native cell `(x * 100 / p, y * 100 / p)`. At
/// 100% the result equals `native` cell for cell. An empty native buffer
/// yields an empty result, since there is nothing to sample.
///
/// # Errors
///
/// Returns `GlyphError::Allocation` if the output cannot be reserved.
pub fn rescale(native: &GlyphBuffer, percent: ZoomPercent) -> Result<GlyphBuffer, GlyphError> {
    if native.extent().area() == 0 {
        return Ok(native.clone());
    }

    let extent = scaled_extent(native.extent(), percent);
    let p = percent.get() as usize;
    // (x + 1) * 100 / p <= native width whenever x < floor(width * p / 100),
    // so every sample lands inside the native buffer
    let last_col = native.width() - 1;
    let last_row = native.height() - 1;

    Grid::try_from_fn(extent, |x, y| {
        let src_col = scale_coord(x, FULL_SCALE, p).min(last_col);
        let src_row = scale_coord(y, FULL_SCALE, p).min(last_row);
        native[(src_col, src_row)]
    })
    .map_err(|source| GlyphError::Allocation {
        width: extent.width,
        height: extent.height,
        source,
    })
}

/// Map an offset along one axis from a buffer of length `old_len` into one of
/// length `new_len`: `offset * new_len / old_len`.
pub fn reproject(offset: usize, old_len: usize, new_len: usize) -> usize {
    scale_coord(offset, new_len, old_len)
}
