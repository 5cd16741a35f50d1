//! Pixel classification: one RGB sample to one glyph cell.

use crate::model::{ColorBucket, Emphasis, GlyphCell, Rgb};

/// Largest possible channel sum (3 * 255).
pub const MAX_SUM: u16 = 765;

/// Number of intensity bands.
pub const INTENSITY_DEPTH: usize = 8;

/// Width of each intensity band: `ceil((MAX_SUM + 1) / INTENSITY_DEPTH)`.
///
/// Band `i` covers sums `[BAND_WIDTH * i, BAND_WIDTH * (i + 1))`; the last band
/// ends at 768, past `MAX_SUM`, so every sum lands in exactly one band.
pub const BAND_WIDTH: u16 = (MAX_SUM + 1).div_ceil(INTENSITY_DEPTH as u16);

/// Glyph and emphasis for each band, darkest first.
pub const INTENSITY_BANDS: [(char, Emphasis); INTENSITY_DEPTH] = [
    ('.', Emphasis::Dim),
    (':', Emphasis::Dim),
    ('-', Emphasis::Dim),
    ('=', Emphasis::Normal),
    ('/', Emphasis::Normal),
    ('*', Emphasis::Normal),
    ('#', Emphasis::Bold),
    ('g', Emphasis::Bold),
];

/// Gray pixels whose sum falls in the upper half of the bands count as white.
const ACHROMATIC_WHITE_FLOOR: u16 = BAND_WIDTH * (INTENSITY_DEPTH as u16 / 2);

const _: () = assert!(BAND_WIDTH as usize * INTENSITY_DEPTH > MAX_SUM as usize);
const _: () = assert!(BAND_WIDTH as usize * (INTENSITY_DEPTH - 1) <= MAX_SUM as usize);

/// Classify one pixel.
///
/// Total over every RGB value; the same input always yields the same cell.
pub fn classify(pixel: Rgb) -> GlyphCell {
    let (glyph, emphasis) = INTENSITY_BANDS[intensity_band(pixel.sum())];
    GlyphCell::new(glyph, emphasis, color_bucket(pixel))
}

/// Index into [`INTENSITY_BANDS`] for a channel sum.
pub fn intensity_band(sum: u16) -> usize {
    usize::from(sum / BAND_WIDTH).min(INTENSITY_DEPTH - 1)
}

/// Bits set for every channel strictly above the channel mean (red = 4,
/// green = 2, blue = 1).
///
/// `3 * c > r + g + b` is the same test as `c > floor(mean)` without the division.
pub fn channel_bits(pixel: Rgb) -> u8 {
    let sum = pixel.sum();
    let above = |c: u8| u8::from(u16::from(c) * 3 > sum);
    (above(pixel.red) << 2) | (above(pixel.green) << 1) | above(pixel.blue)
}

/// Hue class of a pixel.
///
/// The mean-threshold bits select the bucket directly. They are all clear only
/// for gray pixels (r = g = b), and can never all be set, so gray pixels take
/// black or white by brightness instead.
pub fn color_bucket(pixel: Rgb) -> ColorBucket {
    match channel_bits(pixel) {
        0 if pixel.sum() >= ACHROMATIC_WHITE_FLOOR => ColorBucket::White,
        bits => ColorBucket::from_bits(bits),
    }
}
