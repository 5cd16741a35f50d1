//! Decoded source image.

use super::grid::{Extent, Grid};

/// One RGB sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Rgb {
    /// Sample from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Sum of the three channels, 0..=765.
    pub fn sum(self) -> u16 {
        u16::from(self.red) + u16::from(self.green) + u16::from(self.blue)
    }
}

/// Decoded image: RGB pixels in row-major order.
///
/// Immutable once built. `channels` records the channel count of the source
/// file (e.g. 4 for RGBA); the pixels themselves are always normalized to RGB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pixels: Grid<Rgb>,
    channels: u8,
}

impl RawImage {
    /// Wrap decoded pixels. `channels` is the source file's channel count.
    pub fn new(pixels: Grid<Rgb>, channels: u8) -> Self {
        Self { pixels, channels }
    }

    /// Solid-color image, mostly useful in tests and benchmarks.
    pub fn filled(width: usize, height: usize, pixel: Rgb) -> Self {
        Self {
            pixels: Grid::filled(Extent::new(width, height), pixel),
            channels: 3,
        }
    }

    /// Size in pixels.
    pub fn extent(&self) -> Extent {
        self.pixels.extent()
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Channel count of the file before normalization.
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// The RGB samples.
    pub fn pixels(&self) -> &Grid<Rgb> {
        &self.pixels
    }
}
