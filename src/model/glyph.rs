//! Glyph cell types produced by the transcoder.

use super::grid::Grid;

/// Emphasis tier applied to a glyph, darkest to brightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// Faint, for the darkest bands
    Dim,
    /// No attribute
    Normal,
    /// Bold, for the brightest bands
    Bold,
}

/// One of the eight discrete hue classes.
///
/// Discriminants follow the natural RGB bit order (red = 4, green = 2, blue = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorBucket {
    /// No channel above the mean (or a dark gray)
    Black = 0,
    /// Blue only
    Blue = 1,
    /// Green only
    Green = 2,
    /// Green and blue
    Cyan = 3,
    /// Red only
    Red = 4,
    /// Red and blue
    Magenta = 5,
    /// Red and green
    Yellow = 6,
    /// All channels (or a light gray)
    White = 7,
}

impl ColorBucket {
    /// All buckets in bit order.
    pub const ALL: [ColorBucket; 8] = [
        ColorBucket::Black,
        ColorBucket::Blue,
        ColorBucket::Green,
        ColorBucket::Cyan,
        ColorBucket::Red,
        ColorBucket::Magenta,
        ColorBucket::Yellow,
        ColorBucket::White,
    ];

    /// Select a bucket from its 3-bit pattern. Bits above the low three are ignored.
    pub fn from_bits(bits: u8) -> Self {
        Self::ALL[usize::from(bits & 0b111)]
    }
}

/// A display character plus the attributes it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphCell {
    /// Character taken from the intensity band
    pub glyph: char,
    /// Attribute taken from the intensity band
    pub emphasis: Emphasis,
    /// Hue used when color mode is on
    pub color: ColorBucket,
}

impl GlyphCell {
    /// Cell drawn wherever the viewport extends past the image.
    pub const BLANK: GlyphCell = GlyphCell {
        glyph: ' ',
        emphasis: Emphasis::Normal,
        color: ColorBucket::Black,
    };

    /// Bundle a glyph with its attributes.
    pub const fn new(glyph: char, emphasis: Emphasis, color: ColorBucket) -> Self {
        Self {
            glyph,
            emphasis,
            color,
        }
    }
}

/// Grid of glyph cells: the native or scaled rendition of an image.
pub type GlyphBuffer = Grid<GlyphCell>;
