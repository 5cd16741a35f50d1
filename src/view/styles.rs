//! Terminal styling for glyph cells and overlays.

use crate::model::{ColorBucket, Emphasis, GlyphCell};
use ratatui::style::{Color, Modifier, Style};

/// Foreground color for a color bucket.
pub fn bucket_color(bucket: ColorBucket) -> Color {
    match bucket {
        ColorBucket::Black => Color::Black,
        ColorBucket::Blue => Color::Blue,
        ColorBucket::Green => Color::Green,
        ColorBucket::Cyan => Color::Cyan,
        ColorBucket::Red => Color::Red,
        ColorBucket::Magenta => Color::Magenta,
        ColorBucket::Yellow => Color::Yellow,
        ColorBucket::White => Color::White,
    }
}

/// Text attribute for an emphasis tier. `Normal` adds nothing.
pub fn emphasis_modifier(emphasis: Emphasis) -> Modifier {
    match emphasis {
        Emphasis::Dim => Modifier::DIM,
        Emphasis::Normal => Modifier::empty(),
        Emphasis::Bold => Modifier::BOLD,
    }
}

/// Style a glyph cell is drawn with.
///
/// Monochrome mode keeps the terminal's default foreground; emphasis applies
/// in both modes.
pub fn cell_style(cell: GlyphCell, color_mode: bool) -> Style {
    let style = Style::default().add_modifier(emphasis_modifier(cell.emphasis));
    if color_mode {
        style.fg(bucket_color(cell.color))
    } else {
        style
    }
}

/// Reverse video, used by both overlay rows.
pub fn overlay_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}
