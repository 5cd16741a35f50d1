//! Image pane widget: the visible window of the scaled glyph buffer.

use crate::model::{GlyphBuffer, GlyphCell};
use crate::state::Offset;
use crate::view::styles::cell_style;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Draws the part of a glyph buffer that starts at `offset`.
///
/// Pane cells that fall outside the buffer are drawn as [`GlyphCell::BLANK`],
/// so a viewport larger than the image never shows stale content.
#[derive(Debug, Clone, Copy)]
pub struct ImagePane<'a> {
    buffer: &'a GlyphBuffer,
    offset: Offset,
    color_mode: bool,
}

impl<'a> ImagePane<'a> {
    /// Pane showing `buffer` from `offset`, colored when `color_mode` is set.
    pub fn new(buffer: &'a GlyphBuffer, offset: Offset, color_mode: bool) -> Self {
        Self {
            buffer,
            offset,
            color_mode,
        }
    }
}

impl Widget for ImagePane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in 0..area.height {
            let row = self.offset.row + usize::from(y);
            for x in 0..area.width {
                let col = self.offset.col + usize::from(x);
                let cell = self
                    .buffer
                    .get(col, row)
                    .copied()
                    .unwrap_or(GlyphCell::BLANK);

                if let Some(target) = buf.cell_mut((area.x + x, area.y + y)) {
                    target
                        .set_char(cell.glyph)
                        .set_style(cell_style(cell, self.color_mode));
                }
            }
        }
    }
}
