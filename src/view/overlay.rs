//! Header and footer overlays.
//!
//! Both rows are reverse video. The footer carries three segments (terminal
//! resolution on the left, position readout in the center, quit hint on the
//! right) and resolves collisions on narrow terminals by truncating the left
//! segment and dropping whichever of the other two no longer fits.

use crate::state::Session;
use crate::view::constants::{FOOTER_GAP, QUIT_HINT};
use crate::view::styles::overlay_style;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use unicode_width::UnicodeWidthChar;

/// Header line: file name and native resolution.
pub fn header_text(session: &Session) -> String {
    let info = session.info();
    format!(
        "Displaying: {} size: {}x{}",
        info.name, info.extent.width, info.extent.height
    )
}

/// The three footer segments before placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterText {
    /// Terminal resolution, left-aligned
    pub left: String,
    /// Position, zoom and color readout
    pub center: String,
    /// Quit hint, right-aligned
    pub right: String,
}

impl FooterText {
    /// Build the footer for the session's current frame.
    ///
    /// The position readout shows the last visible scaled column and row
    /// (1-based, capped at the buffer edge) against the scaled extent.
    pub fn for_session(session: &Session) -> Self {
        let state = session.viewport();
        let viewport = state.viewport();
        let scaled = session.scaled().extent();
        let last_col = (state.offset.col + viewport.width).min(scaled.width);
        let last_row = (state.offset.row + viewport.height).min(scaled.height);

        Self {
            left: format!(
                "Terminal resolution: {}x{}",
                state.terminal.cols, state.terminal.rows
            ),
            center: format!(
                "x: {}/{} | y: {}/{} | zoom: {} | color: {}",
                last_col,
                scaled.width,
                last_row,
                scaled.height,
                state.zoom,
                if state.color_mode { "on" } else { "off" }
            ),
            right: QUIT_HINT.to_string(),
        }
    }
}

/// A segment positioned on the footer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement<'a> {
    /// Starting column on the row
    pub col: usize,
    /// Text to draw, already truncated to fit
    pub text: &'a str,
}

/// Display width of `text` in terminal columns.
pub fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Longest prefix of `text` that fits in `width` columns.
///
/// A wide character that would straddle the limit is left out entirely.
pub fn truncate_to_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// Position the footer segments on a row `width` columns wide.
///
/// The left segment is truncated to the row. The right segment is kept only
/// if it fits after the left one plus a gap. The center segment is kept only
/// if it fits between its neighbours with a gap on each side; it is centered
/// on the row when possible and otherwise shifted into the free span.
pub fn place_footer<'a>(text: &'a FooterText, width: usize) -> Vec<Placement<'a>> {
    let mut placements = Vec::with_capacity(3);

    let left = truncate_to_width(&text.left, width);
    let left_end = display_width(left);
    if !left.is_empty() {
        placements.push(Placement { col: 0, text: left });
    }

    let right_width = display_width(&text.right);
    let right_start = if left_end + FOOTER_GAP + right_width <= width {
        Some(width - right_width)
    } else {
        None
    };

    let lower = if left_end == 0 { 0 } else { left_end + FOOTER_GAP };
    let upper = match right_start {
        Some(start) => start - FOOTER_GAP,
        None => width,
    };
    let center_width = display_width(&text.center);
    if lower + center_width <= upper {
        let preferred = (width / 2).saturating_sub(center_width / 2);
        placements.push(Placement {
            col: preferred.clamp(lower, upper - center_width),
            text: &text.center,
        });
    }

    if let Some(col) = right_start {
        placements.push(Placement {
            col,
            text: &text.right,
        });
    }

    placements
}

/// Reverse-video header row.
#[derive(Debug, Clone)]
pub struct Header {
    text: String,
}

impl Header {
    /// Header describing `session`'s image.
    pub fn new(session: &Session) -> Self {
        Self {
            text: header_text(session),
        }
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_stringn(
            area.x,
            area.y,
            &self.text,
            usize::from(area.width),
            overlay_style(),
        );
    }
}

/// Reverse-video footer row.
///
/// The whole row is painted with reverse-video blanks first, so nothing from a
/// previous frame survives between the segments.
#[derive(Debug, Clone)]
pub struct Footer {
    text: FooterText,
}

impl Footer {
    /// Footer for `session`'s current frame.
    pub fn new(session: &Session) -> Self {
        Self {
            text: FooterText::for_session(session),
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = overlay_style();
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_char(' ').set_style(style);
            }
        }

        let width = usize::from(area.width);
        for placement in place_footer(&self.text, width) {
            // Placements never start past the row, so the column fits in u16.
            let offset = u16::try_from(placement.col).unwrap_or(area.width);
            buf.set_stringn(
                area.x + offset,
                area.y,
                placement.text,
                width - placement.col,
                style,
            );
        }
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
