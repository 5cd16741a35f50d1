//! Viewport state: where the terminal window sits inside the scaled buffer.

use crate::model::{Extent, ZoomPercent};

/// Terminal rows taken by the header overlay.
pub const HEADER_ROWS: u16 = 1;

/// Terminal rows taken by the footer overlay.
pub const FOOTER_ROWS: u16 = 1;

/// Terminal rows unavailable to the image.
pub const OVERLAY_ROWS: u16 = HEADER_ROWS + FOOTER_ROWS;

/// Top-left corner of the viewport inside the scaled buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    /// Leftmost visible column
    pub col: usize,
    /// Topmost visible row
    pub row: usize,
}

impl Offset {
    /// The top-left corner, where every session starts.
    pub const ORIGIN: Offset = Offset { col: 0, row: 0 };

    /// Offset at `col`, `row`.
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TerminalSize {
    /// Width in columns
    pub cols: u16,
    /// Height in rows, overlays included
    pub rows: u16,
}

impl TerminalSize {
    /// Size of `cols` by `rows` cells.
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Cells available for the image once the header and footer rows are taken.
    pub fn viewport(self) -> Extent {
        Extent::new(
            usize::from(self.cols),
            usize::from(self.rows.saturating_sub(OVERLAY_ROWS)),
        )
    }
}

/// Everything the renderer needs to know about navigation.
///
/// Only [`Session`](super::Session) mutates this; the renderer reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    /// Kept inside the scaled buffer whenever the viewport fits
    pub offset: Offset,
    /// Zoom of the current scaled buffer
    pub zoom: ZoomPercent,
    /// Colored glyphs when set, terminal default foreground otherwise
    pub color_mode: bool,
    /// Size read at the start of the latest frame
    pub terminal: TerminalSize,
}

impl ViewportState {
    /// State at the origin with no terminal size recorded yet.
    pub fn new(zoom: ZoomPercent, color_mode: bool) -> Self {
        Self {
            offset: Offset::ORIGIN,
            zoom,
            color_mode,
            terminal: TerminalSize::default(),
        }
    }

    /// Visible image extent for the current terminal size.
    pub fn viewport(&self) -> Extent {
        self.terminal.viewport()
    }
}

/// Pull `offset` back so the viewport stays inside `buffer` on each axis.
///
/// When the viewport is wider (or taller) than the buffer the offset on that
/// axis becomes 0 and the overflow renders as blank cells.
pub fn clamp_offset(offset: Offset, viewport: Extent, buffer: Extent) -> Offset {
    Offset {
        col: offset.col.min(buffer.width.saturating_sub(viewport.width)),
        row: offset.row.min(buffer.height.saturating_sub(viewport.height)),
    }
}
