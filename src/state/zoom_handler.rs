//! Zoom keyboard action handler.

use crate::model::{Extent, KeyAction, ZoomPercent};
use crate::state::viewport::{clamp_offset, Offset};
use crate::transcode::reproject;

/// Zoom level after `action`, or `None` when nothing changes.
///
/// Zooming past either end of 1..=100 is a no-op, as is any non-zoom action.
pub fn next_zoom(zoom: ZoomPercent, action: KeyAction) -> Option<ZoomPercent> {
    match action {
        KeyAction::ZoomIn => zoom.increment(),
        KeyAction::ZoomOut => zoom.decrement(),
        _ => None,
    }
}

/// Carry `offset` from a buffer of extent `old` into one of extent `new`.
///
/// Each axis is scaled by `new / old` (floored), then the result is clamped
/// so the viewport stays inside the new buffer.
pub fn reproject_offset(offset: Offset, old: Extent, new: Extent, viewport: Extent) -> Offset {
    let projected = Offset {
        col: reproject(offset.col, old.width, new.width),
        row: reproject(offset.row, old.height, new.height),
    };
    clamp_offset(projected, viewport, new)
}
