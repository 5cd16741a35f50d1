//! Panning keyboard action handler.
//!
//! Pure function that moves the pan offset in response to pan actions. A move
//! is committed only when the whole viewport still fits inside the scaled
//! buffer afterwards and the offset stays non-negative; otherwise the offset
//! is returned unchanged.

use crate::model::{Extent, KeyAction};
use crate::state::viewport::Offset;

/// Default distance, in cells, of one pan step.
pub const DEFAULT_PAN_STEP: usize = 4;

/// Apply a pan action to `offset`.
///
/// # Arguments
/// * `offset` - Current top-left corner of the viewport
/// * `action` - The action to handle; non-pan actions leave the offset alone
/// * `step` - Cells moved per action
/// * `viewport` - Visible extent of the image pane
/// * `scaled` - Extent of the scaled buffer currently displayed
pub fn handle_pan(
    offset: Offset,
    action: KeyAction,
    step: usize,
    viewport: Extent,
    scaled: Extent,
) -> Offset {
    match action {
        KeyAction::PanRight => Offset {
            col: step_forward(offset.col, step, viewport.width, scaled.width),
            ..offset
        },
        KeyAction::PanDown => Offset {
            row: step_forward(offset.row, step, viewport.height, scaled.height),
            ..offset
        },
        KeyAction::PanLeft => Offset {
            col: step_back(offset.col, step),
            ..offset
        },
        KeyAction::PanUp => Offset {
            row: step_back(offset.row, step),
            ..offset
        },
        _ => offset,
    }
}

/// Advance along one axis if the viewport still fits afterwards.
fn step_forward(position: usize, step: usize, visible: usize, total: usize) -> usize {
    match position.checked_add(step) {
        Some(next) if next.saturating_add(visible) <= total => next,
        _ => position,
    }
}

/// Retreat along one axis if the result stays non-negative.
fn step_back(position: usize, step: usize) -> usize {
    position.checked_sub(step).unwrap_or(position)
}

#[cfg(test)]
#[path = "pan_handler_tests.rs"]
mod tests;
