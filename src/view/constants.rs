//! Layout dimension constants for TUI rendering.

use crate::state::{FOOTER_ROWS, HEADER_ROWS};

/// Height of the header row in lines. Shared with the viewport arithmetic.
pub const HEADER_HEIGHT: u16 = HEADER_ROWS;

/// Height of the footer row in lines.
pub const FOOTER_HEIGHT: u16 = FOOTER_ROWS;

/// Blank cells kept between adjacent footer segments.
pub const FOOTER_GAP: usize = 1;

/// Right-aligned footer hint.
pub const QUIT_HINT: &str = "PRESS q TO QUIT";
