//! Viewport controller (pure core).
//!
//! Navigation state and the handlers that transform it. Nothing in here reads
//! the terminal; the event loop feeds in the terminal size and the actions.

pub mod pan_handler;
pub mod session;
pub mod viewport;
pub mod zoom_handler;

pub use pan_handler::{handle_pan, DEFAULT_PAN_STEP};
pub use session::{Flow, ImageInfo, Session, SessionSettings};
pub use viewport::{
    clamp_offset, Offset, TerminalSize, ViewportState, FOOTER_ROWS, HEADER_ROWS, OVERLAY_ROWS,
};
pub use zoom_handler::{next_zoom, reproject_offset};
