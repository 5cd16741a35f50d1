//! glyphview
//!
//! Terminal image viewer: decodes an image, transcodes every pixel into a
//! styled character cell, and lets the user pan and zoom the result.
//!
//! Follows a Pure Core / Impure Shell split: `model`, `transcode` and `state`
//! never touch the terminal; `source` and `view` are the I/O boundaries.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod transcode;
pub mod view;

// Startup pipeline used by the binary
pub mod integration;
