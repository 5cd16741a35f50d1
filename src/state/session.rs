//! Viewer session: the one context object the event loop drives.
//!
//! Owns the native glyph buffer, the single current scaled buffer and the
//! viewport state. A rescale builds the new buffer completely before it is
//! assigned into the slot, so a reader never observes a half-built buffer and
//! the previous buffer is dropped on assignment.

use crate::model::{Extent, GlyphBuffer, GlyphError, KeyAction, ZoomPercent};
use crate::state::pan_handler::{handle_pan, DEFAULT_PAN_STEP};
use crate::state::viewport::{clamp_offset, TerminalSize, ViewportState};
use crate::state::zoom_handler::{next_zoom, reproject_offset};
use crate::transcode::rescale;
use std::time::Instant;
use tracing::debug;

/// What the event loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep looping
    Continue,
    /// Restore the terminal and exit
    Quit,
}

/// Startup settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Zoom the scaled buffer starts at
    pub zoom: ZoomPercent,
    /// Whether glyphs start out colored
    pub color_mode: bool,
    /// Cells moved per pan action (0 is treated as 1)
    pub pan_step: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            zoom: ZoomPercent::MAX,
            color_mode: false,
            pan_step: DEFAULT_PAN_STEP,
        }
    }
}

/// Descriptive facts about the displayed image, for the header overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// File name shown in the header.
    pub name: String,
    /// Native resolution in pixels (equal to the native buffer extent).
    pub extent: Extent,
}

/// One open image: the native glyph buffer, the buffer at the current zoom,
/// and where the viewport sits in it.
///
/// There is exactly one scaled buffer at any time. A zoom change replaces it
/// before the offset is re-projected.
#[derive(Debug)]
pub struct Session {
    info: ImageInfo,
    native: GlyphBuffer,
    scaled: GlyphBuffer,
    viewport: ViewportState,
    pan_step: usize,
}

impl Session {
    /// Start a session over `native`, building the scaled buffer for the
    /// initial zoom.
    ///
    /// # Errors
    ///
    /// Returns `GlyphError::Allocation` if the initial scaled buffer cannot be built.
    pub fn new(
        name: impl Into<String>,
        native: GlyphBuffer,
        settings: SessionSettings,
    ) -> Result<Self, GlyphError> {
        let scaled = rescale(&native, settings.zoom)?;
        Ok(Self {
            info: ImageInfo {
                name: name.into(),
                extent: native.extent(),
            },
            native,
            scaled,
            viewport: ViewportState::new(settings.zoom, settings.color_mode),
            pan_step: settings.pan_step.max(1),
        })
    }

    /// Name and native size of the image.
    pub fn info(&self) -> &ImageInfo {
        &self.info
    }

    /// The 100% buffer every zoom level is derived from.
    pub fn native(&self) -> &GlyphBuffer {
        &self.native
    }

    /// The buffer the renderer reads.
    pub fn scaled(&self) -> &GlyphBuffer {
        &self.scaled
    }

    /// Offset, zoom, color mode and terminal size.
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Record the terminal size read this frame.
    ///
    /// The offset is pulled back if the larger viewport would now reach past
    /// the scaled buffer.
    pub fn set_terminal_size(&mut self, size: TerminalSize) {
        self.viewport.terminal = size;
        self.viewport.offset = clamp_offset(
            self.viewport.offset,
            self.viewport.viewport(),
            self.scaled.extent(),
        );
    }

    /// Apply one action to the viewport.
    ///
    /// Pans and zooms that would leave their bounds are silent no-ops.
    ///
    /// # Errors
    ///
    /// Returns `GlyphError::Allocation` if a zoom change cannot allocate the new
    /// scaled buffer. The session must not be used further in that case.
    pub fn apply(&mut self, action: KeyAction) -> Result<Flow, GlyphError> {
        match action {
            KeyAction::Quit => return Ok(Flow::Quit),
            KeyAction::ToggleColor => {
                self.viewport.color_mode = !self.viewport.color_mode;
                debug!(color_mode = self.viewport.color_mode, "Toggled color mode");
            }
            KeyAction::ZoomIn | KeyAction::ZoomOut => {
                if let Some(zoom) = next_zoom(self.viewport.zoom, action) {
                    self.set_zoom(zoom)?;
                }
            }
            KeyAction::PanUp | KeyAction::PanDown | KeyAction::PanLeft | KeyAction::PanRight => {
                self.viewport.offset = handle_pan(
                    self.viewport.offset,
                    action,
                    self.pan_step,
                    self.viewport.viewport(),
                    self.scaled.extent(),
                );
            }
        }
        Ok(Flow::Continue)
    }

    /// Rebuild the scaled buffer at `zoom` and carry the offset over.
    fn set_zoom(&mut self, zoom: ZoomPercent) -> Result<(), GlyphError> {
        let started = Instant::now();
        let rescaled = rescale(&self.native, zoom)?;
        let old_extent = self.scaled.extent();
        let new_extent = rescaled.extent();

        self.viewport.offset = reproject_offset(
            self.viewport.offset,
            old_extent,
            new_extent,
            self.viewport.viewport(),
        );
        self.viewport.zoom = zoom;
        self.scaled = rescaled;

        debug!(
            zoom = zoom.get(),
            width = new_extent.width,
            height = new_extent.height,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Rescaled glyph buffer"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
