//! Acceptance test harness.
//!
//! Drives a [`Session`] the way the event loop does (key event, binding
//! lookup, `apply`, redraw) against a `TestBackend`, one step at a time.

#![allow(dead_code)] // Not every test binary uses every helper

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use glyphview::config::{KeyBindings, ResolvedConfig};
use glyphview::integration::open_session;
use glyphview::model::{AppError, GlyphBuffer, GlyphError};
use glyphview::state::{Flow, Session, SessionSettings, TerminalSize};
use glyphview::view::render_layout;
use image::{Rgb, RgbImage};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use std::path::{Path, PathBuf};

pub const DEFAULT_COLS: u16 = 80;
pub const DEFAULT_ROWS: u16 = 24;

pub struct AcceptanceTestHarness {
    terminal: Terminal<TestBackend>,
    session: Session,
    key_bindings: KeyBindings,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Open an image file with default settings.
    pub fn from_image(path: impl AsRef<Path>) -> Result<Self, AppError> {
        Self::from_image_with_size(path, DEFAULT_COLS, DEFAULT_ROWS)
    }

    pub fn from_image_with_size(
        path: impl AsRef<Path>,
        cols: u16,
        rows: u16,
    ) -> Result<Self, AppError> {
        let session = open_session(path.as_ref(), &ResolvedConfig::default())?;
        Ok(Self::from_session(session, cols, rows))
    }

    /// Start from an already transcoded buffer.
    pub fn from_buffer(
        native: GlyphBuffer,
        settings: SessionSettings,
        cols: u16,
        rows: u16,
    ) -> Result<Self, GlyphError> {
        let session = Session::new("buffer", native, settings)?;
        Ok(Self::from_session(session, cols, rows))
    }

    fn from_session(session: Session, cols: u16, rows: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(cols, rows)).expect("test terminal");
        let mut harness = Self {
            terminal,
            session,
            key_bindings: KeyBindings::default(),
            running: true,
        };
        harness.render();
        harness
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn send_key(&mut self, code: KeyCode) {
        self.send_key_with_mods(code, KeyModifiers::NONE);
    }

    /// Deliver one key press and redraw, like one tick of the event loop.
    pub fn send_key_with_mods(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        assert!(self.running, "key sent after quit");
        if let Some(action) = self.key_bindings.get(KeyEvent::new(code, modifiers)) {
            let flow = self.session.apply(action).expect("apply action");
            if flow == Flow::Quit {
                self.running = false;
                return;
            }
        }
        self.render();
    }

    pub fn send_keys(&mut self, codes: impl IntoIterator<Item = KeyCode>) {
        for code in codes {
            self.send_key(code);
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.terminal.backend_mut().resize(cols, rows);
        self.render();
    }

    /// Redraw and return the screen as text.
    pub fn render(&mut self) -> String {
        let size = self.terminal.size().expect("terminal size");
        self.session
            .set_terminal_size(TerminalSize::new(size.width, size.height));
        let session = &self.session;
        self.terminal
            .draw(|frame| render_layout(frame, session))
            .expect("draw");
        buffer_to_string(self.buffer())
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn row(&self, y: u16) -> String {
        let buffer = self.buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }
}

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Trailing spaces are trimmed from each row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Write a solid-color PNG into the temp directory.
pub fn solid_png(name: &str, width: u32, height: u32, pixel: [u8; 3]) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    RgbImage::from_pixel(width, height, Rgb(pixel))
        .save(&path)
        .expect("write test png");
    path
}
