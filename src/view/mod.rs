//! Screen rendering and the interactive event loop.
//!
//! Everything here touches the terminal; the viewing state it drives lives in
//! [`crate::state`].

pub mod constants;
pub mod image_pane;
pub mod layout;
pub mod overlay;
pub mod styles;

pub use image_pane::ImagePane;
pub use layout::{calculate_areas, render_layout, ScreenAreas};
pub use overlay::{Footer, FooterText, Header};

use crate::config::keybindings::KeyBindings;
use crate::model::GlyphError;
use crate::state::{Flow, Session, TerminalSize};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Failure inside the running viewer.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Drawing or reading input failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A zoom change could not build its scaled buffer
    #[error(transparent)]
    Glyph(#[from] GlyphError),
}

/// Source of terminal input events.
pub trait EventSource {
    /// Wait up to `timeout` for the next event.
    ///
    /// `Ok(None)` means the timeout elapsed with no input.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// Reads events from the real terminal through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// The viewer loop bound to a terminal backend and an input source.
///
/// Tests pair a `TestBackend` with scripted events.
pub struct TuiApp<B, E>
where
    B: Backend,
    E: EventSource,
{
    terminal: Terminal<B>,
    session: Session,
    events: E,
    key_bindings: KeyBindings,
    frame_interval: Duration,
}

impl<B, E> TuiApp<B, E>
where
    B: Backend,
    E: EventSource,
{
    /// Bundle the loop's collaborators. Nothing is drawn until [`Self::run`].
    pub fn new(
        terminal: Terminal<B>,
        session: Session,
        events: E,
        key_bindings: KeyBindings,
        frame_interval: Duration,
    ) -> Self {
        Self {
            terminal,
            session,
            events,
            key_bindings,
            frame_interval,
        }
    }

    /// The session being viewed.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The terminal, for inspecting a test backend after a run.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Every tick re-reads the terminal size, redraws, then waits at most one
    /// frame interval for input. Returns when the user quits (q or Ctrl+C).
    ///
    /// Closed input is an idle tick; only other read failures end the loop.
    pub fn run(&mut self) -> Result<(), TuiError> {
        loop {
            self.draw()?;

            let event = match self.events.next_event(self.frame_interval) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(err) if is_idle_input_error(&err) => {
                    trace!(error = %err, "No input this tick");
                    // Closed input returns at once; wait out the tick instead of spinning.
                    std::thread::sleep(self.frame_interval);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            if self.handle_event(event)? == Flow::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }
    }

    /// Map one event to an action and apply it.
    ///
    /// Anything that is not a bound key press leaves the session untouched.
    fn handle_event(&mut self, event: Event) -> Result<Flow, TuiError> {
        let Event::Key(key) = event else {
            return Ok(Flow::Continue);
        };
        match self.key_bindings.get(key) {
            Some(action) => Ok(self.session.apply(action)?),
            None => Ok(Flow::Continue),
        }
    }

    /// Sync the terminal size into the session and render the current frame.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.session
            .set_terminal_size(TerminalSize::new(size.width, size.height));

        let session = &self.session;
        self.terminal.draw(|frame| render_layout(frame, session))?;
        Ok(())
    }
}

/// End of input and interrupted reads count as an idle tick, not a failure.
fn is_idle_input_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
    )
}

/// Initialize the terminal, run the viewer over `session`, and restore the
/// terminal on every exit path.
///
/// Install logging first if trace output is wanted.
pub fn run_with_session(
    session: Session,
    key_bindings: KeyBindings,
    frame_interval: Duration,
) -> Result<(), TuiError> {
    let terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err);
        }
    };
    debug!(?frame_interval, "Terminal ready");

    let mut app = TuiApp::new(terminal, session, CrosstermEvents, key_bindings, frame_interval);
    let result = app.run();

    // Always restore terminal state; a loop error takes precedence
    let restored = restore_terminal();
    result.and(restored)
}

/// Enter raw mode and the alternate screen with the cursor hidden.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Undo [`setup_terminal`] in reverse order.
fn restore_terminal() -> Result<(), TuiError> {
    let mut stdout = io::stdout();
    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
