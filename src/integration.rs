//! Startup pipeline: decode, transcode, build the session.
//!
//! Everything here runs before the terminal is touched, so it is testable
//! without a TTY. `view::run_with_session` takes over once a session exists.

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::AppError;
use crate::source::FileSource;
use crate::state::{Session, SessionSettings};
use crate::transcode::transcode;
use crate::view;
use std::path::Path;
use tracing::info;

/// Decode `path` and build a session with the resolved startup settings.
///
/// # Errors
///
/// Returns `AppError::Source` if the image cannot be decoded, or
/// `AppError::Glyph` if a glyph buffer cannot be allocated.
pub fn open_session(path: &Path, config: &ResolvedConfig) -> Result<Session, AppError> {
    let source = FileSource::new(path);
    let raw = crate::source::load_image(source.path())?;
    let native = transcode(raw)?;
    let session = Session::new(source.display_name(), native, SessionSettings::from(config))?;

    info!(
        name = %session.info().name,
        zoom = config.zoom.get(),
        color = config.color,
        "Session ready"
    );
    Ok(session)
}

/// Open `path` and run the viewer until the user quits.
///
/// # Errors
///
/// Any startup failure, or a terminal or allocation failure during the session.
pub fn run(path: Option<&Path>, config: &ResolvedConfig) -> Result<(), AppError> {
    let path = path.ok_or(AppError::MissingArgument)?;
    let session = open_session(path, config)?;
    view::run_with_session(session, KeyBindings::default(), config.frame_interval())?;
    Ok(())
}
