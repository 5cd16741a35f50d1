//! File logging.
//!
//! The viewer owns the terminal, so trace output is appended to a file that
//! can be followed with `tail -f` from another shell. Filtering comes from
//! `RUST_LOG`, falling back to `info`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Logging could not be set up. The viewer runs without logs in that case.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file's directory is missing and could not be created
    #[error("Cannot create log directory {dir:?}: {source}")]
    CreateDir {
        /// Directory that was being created
        dir: PathBuf,
        /// The I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The path ends in `/`, `..` or is a bare root.
    #[error("Log path {0:?} does not name a file")]
    NotAFile(PathBuf),

    /// A global subscriber was installed earlier in this process.
    #[error("A tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Split a log path into the directory to create and the file name in it.
///
/// A bare file name logs into the working directory.
fn split_log_path(log_path: &Path) -> Result<(&Path, &OsStr), LoggingError> {
    let name = log_path
        .file_name()
        .ok_or_else(|| LoggingError::NotAFile(log_path.to_path_buf()))?;
    let dir = log_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    Ok((dir, name))
}

/// Install the global subscriber writing to `log_path`.
///
/// # Errors
///
/// Fails when `log_path` has no file name, its directory cannot be created,
/// or logging was already initialized.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let (dir, name) = split_log_path(log_path)?;
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let writer = tracing_appender::rolling::never(dir, name);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn bare_file_name_logs_into_working_directory() {
        let (dir, name) = split_log_path(Path::new("viewer.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "viewer.log");
    }

    #[test]
    fn nested_path_splits_at_last_component() {
        let (dir, name) = split_log_path(Path::new("/var/log/gv/viewer.log")).unwrap();
        assert_eq!(dir, Path::new("/var/log/gv"));
        assert_eq!(name, "viewer.log");
    }

    #[test]
    fn root_is_not_a_file() {
        assert!(matches!(
            split_log_path(Path::new("/")),
            Err(LoggingError::NotAFile(_))
        ));
        assert!(matches!(init(Path::new("/")), Err(LoggingError::NotAFile(_))));
    }

    #[test]
    #[serial(tracing_init)]
    fn init_creates_directory_and_refuses_a_second_subscriber() {
        let dir = std::env::temp_dir().join("glyphview_logging_init");
        std::fs::remove_dir_all(&dir).ok();
        let log_file = dir.join("nested").join("viewer.log");

        // Another test binary may already own the global subscriber.
        let _ = init(&log_file);
        assert!(log_file.parent().is_some_and(Path::exists));

        let again = init(&log_file);
        assert!(matches!(again, Err(LoggingError::AlreadyInstalled)));

        std::fs::remove_dir_all(&dir).ok();
    }
}
