//! Config file discovery, parsing and layering.
//!
//! Layers apply lowest first: built-in defaults, the TOML file, environment
//! variables, then command-line flags.

use crate::model::ZoomPercent;
use crate::state::DEFAULT_PAN_STEP;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default redraw cadence in frames per second.
pub const DEFAULT_FRAME_RATE: u32 = 1000;

/// Environment variable naming an alternative config file.
const CONFIG_ENV: &str = "GLYPHVIEW_CONFIG";
/// Environment variable overriding the initial zoom.
const ZOOM_ENV: &str = "GLYPHVIEW_ZOOM";

/// A config file exists but is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("Cannot read config {path:?}: {source}")]
    Read {
        /// The chosen config path
        path: PathBuf,
        /// The I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Bad TOML syntax, a wrongly typed value, or an unknown key.
    #[error("Cannot parse config {path:?}: {source}")]
    Parse {
        /// The chosen config path
        path: PathBuf,
        /// Position and cause reported by the TOML parser
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk settings. Every key may be omitted.
///
/// ```toml
/// zoom = 50
/// color = true
/// pan_step = 4
/// frame_rate = 60
/// log_file_path = "/tmp/glyphview.log"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Out-of-range values are clamped into 1..=100 when resolving.
    pub zoom: Option<i64>,
    /// Start with colored glyphs
    pub color: Option<bool>,
    /// Cells per pan action
    pub pan_step: Option<usize>,
    /// Redraws per second
    pub frame_rate: Option<u32>,
    /// Where trace output is written
    pub log_file_path: Option<PathBuf>,
}

/// Final settings after every layer has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Initial zoom
    pub zoom: ZoomPercent,
    /// Initial color mode
    pub color: bool,
    /// Cells per pan action, at least 1.
    pub pan_step: usize,
    /// Frames per second, at least 1.
    pub frame_rate: u32,
    /// Log file, created on startup if missing
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomPercent::MAX,
            color: false,
            pan_step: DEFAULT_PAN_STEP,
            frame_rate: DEFAULT_FRAME_RATE,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Longest wait for input before the next redraw.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

/// `<state dir>/glyphview/glyphview.log`, or `glyphview.log` in the working
/// directory on platforms without a state directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(dir) => dir.join("glyphview").join("glyphview.log"),
        None => PathBuf::from("glyphview.log"),
    }
}

/// `<config dir>/glyphview/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("glyphview").join("config.toml"))
}

/// Read and parse one config file.
///
/// A file that does not exist yields `Ok(None)`.
///
/// # Errors
///
/// `ConfigError::Read` for any other I/O failure (including a directory at
/// `path`), `ConfigError::Parse` for invalid contents.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.as_ref();
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    toml::from_str(&text)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Pick the config file and load it.
///
/// The first of these that is set wins: `explicit` (the `--config` flag),
/// `GLYPHVIEW_CONFIG`, the platform default path. Only the chosen file is
/// read; if it is missing the defaults apply.
///
/// # Errors
///
/// Propagates [`load_config_file`] errors for the chosen file.
pub fn load_config_with_precedence(
    explicit: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    let chosen = explicit
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .or_else(default_config_path);

    match chosen {
        Some(path) => load_config_file(path),
        None => Ok(None),
    }
}

/// Layer a parsed file over the defaults, pulling numbers into range.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let base = ResolvedConfig::default();
    let file = config_file.unwrap_or_default();

    ResolvedConfig {
        zoom: file.zoom.map_or(base.zoom, ZoomPercent::clamped),
        color: file.color.unwrap_or(base.color),
        pan_step: file.pan_step.map_or(base.pan_step, |step| step.max(1)),
        frame_rate: file.frame_rate.map_or(base.frame_rate, |rate| rate.max(1)),
        log_file_path: file.log_file_path.unwrap_or(base.log_file_path),
    }
}

/// Layer environment variables.
///
/// `NO_COLOR` with any value turns color off. `GLYPHVIEW_ZOOM` sets the zoom
/// when it holds an integer in 1..=100 and is ignored otherwise.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    let env_zoom = std::env::var(ZOOM_ENV)
        .ok()
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .and_then(|percent| ZoomPercent::new(percent).ok());
    if let Some(zoom) = env_zoom {
        config.zoom = zoom;
    }

    if std::env::var_os("NO_COLOR").is_some() {
        config.color = false;
    }
    config
}

/// Layer command-line flags, the last and strongest layer.
///
/// `None` means the flag was not given and the lower layers stand.
/// `color_override` is `Some(true)` for `--color`, `Some(false)` for
/// `--no-color`.
pub fn apply_cli_overrides(
    config: ResolvedConfig,
    zoom_override: Option<ZoomPercent>,
    color_override: Option<bool>,
) -> ResolvedConfig {
    ResolvedConfig {
        zoom: zoom_override.unwrap_or(config.zoom),
        color: color_override.unwrap_or(config.color),
        ..config
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
