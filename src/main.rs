//! glyphview - Entry Point

use clap::error::ErrorKind;
use clap::Parser;
use glyphview::config::{
    apply_cli_overrides, apply_env_overrides, default_log_path, load_config_with_precedence,
    merge_config, ConfigError, ResolvedConfig,
};
use glyphview::model::ZoomPercent;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Fixed diagnostic for every startup failure; the cause goes to the log file.
const FAILURE_MESSAGE: &str = "glyphview: unable to display image";
const USAGE: &str = "usage: glyphview <IMAGE>";

/// glyphview - view images as text in the terminal
#[derive(Parser, Debug)]
#[command(name = "glyphview")]
#[command(version)]
#[command(about = "View an image as styled text characters in the terminal")]
pub struct Args {
    /// Path to the image file
    #[arg(value_name = "IMAGE")]
    pub file: Option<PathBuf>,

    /// Initial zoom in percent
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub zoom: Option<u32>,

    /// Start in color mode
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Start in monochrome mode
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn zoom_override(&self) -> Option<ZoomPercent> {
        self.zoom.and_then(|p| ZoomPercent::new(p).ok())
    }

    /// `Some` only when one of the color flags was given explicitly.
    fn color_override(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Defaults → Config File → Env Vars → CLI Args
    fn resolve_config(&self) -> Result<ResolvedConfig, ConfigError> {
        let config_file = load_config_with_precedence(self.config.clone())?;
        let merged = merge_config(config_file);
        let with_env = apply_env_overrides(merged);
        Ok(apply_cli_overrides(
            with_env,
            self.zoom_override(),
            self.color_override(),
        ))
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => return report_failure(),
        },
    };

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            // Logging is best effort; the viewer never depends on it
            let _ = glyphview::logging::init(&default_log_path());
            error!(error = %err, "Failed to load configuration");
            return report_failure();
        }
    };

    let _ = glyphview::logging::init(&config.log_file_path);
    info!(config = ?config, "Configuration loaded and resolved");

    match glyphview::integration::run(args.file.as_deref(), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Unable to display image");
            report_failure()
        }
    }
}

fn report_failure() -> ExitCode {
    eprintln!("{FAILURE_MESSAGE}");
    eprintln!("{USAGE}");
    ExitCode::FAILURE
}
