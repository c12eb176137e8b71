//! Command line configuration and logging setup

use crate::errors::AppError;
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `calctty=debug`)
pub const LOG_ENV: &str = "CALCTTY_LOG";

/// A four-function calculator for the terminal
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "calctty", version, about)]
pub struct Config {
    /// Type these keys without opening the UI and print the final display
    /// (e.g. "0.1+0.2=")
    #[arg(long, value_name = "KEYS")]
    pub keys: Option<String>,

    /// With --keys, print every value the display shows, one per line
    #[arg(long, requires = "keys")]
    pub trace: bool,

    /// Do not capture the mouse (keypad clicks are ignored)
    #[arg(long)]
    pub no_mouse: bool,

    /// Write logs to this file; filter with CALCTTY_LOG (default "info")
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Whether the terminal UI should run
    pub fn interactive(&self) -> bool {
        self.keys.is_none()
    }
}

/// Install a file logger when a path is given.
///
/// Without a path nothing is installed and `tracing` events are discarded,
/// which keeps the alternate screen clean.
pub fn init_logging(path: Option<&Path>) -> Result<(), AppError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logger(e.to_string()))
}
