//! Application-level errors
//!
//! The calculator engine itself never fails; these cover the process around
//! it: logging setup and the terminal.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The log file could not be created
    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A global tracing subscriber was already installed
    #[error("cannot install logger: {0}")]
    Logger(String),

    /// Raw mode, alternate screen or drawing failed
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
