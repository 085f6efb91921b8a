//! Errors from the ambient layers. The simulation itself cannot fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("tick rate must be at least 1 step per second, got {0}")]
    InvalidTickRate(u32),
}

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("cannot open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a logger is already installed")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}
