use std::path::PathBuf;

use thiserror::Error;

/// Rejected generation parameters. Interactive callers re-collect all input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("invalid password length: {0:?}")]
    InvalidLength(String),
    #[error("one or more class flags (y/n) received invalid input, or all classes were disabled")]
    InvalidClassSelection,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Spec(#[from] SpecError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not read config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not serialize output: {0}")]
    Output(#[from] serde_json::Error),
    #[error("clipboard error: {0}")]
    Clipboard(String),
}
