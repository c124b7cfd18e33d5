use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type.
///
/// Every variant is fatal for the run; `main` maps each one to a clean
/// message and exit status. Config problems never reach this type: the
/// config layer logs a warning and falls back to defaults instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing file: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Terminal I/O error: {0}")]
    Terminal(#[source] std::io::Error),

    /// Input stream closed while a prompt was waiting for an answer.
    #[error("Exited by user")]
    Interrupted,
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// Maps an I/O failure on `path` to `MissingFile` or `Read`.
    pub fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            AppError::MissingFile { path }
        } else {
            AppError::Read { path, source }
        }
    }
}
