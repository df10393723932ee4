use std::path::PathBuf;

use thiserror::Error;
use wordgrid_runtime::StorageError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Fatal setup errors. Nothing after the terminal is up produces one of
/// these except a broken terminal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("preferences error: {0}")]
    Storage(#[from] StorageError),

    #[error("terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl AppError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
