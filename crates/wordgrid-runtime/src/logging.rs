#![forbid(unsafe_code)]

//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal belongs to the UI, so logs only ever go to a file. Without a
//! log file no subscriber is installed and every `tracing` macro is a no-op.
//!
//! # Log Levels
//!
//! - `error`: wordlist load failures
//! - `warn`: rejected words, stale load results, storage failures
//! - `info`: language, theme, and load progress
//! - `debug`: every state mutation and refresh

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when neither the configuration nor `RUST_LOG` sets one.
pub const DEFAULT_FILTER: &str = "wordgrid=info";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One human-readable line per event.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Log file. `None` disables logging.
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive, e.g. `wordgrid=debug`.
    pub filter: Option<String>,
    pub format: LogFormat,
}

impl LogConfig {
    #[must_use]
    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        self.file = file;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Resolve the filter: explicit directive, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`].
pub fn build_env_filter(directive: Option<&str>) -> io::Result<EnvFilter> {
    match directive {
        Some(directive) => EnvFilter::try_new(directive).map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid log filter {directive:?}: {err}"),
            )
        }),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber described by `config`.
///
/// Returns `Ok(false)` without installing anything when no file is
/// configured.
///
/// # Errors
///
/// Fails if the filter is invalid, the file cannot be opened, or a global
/// subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };
    let filter = build_env_filter(config.filter.as_deref())?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let writer = Mutex::new(file);

    let installed = match config.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_span_events(FmtSpan::CLOSE);
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            tracing_subscriber::registry().with(filter).with(layer).try_init()
        }
    };
    installed.map_err(io::Error::other)?;
    tracing::info!(path = %path.display(), format = ?config.format, "logging started");
    Ok(true)
}
