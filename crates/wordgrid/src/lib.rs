#![forbid(unsafe_code)]

//! A terminal picker for BIP39 words.
//!
//! Twelve toggle boxes hold the bits of a word index. Toggling boxes, typing
//! a word, or choosing a suggestion all edit the same state, and every view
//! follows it.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod sync;

pub use app::{App, Focus, Msg};
pub use cli::run_from_env;
pub use config::{AppConfig, Timings};
pub use error::{AppError, Result};
pub use loader::{DirectorySource, StaticSource, WordlistSource};
