#![forbid(unsafe_code)]

//! Runtime: the update/view loop and its surroundings.
//!
//! # Role in wordgrid
//! `wordgrid-runtime` drives a [`Model`] against either a real terminal
//! ([`Program`], crossterm) or the headless [`ProgramSimulator`]. Both
//! share one dispatcher, so a test that passes in the simulator exercises
//! the same command handling as the binary.
//!
//! # This crate provides
//! - [`Model`], [`Cmd`], and [`ProgramConfig`].
//! - Background tasks whose results come back as messages.
//! - Deadline-driven ticks computed from [`Model::next_deadline`].
//! - [`StorageBackend`] with memory and JSON file implementations.
//! - Log subscriber setup in [`logging`].

pub mod logging;
pub mod program;
pub mod simulator;
pub mod state_persistence;
#[cfg(feature = "crossterm")]
pub mod terminal;

pub use logging::{LogConfig, LogFormat, init_logging};
#[cfg(feature = "crossterm")]
pub use program::Program;
pub use program::{Cmd, Model, ProgramConfig, ScreenMode, TaskSpec};
pub use simulator::ProgramSimulator;
pub use state_persistence::{
    FileStorage, MemoryStorage, StorageBackend, StorageError, StorageResult,
};
