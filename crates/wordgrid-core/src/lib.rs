#![forbid(unsafe_code)]

//! Core: bit-pattern state, disable rules, wordlist lookup, events, and timers.
//!
//! # Role in wordgrid
//! `wordgrid-core` is the pure layer. It owns the 12-box bit pattern, the
//! predicate that keeps the pattern inside the legal `0..=2048` range, the
//! wordlist index the pattern selects into, and the derived display state.
//! It also defines the canonical input events and the deadline timers that
//! the runtime and widgets build on.
//!
//! # Primary responsibilities
//! - **BitState**: the 12 boolean boxes and their numeric value.
//! - **DisableRule**: which boxes must reject interaction.
//! - **WordlistIndex**: normalized exact/prefix lookup over an ordered list.
//! - **DisplayState**: `Empty`, `OutOfRange`, or `Valid(word, value)`.
//! - **Clock / Timer**: injectable monotonic time and cancellable deadlines.
//!
//! # How it fits in the system
//! Widgets (`wordgrid-widgets`) render from these types and mutate `BitState`
//! through its methods; the application's sync controller re-derives the
//! display state after every mutation. Nothing here touches the terminal.

pub mod bits;
pub mod clock;
pub mod disable;
pub mod display;
pub mod event;
pub mod geometry;
pub mod timer;
pub mod wordlist;

pub use bits::{ACTIVE_GLYPH, BOX_COUNT, BitState, INACTIVE_GLYPH, MAX_VALUE, bit_weight};
pub use clock::{Clock, ManualClock, SystemClock};
pub use disable::{DisableMask, should_be_disabled};
pub use display::DisplayState;
pub use timer::Timer;
pub use wordlist::{
    DEFAULT_MAX_SUGGESTIONS, LoadError, MAX_WORDS, NOT_AVAILABLE, Suggestion, WordlistIndex,
    normalize,
};
