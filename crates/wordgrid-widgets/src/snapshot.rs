#![forbid(unsafe_code)]

//! The derived state pushed to views after every mutation.

use std::time::Duration;

use wordgrid_core::{BOX_COUNT, BitState, DisableMask, DisplayState, WordlistIndex};

/// Everything a view may read about the current pattern.
///
/// Built once per refresh. Views receive it by shared reference, so a view
/// reacting to a change can never write back into the [`BitState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Monotonic refresh counter.
    pub revision: u64,
    /// Box states.
    pub boxes: [bool; BOX_COUNT],
    /// Which boxes reject activation.
    pub disabled: DisableMask,
    /// Sum of active weights.
    pub value: u16,
    /// The 12-glyph pattern string.
    pub binary: String,
    /// What the readout shows.
    pub display: DisplayState,
    /// Text the word input should show, `None` to clear it.
    ///
    /// Present only for `0 < value <= wordlist length`.
    pub input_word: Option<String>,
    /// Clock time of the refresh.
    pub at: Duration,
}

impl StateSnapshot {
    /// Derive a snapshot from the owned state.
    pub fn derive(revision: u64, bits: &BitState, wordlist: &WordlistIndex, at: Duration) -> Self {
        let value = bits.calculate_value();
        let input_word = (value > 0)
            .then(|| wordlist.word(usize::from(value) - 1))
            .flatten()
            .map(str::to_string);
        Self {
            revision,
            boxes: *bits.boxes(),
            disabled: DisableMask::compute(bits.boxes()),
            value,
            binary: bits.binary_string(),
            display: DisplayState::derive(bits, wordlist),
            input_word,
            at,
        }
    }
}

/// A view that re-renders from derived state.
pub trait StateListener {
    /// Called once per refresh with the new snapshot.
    fn on_state_changed(&mut self, snapshot: &StateSnapshot);
}
