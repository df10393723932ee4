#![forbid(unsafe_code)]

//! Derived display state.

use crate::bits::{BitState, MAX_VALUE};
use crate::wordlist::WordlistIndex;

/// What the readout shows for the current pattern.
///
/// Never stored; always recomputed from [`BitState`] and [`WordlistIndex`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// No box is active.
    #[default]
    Empty,
    /// The value exceeds 2048. Only reachable through direct injection.
    OutOfRange {
        /// The raw value.
        value: u16,
    },
    /// A value in `1..=2048` and the word it selects.
    ///
    /// `word` is the `N/A` sentinel while the list is unloaded or shorter
    /// than `value`.
    Valid {
        /// Selected word.
        word: String,
        /// Bit value (1-based wordlist position).
        value: u16,
    },
}

impl DisplayState {
    /// Derive the display state.
    #[must_use]
    pub fn derive(bits: &BitState, wordlist: &WordlistIndex) -> Self {
        let value = bits.calculate_value();
        if value == 0 {
            Self::Empty
        } else if value > MAX_VALUE {
            Self::OutOfRange { value }
        } else {
            Self::Valid {
                word: wordlist.get_word(usize::from(value) - 1).to_string(),
                value,
            }
        }
    }

    /// Bit value (0 for `Empty`).
    #[must_use]
    pub fn value(&self) -> u16 {
        match self {
            Self::Empty => 0,
            Self::OutOfRange { value } | Self::Valid { value, .. } => *value,
        }
    }

    /// Text for the index readout: `-` when empty, otherwise the value.
    #[must_use]
    pub fn index_text(&self) -> String {
        match self {
            Self::Empty => "-".to_string(),
            other => other.value().to_string(),
        }
    }

    /// The selected word, if any.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::Valid { word, .. } => Some(word),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::BOX_COUNT;

    #[test]
    fn empty_when_nothing_selected() {
        let state = DisplayState::derive(&BitState::new(), &WordlistIndex::new());
        assert_eq!(state, DisplayState::Empty);
        assert_eq!(state.index_text(), "-");
        assert_eq!(state.value(), 0);
    }

    #[test]
    fn valid_selects_word() {
        let list = WordlistIndex::from_words(["abandon", "ability"]);
        let mut bits = BitState::new();
        bits.toggle_box(10);
        let state = DisplayState::derive(&bits, &list);
        assert_eq!(
            state,
            DisplayState::Valid {
                word: "ability".into(),
                value: 2
            }
        );
        assert_eq!(state.index_text(), "2");
    }

    #[test]
    fn valid_with_unloaded_list_uses_sentinel() {
        let mut bits = BitState::new();
        bits.toggle_box(11);
        let state = DisplayState::derive(&bits, &WordlistIndex::new());
        assert_eq!(state.word(), Some("N/A"));
    }

    #[test]
    fn out_of_range_for_injected_state() {
        let bits = BitState::from_boxes([true; BOX_COUNT]);
        let state = DisplayState::derive(&bits, &WordlistIndex::new());
        assert_eq!(state, DisplayState::OutOfRange { value: 4095 });
        assert_eq!(state.index_text(), "4095");
        assert_eq!(state.word(), None);
    }
}
