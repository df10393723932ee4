#![forbid(unsafe_code)]

//! The 12-box bit pattern.
//!
//! `boxes[0]` is the most significant bit (weight 2048) and `boxes[11]` the
//! least significant (weight 1). The numeric value of a pattern is the sum
//! of the weights of its active boxes.
//!
//! Values above [`MAX_VALUE`] are representable (a pattern injected directly
//! through [`BitState::from_boxes`] can hold up to 4095) but are never
//! reachable through interaction that respects the
//! [`DisableMask`](crate::disable::DisableMask).

/// Number of boxes in the grid.
pub const BOX_COUNT: usize = 12;

/// Largest value that maps to a word (`wordlist[2047]`).
pub const MAX_VALUE: u16 = 2048;

/// Glyph for an active box in the binary readout.
pub const ACTIVE_GLYPH: char = '●';

/// Glyph for an inactive box in the binary readout.
pub const INACTIVE_GLYPH: char = '○';

/// Weight of the box at `index`: `2^(11 - index)`.
///
/// `index` must be below [`BOX_COUNT`].
#[inline]
#[must_use]
pub const fn bit_weight(index: usize) -> u16 {
    1 << (BOX_COUNT - 1 - index)
}

/// Owned bit-pattern state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitState {
    boxes: [bool; BOX_COUNT],
}

impl BitState {
    /// Create a pattern with every box inactive.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            boxes: [false; BOX_COUNT],
        }
    }

    /// Create a pattern from raw box values.
    ///
    /// No range check is applied; this is the programmatic injection path
    /// that can produce values above [`MAX_VALUE`].
    #[must_use]
    pub const fn from_boxes(boxes: [bool; BOX_COUNT]) -> Self {
        Self { boxes }
    }

    /// Raw box values, most significant first.
    #[inline]
    pub const fn boxes(&self) -> &[bool; BOX_COUNT] {
        &self.boxes
    }

    /// Whether the box at `index` is active. Out-of-range indices read as inactive.
    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        self.boxes.get(index).copied().unwrap_or(false)
    }

    /// Flip the box at `index`.
    ///
    /// Indices come from the fixed 12-box grid; anything else is ignored.
    pub fn toggle_box(&mut self, index: usize) {
        if let Some(slot) = self.boxes.get_mut(index) {
            *slot = !*slot;
        }
    }

    /// Set every box inactive.
    pub fn reset_boxes(&mut self) {
        self.boxes = [false; BOX_COUNT];
    }

    /// Sum of the weights of the active boxes (`0..=4095`).
    #[must_use]
    pub fn calculate_value(&self) -> u16 {
        self.boxes
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(i, _)| bit_weight(i))
            .sum()
    }

    /// 12-glyph readout, one glyph per box, most significant first.
    #[must_use]
    pub fn binary_string(&self) -> String {
        self.boxes
            .iter()
            .map(|&active| if active { ACTIVE_GLYPH } else { INACTIVE_GLYPH })
            .collect()
    }

    /// Load the pattern for the 0-based wordlist index `word_index`.
    ///
    /// The pattern encodes `word_index + 1`. The caller guarantees the index
    /// is valid for the current wordlist; no bounds check is made here.
    pub fn set_state_from_index(&mut self, word_index: usize) {
        let value = word_index.wrapping_add(1);
        self.reset_boxes();
        for (i, slot) in self.boxes.iter_mut().enumerate() {
            *slot = value & usize::from(bit_weight(i)) != 0;
        }
    }

    /// True when no box is active.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.boxes.iter().any(|&b| b)
    }

    /// Indices of the active boxes in ascending order.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.boxes
            .iter()
            .enumerate()
            .filter(|(_, active)| **active)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_msb_first() {
        assert_eq!(bit_weight(0), 2048);
        assert_eq!(bit_weight(1), 1024);
        assert_eq!(bit_weight(10), 2);
        assert_eq!(bit_weight(11), 1);
    }

    #[test]
    fn empty_state() {
        let bits = BitState::new();
        assert_eq!(bits.calculate_value(), 0);
        assert!(bits.is_empty());
        assert_eq!(bits.binary_string(), "○○○○○○○○○○○○");
    }

    #[test]
    fn toggle_lsb_gives_one() {
        let mut bits = BitState::new();
        bits.toggle_box(11);
        assert_eq!(bits.calculate_value(), 1);
        assert_eq!(bits.binary_string(), "○○○○○○○○○○○●");
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let mut bits = BitState::new();
        bits.toggle_box(12);
        bits.toggle_box(usize::MAX);
        assert!(bits.is_empty());
        assert!(!bits.is_active(40));
    }

    #[test]
    fn reset_clears_everything() {
        let mut bits = BitState::from_boxes([true; BOX_COUNT]);
        assert_eq!(bits.calculate_value(), 4095);
        bits.reset_boxes();
        assert!(bits.is_empty());
    }

    #[test]
    fn set_state_from_first_and_last_index() {
        let mut bits = BitState::new();
        bits.set_state_from_index(0);
        assert_eq!(bits.calculate_value(), 1);

        bits.set_state_from_index(2047);
        assert_eq!(bits.calculate_value(), 2048);
        assert_eq!(bits.active_indices().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn set_state_replaces_previous_pattern() {
        let mut bits = BitState::from_boxes([true; BOX_COUNT]);
        bits.set_state_from_index(4);
        assert_eq!(bits.calculate_value(), 5);
        assert_eq!(bits.active_indices().collect::<Vec<_>>(), vec![9, 11]);
    }

    #[test]
    fn injected_out_of_range_value_is_representable() {
        let mut boxes = [false; BOX_COUNT];
        boxes[0] = true;
        boxes[11] = true;
        let bits = BitState::from_boxes(boxes);
        assert_eq!(bits.calculate_value(), 2049);
    }
}
