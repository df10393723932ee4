#![forbid(unsafe_code)]

//! Box disable rules.
//!
//! The 2048 box cannot be combined with any other box, so:
//!
//! - box 0 is disabled while any other box is active and box 0 is not;
//! - every other box is disabled while box 0 is active and that box is not.
//!
//! An active box is never disabled; the user can always undo what they did.
//! The rule never clamps or corrects a pattern, it only refuses input.

use crate::bits::BOX_COUNT;

/// Whether the box at `index` must reject interaction for `boxes`.
#[must_use]
pub fn should_be_disabled(index: usize, boxes: &[bool; BOX_COUNT]) -> bool {
    let msb_active = boxes[0];
    if index == 0 {
        let any_other = boxes[1..].iter().any(|&b| b);
        any_other && !msb_active
    } else {
        let current = boxes.get(index).copied().unwrap_or(false);
        msb_active && !current
    }
}

/// Disabled flags for all twelve boxes, computed in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisableMask {
    disabled: [bool; BOX_COUNT],
}

impl DisableMask {
    /// Evaluate the rule for every box.
    #[must_use]
    pub fn compute(boxes: &[bool; BOX_COUNT]) -> Self {
        let msb_active = boxes[0];
        let any_other = boxes[1..].iter().any(|&b| b);
        let mut disabled = [false; BOX_COUNT];
        disabled[0] = any_other && !msb_active;
        for (slot, &active) in disabled.iter_mut().zip(boxes).skip(1) {
            *slot = msb_active && !active;
        }
        Self { disabled }
    }

    /// Whether the box at `index` is disabled.
    #[inline]
    pub fn is_disabled(&self, index: usize) -> bool {
        self.disabled.get(index).copied().unwrap_or(false)
    }

    /// Indices of the disabled boxes in ascending order.
    pub fn disabled_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.disabled
            .iter()
            .enumerate()
            .filter(|(_, d)| **d)
            .map(|(i, _)| i)
    }

    /// Number of disabled boxes.
    pub fn count(&self) -> usize {
        self.disabled.iter().filter(|&&d| d).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(indices: &[usize]) -> [bool; BOX_COUNT] {
        let mut boxes = [false; BOX_COUNT];
        for &i in indices {
            boxes[i] = true;
        }
        boxes
    }

    #[test]
    fn nothing_disabled_when_empty() {
        let boxes = with(&[]);
        assert_eq!(DisableMask::compute(&boxes).count(), 0);
        for i in 0..BOX_COUNT {
            assert!(!should_be_disabled(i, &boxes));
        }
    }

    #[test]
    fn msb_disabled_when_lower_bit_active() {
        let boxes = with(&[5]);
        assert!(should_be_disabled(0, &boxes));
        let mask = DisableMask::compute(&boxes);
        assert_eq!(mask.disabled_indices().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn msb_active_disables_all_others() {
        let boxes = with(&[0]);
        assert!(!should_be_disabled(0, &boxes));
        for i in 1..BOX_COUNT {
            assert!(should_be_disabled(i, &boxes), "box {i} should be disabled");
        }
        assert_eq!(DisableMask::compute(&boxes).count(), BOX_COUNT - 1);
    }

    #[test]
    fn active_boxes_are_never_disabled_even_when_injected() {
        // 2048 plus a lower bit is only reachable by injection.
        let boxes = with(&[0, 3]);
        assert!(!should_be_disabled(0, &boxes));
        assert!(!should_be_disabled(3, &boxes));
        assert!(should_be_disabled(4, &boxes));
    }

    #[test]
    fn mask_matches_predicate() {
        for boxes in [with(&[2, 7, 11]), with(&[0]), with(&[0, 5]), with(&[])] {
            let mask = DisableMask::compute(&boxes);
            for i in 0..BOX_COUNT {
                assert_eq!(mask.is_disabled(i), should_be_disabled(i, &boxes), "box {i}");
            }
        }
    }
}
