#![forbid(unsafe_code)]

//! Selected word, index, and binary pattern readout.

use wordgrid_core::DisplayState;
use wordgrid_core::geometry::Rect;
use wordgrid_style::Theme;

use crate::Widget;
use crate::frame::{Frame, text_width};
use crate::snapshot::{StateListener, StateSnapshot};

/// Localized captions for the readout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadoutLabels {
    pub selected_word: String,
    pub index: String,
    pub binary: String,
    pub pick_pattern: String,
    pub out_of_range: String,
}

impl Default for ReadoutLabels {
    fn default() -> Self {
        Self {
            selected_word: "Selected Word:".to_string(),
            index: "Index:".to_string(),
            binary: "Binary:".to_string(),
            pick_pattern: "Pick a pattern".to_string(),
            out_of_range: "Out of range (max 2048)".to_string(),
        }
    }
}

/// Three-line readout of the derived display state.
#[derive(Debug, Clone, Default)]
pub struct Readout {
    display: DisplayState,
    binary: String,
    labels: ReadoutLabels,
    theme: Theme,
}

impl Readout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_labels(&mut self, labels: ReadoutLabels) {
        self.labels = labels;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Text of the word line.
    pub fn word_text(&self) -> &str {
        match &self.display {
            DisplayState::Empty => &self.labels.pick_pattern,
            DisplayState::OutOfRange { .. } => &self.labels.out_of_range,
            DisplayState::Valid { word, .. } => word,
        }
    }

    /// Text of the index line.
    pub fn index_text(&self) -> String {
        self.display.index_text()
    }

    /// The binary pattern.
    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl StateListener for Readout {
    fn on_state_changed(&mut self, snapshot: &StateSnapshot) {
        self.display = snapshot.display.clone();
        self.binary = snapshot.binary.clone();
    }
}

impl Widget for Readout {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let caption = self.theme.muted_text();
        let word_style = match self.display {
            DisplayState::Valid { .. } => self.theme.emphasis(),
            DisplayState::OutOfRange { .. } => self.theme.base().fg(self.theme.error),
            DisplayState::Empty => self.theme.muted_text(),
        };
        let rows = [
            (&self.labels.selected_word, self.word_text().to_string(), word_style),
            (&self.labels.index, self.index_text(), self.theme.base()),
            (&self.labels.binary, self.binary.clone(), self.theme.base()),
        ];
        let gutter = rows
            .iter()
            .map(|(label, _, _)| text_width(label))
            .max()
            .unwrap_or(0) as u16
            + 1;
        for (dy, (label, value, style)) in rows.into_iter().enumerate() {
            let line = area.row(dy as u16);
            if line.is_empty() {
                break;
            }
            frame.put_line(line, label, caption);
            let x = (line.x + gutter).min(line.right());
            frame.put_str(x, line.y, &value, style, line.right());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wordgrid_core::{BitState, WordlistIndex};

    fn readout_for(bits: &BitState) -> Readout {
        let wl = WordlistIndex::from_words(["abandon", "ability"]);
        let mut readout = Readout::new();
        readout.on_state_changed(&StateSnapshot::derive(1, bits, &wl, Duration::ZERO));
        readout
    }

    #[test]
    fn empty_pattern_prompts() {
        let readout = readout_for(&BitState::new());
        assert_eq!(readout.word_text(), "Pick a pattern");
        assert_eq!(readout.index_text(), "-");
        assert_eq!(readout.binary(), "○○○○○○○○○○○○");
    }

    #[test]
    fn valid_pattern_shows_word() {
        let mut bits = BitState::new();
        bits.toggle_box(11);
        let readout = readout_for(&bits);
        assert_eq!(readout.word_text(), "abandon");
        assert_eq!(readout.index_text(), "1");
    }

    #[test]
    fn injected_out_of_range_is_defined() {
        let readout = readout_for(&BitState::from_boxes([true; 12]));
        assert_eq!(readout.word_text(), "Out of range (max 2048)");
        assert_eq!(readout.index_text(), "4095");
    }

    #[test]
    fn render_aligns_values() {
        let mut bits = BitState::new();
        bits.toggle_box(10);
        let readout = readout_for(&bits);
        let mut frame = Frame::new(40, 3);
        readout.render(frame.area(), &mut frame);
        assert_eq!(frame.row_text(0), "Selected Word: ability");
        assert_eq!(frame.row_text(1), "Index:         2");
        assert!(frame.row_text(2).ends_with("○○○○○○○○○○●○"));
    }
}
