#![forbid(unsafe_code)]

//! Free-text word entry with autocomplete.
//!
//! The view wraps a [`TextField`] and binds it to a [`WordlistIndex`]:
//!
//! - Every edit recomputes the suggestion list (prefix matches, each with
//!   its 1-based position). A lone suggestion equal to the input is not
//!   shown, since the word is already complete.
//! - Up/Down move a clamped highlight, Enter commits it, Escape closes the
//!   list without committing.
//! - Losing focus validates the text and hides the list after a short
//!   delay. The delay keeps the list clickable, so a click on a suggestion
//!   that arrives right after the blur still lands.
//! - A rejected word resets the pattern and marks the field invalid until
//!   the error timer clears it.
//!
//! Writes go to the [`BitState`] handed in by the caller. The field text is
//! updated from the pattern only through [`StateListener`].

use std::time::Duration;

use wordgrid_core::event::{Event, KeyCode};
use wordgrid_core::geometry::Rect;
use wordgrid_core::timer::earliest;
use wordgrid_core::{BitState, DEFAULT_MAX_SUGGESTIONS, Suggestion, Timer, WordlistIndex, normalize};
use wordgrid_style::{InteractionState, Style, Theme};

use crate::Widget;
use crate::frame::{Frame, text_width};
use crate::snapshot::{StateListener, StateSnapshot};
use crate::text_field::TextField;

/// Default delay before the list hides after a blur.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(200);
/// Default time the invalid styling stays on.
pub const DEFAULT_ERROR_CLEAR: Duration = Duration::from_millis(3500);

/// Result of validating the field text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// The field was blank; nothing changed.
    Cleared,
    /// The word was found; the pattern now selects `index`.
    Accepted { index: usize },
    /// The word is not in the list; the pattern was reset.
    Rejected,
}

/// What a key or paste did to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Nothing for this view.
    None,
    /// The text changed.
    Edited,
    /// Cursor or highlight moved.
    Navigated,
    /// A suggestion was committed.
    Selected { index: usize, word: String },
    /// The list was closed without a choice.
    Closed,
    /// Enter with the list closed validated the text.
    Validated(Validation),
}

/// The word input view.
#[derive(Debug, Clone)]
pub struct WordInputView {
    field: TextField,
    suggestions: Vec<Suggestion>,
    highlighted: Option<usize>,
    hide_timer: Timer,
    hide_delay: Duration,
    invalid: bool,
    error_timer: Timer,
    error_clear: Duration,
    max_suggestions: usize,
    theme: Theme,
}

impl Default for WordInputView {
    fn default() -> Self {
        Self::new()
    }
}

impl WordInputView {
    pub fn new() -> Self {
        Self {
            field: TextField::new(),
            suggestions: Vec::new(),
            highlighted: None,
            hide_timer: Timer::new(),
            hide_delay: DEFAULT_HIDE_DELAY,
            invalid: false,
            error_timer: Timer::new(),
            error_clear: DEFAULT_ERROR_CLEAR,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            theme: Theme::default(),
        }
    }

    /// Override the delays and list length (builder).
    #[must_use]
    pub fn with_timings(
        mut self,
        hide_delay: Duration,
        error_clear: Duration,
        max_suggestions: usize,
    ) -> Self {
        self.hide_delay = hide_delay;
        self.error_clear = error_clear;
        self.max_suggestions = max_suggestions;
        self
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.field.set_placeholder(placeholder);
    }

    /// Current text.
    pub fn value(&self) -> &str {
        self.field.value()
    }

    pub fn is_focused(&self) -> bool {
        self.field.focused()
    }

    /// Whether the invalid styling is on.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Suggestions currently listed.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Whether the suggestion list is showing.
    pub fn is_list_open(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Highlighted suggestion.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Give the field focus and rebuild the list from the current text.
    ///
    /// A list left over from before the last blur is dropped when the text
    /// no longer produces it, e.g. after a rejected word was cleared.
    pub fn focus(&mut self, wordlist: &WordlistIndex) {
        self.field.set_focused(true);
        self.refresh_suggestions(wordlist);
    }

    /// Take focus away: hide the list after the delay, then validate.
    pub fn blur(
        &mut self,
        now: Duration,
        wordlist: &WordlistIndex,
        bits: &mut BitState,
    ) -> Validation {
        self.field.set_focused(false);
        self.highlighted = None;
        if self.is_list_open() {
            self.hide_timer.schedule(now, self.hide_delay);
        }
        self.validate(now, wordlist, bits)
    }

    /// Check the text against the list and update the pattern.
    pub fn validate(
        &mut self,
        now: Duration,
        wordlist: &WordlistIndex,
        bits: &mut BitState,
    ) -> Validation {
        let text = self.field.value();
        let _span = tracing::debug_span!("word_input.validate", len = text.len()).entered();
        if normalize(text).is_empty() {
            self.clear_error();
            return Validation::Cleared;
        }
        match wordlist.find_index(text) {
            Some(index) => {
                self.clear_error();
                bits.set_state_from_index(index);
                tracing::debug!(index, "word accepted");
                Validation::Accepted { index }
            }
            None => {
                tracing::warn!(input = %text, "word not in wordlist");
                self.invalid = true;
                self.error_timer.schedule(now, self.error_clear);
                bits.reset_boxes();
                Validation::Rejected
            }
        }
    }

    fn clear_error(&mut self) {
        self.invalid = false;
        self.error_timer.cancel();
    }

    /// Recompute the list for the current text.
    pub fn refresh_suggestions(&mut self, wordlist: &WordlistIndex) {
        self.highlighted = None;
        self.hide_timer.cancel();
        let text = self.field.value();
        let input = normalize(text);
        if input.is_empty() {
            self.suggestions.clear();
            return;
        }
        let matches = wordlist.suggest(text, self.max_suggestions);
        let complete = matches.len() == 1 && normalize(&matches[0].word) == input;
        if complete {
            self.suggestions.clear();
        } else {
            self.suggestions = matches;
        }
    }

    /// Close the list now.
    pub fn close_list(&mut self) {
        self.suggestions.clear();
        self.highlighted = None;
        self.hide_timer.cancel();
    }

    /// Commit suggestion `position` (0-based in the list).
    ///
    /// The field takes the word, the pattern loads its index, the list
    /// closes, and focus is released without a second validation.
    pub fn select(
        &mut self,
        position: usize,
        wordlist: &WordlistIndex,
        bits: &mut BitState,
    ) -> Option<InputAction> {
        let chosen = self.suggestions.get(position)?.clone();
        let index = wordlist
            .find_index(&chosen.word)
            .unwrap_or(chosen.position - 1);
        tracing::debug!(index, word = %chosen.word, "suggestion selected");
        self.field.set_value(chosen.word.as_str());
        self.clear_error();
        bits.set_state_from_index(index);
        self.close_list();
        self.field.set_focused(false);
        Some(InputAction::Selected {
            index,
            word: chosen.word,
        })
    }

    /// Handle a key or paste while focused.
    pub fn handle_event(
        &mut self,
        event: &Event,
        now: Duration,
        wordlist: &WordlistIndex,
        bits: &mut BitState,
    ) -> InputAction {
        if let Event::Key(key) = event {
            if !key.is_press() {
                return InputAction::None;
            }
            let open = self.is_list_open();
            let last = self.suggestions.len().saturating_sub(1);
            match key.code {
                KeyCode::Down if open => {
                    self.highlighted = Some(self.highlighted.map_or(0, |h| (h + 1).min(last)));
                    return InputAction::Navigated;
                }
                KeyCode::Up if open => {
                    self.highlighted = Some(self.highlighted.map_or(0, |h| h.saturating_sub(1)));
                    return InputAction::Navigated;
                }
                KeyCode::Enter if open => {
                    return match self.highlighted {
                        Some(h) => self.select(h, wordlist, bits).unwrap_or(InputAction::None),
                        None => InputAction::None,
                    };
                }
                KeyCode::Enter => {
                    return InputAction::Validated(self.validate(now, wordlist, bits));
                }
                KeyCode::Escape if open => {
                    self.close_list();
                    return InputAction::Closed;
                }
                _ => {}
            }
        }
        let before = self.field.value().to_string();
        if !self.field.handle_event(event) {
            return InputAction::None;
        }
        if self.field.value() == before {
            return InputAction::Navigated;
        }
        self.refresh_suggestions(wordlist);
        InputAction::Edited
    }

    /// Reset the view: empty text, no list, no error.
    pub fn reset(&mut self) {
        self.field.clear();
        self.close_list();
        self.clear_error();
    }

    /// Fire due timers. Returns `true` if anything visible changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let mut changed = false;
        if self.hide_timer.fire(now) {
            self.suggestions.clear();
            self.highlighted = None;
            changed = true;
        }
        if self.error_timer.fire(now) {
            self.invalid = false;
            changed = true;
        }
        changed
    }

    /// Earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        earliest([self.hide_timer.deadline(), self.error_timer.deadline()])
    }

    /// Where the list is drawn for a field at `input`.
    pub fn list_rect(&self, input: Rect) -> Rect {
        let height = self.suggestions.len().min(usize::from(u16::MAX)) as u16;
        Rect::new(input.x, input.bottom(), input.width, height)
    }

    /// Suggestion under `(x, y)` for a field drawn at `input`.
    pub fn suggestion_at(&self, input: Rect, x: u16, y: u16) -> Option<usize> {
        let list = self.list_rect(input);
        list.contains(x, y).then(|| usize::from(y - list.y))
    }

    /// Draw the open list below a field at `input`, clipped to `bounds`.
    pub fn render_list(&self, input: Rect, bounds: Rect, frame: &mut Frame) {
        let list = self.list_rect(input).intersection(&bounds);
        let panel = self.theme.panel();
        let selected = self.theme.button().resolve(InteractionState::Focused);
        let rows = usize::from(list.height);
        for (row, suggestion) in self.suggestions.iter().enumerate().take(rows) {
            let line = list.row(row as u16);
            let style = if self.highlighted == Some(row) { selected } else { panel };
            frame.fill(line, style);
            frame.put_line(line, &format!(" {}", suggestion.word), style);
            let number = format!("#{} ", suggestion.position);
            let number_x = line.right().saturating_sub(text_width(&number) as u16);
            let muted = Style::new().fg(self.theme.muted).bg(self.theme.surface);
            let number_style = if self.highlighted == Some(row) { style } else { muted };
            frame.put_str(number_x.max(line.x), line.y, &number, number_style, line.right());
        }
    }
}

impl StateListener for WordInputView {
    fn on_state_changed(&mut self, snapshot: &StateSnapshot) {
        match &snapshot.input_word {
            Some(word) if self.field.value() != word => self.field.set_value(word.as_str()),
            Some(_) => {}
            None if !self.field.value().is_empty() => self.field.clear(),
            None => {}
        }
    }
}

impl Widget for WordInputView {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let state = InteractionState::from_flags(self.field.focused(), false, false);
        let style = self.theme.input(self.invalid).resolve(state);
        let placeholder = Style::new()
            .fg(self.theme.muted)
            .bg(style.bg.unwrap_or(self.theme.surface));
        let mut field = self.field.clone();
        field.set_styles(style, placeholder);
        field.render(area.row(0), frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_core::event::KeyEvent;

    fn list() -> WordlistIndex {
        WordlistIndex::from_words([
            "abandon", "ability", "able", "about", "above", "absent", "absorb", "abstract",
            "absurd", "abuse", "access", "accident", "zoo",
        ])
    }

    fn type_text(
        view: &mut WordInputView,
        text: &str,
        wordlist: &WordlistIndex,
        bits: &mut BitState,
    ) {
        for c in text.chars() {
            view.handle_event(&Event::key(KeyCode::Char(c)), Duration::ZERO, wordlist, bits);
        }
    }

    fn press(
        view: &mut WordInputView,
        code: KeyCode,
        wordlist: &WordlistIndex,
        bits: &mut BitState,
    ) -> InputAction {
        view.handle_event(&Event::Key(KeyEvent::new(code)), Duration::ZERO, wordlist, bits)
    }

    #[test]
    fn typing_lists_prefix_matches_capped() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "a", &wl, &mut bits);
        assert_eq!(view.suggestions().len(), DEFAULT_MAX_SUGGESTIONS);
        assert_eq!(view.suggestions()[0].word, "abandon");
        assert_eq!(view.suggestions()[0].position, 1);
    }

    #[test]
    fn single_exact_match_hides_list() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "ZOO", &wl, &mut bits);
        assert!(!view.is_list_open());
    }

    #[test]
    fn single_partial_match_is_listed() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "zo", &wl, &mut bits);
        assert_eq!(view.suggestions().len(), 1);
    }

    #[test]
    fn no_match_and_blank_clear_list() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "q", &wl, &mut bits);
        assert!(!view.is_list_open());
        press(&mut view, KeyCode::Backspace, &wl, &mut bits);
        type_text(&mut view, " ", &wl, &mut bits);
        assert!(!view.is_list_open());
    }

    #[test]
    fn highlight_is_clamped() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "abs", &wl, &mut bits);
        assert_eq!(view.suggestions().len(), 4);
        press(&mut view, KeyCode::Up, &wl, &mut bits);
        assert_eq!(view.highlighted(), Some(0));
        for _ in 0..10 {
            press(&mut view, KeyCode::Down, &wl, &mut bits);
        }
        assert_eq!(view.highlighted(), Some(3));
        press(&mut view, KeyCode::Up, &wl, &mut bits);
        assert_eq!(view.highlighted(), Some(2));
    }

    #[test]
    fn enter_without_highlight_is_noop() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "abs", &wl, &mut bits);
        assert_eq!(press(&mut view, KeyCode::Enter, &wl, &mut bits), InputAction::None);
        assert!(view.is_list_open());
        assert!(bits.is_empty());
    }

    #[test]
    fn enter_commits_highlight() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "abs", &wl, &mut bits);
        press(&mut view, KeyCode::Down, &wl, &mut bits);
        press(&mut view, KeyCode::Down, &wl, &mut bits);
        let action = press(&mut view, KeyCode::Enter, &wl, &mut bits);
        assert_eq!(
            action,
            InputAction::Selected {
                index: 6,
                word: "absorb".to_string()
            }
        );
        assert_eq!(view.value(), "absorb");
        assert_eq!(bits.calculate_value(), 7);
        assert!(!view.is_list_open());
        assert!(!view.is_focused());
    }

    #[test]
    fn escape_closes_without_commit() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "abs", &wl, &mut bits);
        press(&mut view, KeyCode::Down, &wl, &mut bits);
        assert_eq!(press(&mut view, KeyCode::Escape, &wl, &mut bits), InputAction::Closed);
        assert!(!view.is_list_open());
        assert_eq!(view.value(), "abs");
        assert!(bits.is_empty());
    }

    #[test]
    fn blur_with_valid_word_sets_pattern() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "  ABLE ", &wl, &mut bits);
        assert_eq!(view.blur(Duration::ZERO, &wl, &mut bits), Validation::Accepted { index: 2 });
        assert_eq!(bits.calculate_value(), 3);
        assert!(!view.is_invalid());
    }

    #[test]
    fn blur_with_unknown_word_resets_and_marks_invalid() {
        let wl = list();
        let mut bits = BitState::new();
        bits.toggle_box(11);
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "qwerty", &wl, &mut bits);
        assert_eq!(view.blur(Duration::ZERO, &wl, &mut bits), Validation::Rejected);
        assert!(bits.is_empty());
        assert!(view.is_invalid());
    }

    #[test]
    fn blur_with_blank_text_changes_nothing() {
        let wl = list();
        let mut bits = BitState::new();
        bits.toggle_box(11);
        let mut view = WordInputView::new();
        view.focus(&wl);
        assert_eq!(view.blur(Duration::ZERO, &wl, &mut bits), Validation::Cleared);
        assert_eq!(bits.calculate_value(), 1);
    }

    #[test]
    fn error_styling_clears_after_delay() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "nope", &wl, &mut bits);
        view.blur(Duration::ZERO, &wl, &mut bits);
        assert!(!view.tick(Duration::from_millis(3499)));
        assert!(view.is_invalid());
        assert!(view.tick(Duration::from_millis(3500)));
        assert!(!view.is_invalid());
    }

    #[test]
    fn repeated_rejection_rearms_error_timer() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "nope", &wl, &mut bits);
        view.validate(Duration::ZERO, &wl, &mut bits);
        view.validate(Duration::from_millis(2000), &wl, &mut bits);
        view.tick(Duration::from_millis(3500));
        assert!(view.is_invalid());
        view.tick(Duration::from_millis(5500));
        assert!(!view.is_invalid());
    }

    #[test]
    fn list_stays_clickable_until_hide_delay() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "abs", &wl, &mut bits);
        view.blur(Duration::ZERO, &wl, &mut bits);
        assert!(view.is_list_open());
        assert_eq!(view.next_deadline(), Some(DEFAULT_ERROR_CLEAR.min(DEFAULT_HIDE_DELAY)));

        let input = Rect::new(0, 0, 20, 1);
        let hit = view.suggestion_at(input, 3, 2);
        assert_eq!(hit, Some(1));
        let action = view.select(1, &wl, &mut bits);
        assert!(matches!(action, Some(InputAction::Selected { index: 6, .. })));
        assert_eq!(bits.calculate_value(), 7);
        assert!(!view.is_invalid());
    }

    #[test]
    fn hide_timer_closes_list() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "abs", &wl, &mut bits);
        view.blur(Duration::ZERO, &wl, &mut bits);
        view.tick(Duration::from_millis(199));
        assert!(view.is_list_open());
        view.tick(Duration::from_millis(200));
        assert!(!view.is_list_open());
    }

    #[test]
    fn sync_writes_word_or_clears() {
        let wl = list();
        let mut view = WordInputView::new();
        let mut bits = BitState::new();
        bits.set_state_from_index(3);
        view.on_state_changed(&StateSnapshot::derive(1, &bits, &wl, Duration::ZERO));
        assert_eq!(view.value(), "about");
        bits.reset_boxes();
        view.on_state_changed(&StateSnapshot::derive(2, &bits, &wl, Duration::ZERO));
        assert_eq!(view.value(), "");
    }

    #[test]
    fn refocus_drops_a_list_the_text_no_longer_produces() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "abs", &wl, &mut bits);
        assert_eq!(view.blur(Duration::ZERO, &wl, &mut bits), Validation::Rejected);
        // Hide still pending; the rejection cleared the text.
        assert!(view.is_list_open());
        view.on_state_changed(&StateSnapshot::derive(1, &bits, &wl, Duration::ZERO));
        assert_eq!(view.value(), "");

        view.focus(&wl);
        assert!(!view.is_list_open());
        press(&mut view, KeyCode::Down, &wl, &mut bits);
        assert_eq!(view.highlighted(), None);
        assert_eq!(
            press(&mut view, KeyCode::Enter, &wl, &mut bits),
            InputAction::Validated(Validation::Cleared)
        );
        assert!(bits.is_empty());
    }

    #[test]
    fn refocus_rebuilds_the_list_for_kept_text() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "abs", &wl, &mut bits);
        view.close_list();
        view.blur(Duration::ZERO, &wl, &mut bits);

        view.focus(&wl);
        assert_eq!(view.suggestions().len(), 4);
    }

    #[test]
    fn render_list_shows_word_and_position() {
        let wl = list();
        let mut bits = BitState::new();
        let mut view = WordInputView::new();
        view.focus(&wl);
        type_text(&mut view, "abso", &wl, &mut bits);
        let mut frame = Frame::new(20, 3);
        let input = Rect::new(0, 0, 20, 1);
        view.render(input, &mut frame);
        view.render_list(input, frame.area(), &mut frame);
        assert!(frame.row_text(0).starts_with("abso"));
        assert!(frame.row_text(1).contains("absorb"));
        assert!(frame.row_text(1).ends_with("#7"));
    }
}
