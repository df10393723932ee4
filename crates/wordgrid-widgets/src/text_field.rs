#![forbid(unsafe_code)]

//! Single-line text field.
//!
//! Grapheme-cluster aware editing with a cursor, horizontal scrolling, and
//! word-level deletion. The field knows nothing about wordlists; the
//! [`WordInputView`](crate::word_input::WordInputView) wraps it.

use std::cell::Cell as StdCell;

use unicode_segmentation::UnicodeSegmentation;
use wordgrid_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use wordgrid_core::geometry::Rect;
use wordgrid_style::Style;

use crate::Widget;
use crate::frame::{Frame, grapheme_width};

/// A single-line editable text field.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    /// Cursor position (grapheme index).
    cursor: usize,
    /// Scroll offset in cells, recomputed on render.
    scroll_cells: StdCell<usize>,
    placeholder: String,
    max_length: Option<usize>,
    style: Style,
    placeholder_style: Style,
    focused: bool,
}

impl TextField {
    /// Create an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Limit the value to `max` graphemes (builder).
    #[must_use]
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Set the text and placeholder styles.
    pub fn set_styles(&mut self, style: Style, placeholder_style: Style) {
        self.style = style;
        self.placeholder_style = placeholder_style;
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Self::sanitize(&value.into());
        if let Some(max) = self.max_length {
            let end = self.grapheme_byte_offset(max);
            self.value.truncate(end);
        }
        self.cursor = self.grapheme_count();
    }

    /// Empty the field.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.scroll_cells.set(0);
    }

    /// Cursor position in graphemes.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the field has keyboard focus.
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Set keyboard focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Screen position of the cursor inside `area`.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let viewport = usize::from(area.width.max(1));
        let scroll = self.effective_scroll(viewport);
        let rel = self.cursor_visual_pos().saturating_sub(scroll);
        let x = area.x + (rel.min(viewport - 1) as u16);
        (x, area.y)
    }

    /// Apply an editing event. Returns `true` if the text or cursor changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Paste(text) => {
                self.insert_text(text);
                true
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let ctrl = key.ctrl();
        match key.code {
            KeyCode::Char('w') if ctrl => {
                self.delete_word_back();
                true
            }
            KeyCode::Char('u') if ctrl => {
                self.clear();
                true
            }
            KeyCode::Char(c) if !ctrl => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                if ctrl {
                    self.delete_word_back();
                } else {
                    self.delete_char_back();
                }
                true
            }
            KeyCode::Delete => {
                self.delete_char_forward();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.grapheme_count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                self.scroll_cells.set(0);
                true
            }
            KeyCode::End => {
                self.cursor = self.grapheme_count();
                true
            }
            _ => false,
        }
    }

    fn sanitize(text: &str) -> String {
        text.chars()
            .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
            .filter(|c| !c.is_control())
            .collect()
    }

    /// Insert text at the cursor. Line breaks become spaces, control
    /// characters are dropped, and the max length is respected.
    pub fn insert_text(&mut self, text: &str) {
        let clean = Self::sanitize(text);
        if clean.is_empty() {
            return;
        }
        let count = self.grapheme_count();
        let avail = self
            .max_length
            .map_or(usize::MAX, |max| max.saturating_sub(count));
        let end = clean
            .grapheme_indices(true)
            .map(|(i, _)| i)
            .nth(avail)
            .unwrap_or(clean.len());
        let to_insert = &clean[..end];
        if to_insert.is_empty() {
            return;
        }
        let offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert_str(offset, to_insert);
        let delta = self.grapheme_count().saturating_sub(count);
        self.cursor = (self.cursor + delta).min(self.grapheme_count());
    }

    fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let old_count = self.grapheme_count();
        let offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert(offset, c);
        let new_count = self.grapheme_count();
        if let Some(max) = self.max_length
            && new_count > max
        {
            self.value.drain(offset..offset + c.len_utf8());
            return;
        }
        // A combining mark merges into the previous grapheme.
        if new_count > old_count {
            self.cursor += 1;
        }
    }

    fn delete_char_back(&mut self) {
        if self.cursor > 0 {
            let start = self.grapheme_byte_offset(self.cursor - 1);
            let end = self.grapheme_byte_offset(self.cursor);
            self.value.drain(start..end);
            self.cursor -= 1;
        }
    }

    fn delete_char_forward(&mut self) {
        if self.cursor < self.grapheme_count() {
            let start = self.grapheme_byte_offset(self.cursor);
            let end = self.grapheme_byte_offset(self.cursor + 1);
            self.value.drain(start..end);
        }
    }

    fn delete_word_back(&mut self) {
        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let mut pos = self.cursor;
        while pos > 0 && graphemes[pos - 1].trim().is_empty() {
            pos -= 1;
        }
        while pos > 0 && !graphemes[pos - 1].trim().is_empty() {
            pos -= 1;
        }
        if pos < self.cursor {
            let start = self.grapheme_byte_offset(pos);
            let end = self.grapheme_byte_offset(self.cursor);
            self.value.drain(start..end);
            self.cursor = pos;
        }
    }

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn grapheme_byte_offset(&self, index: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn cursor_visual_pos(&self) -> usize {
        self.value
            .graphemes(true)
            .take(self.cursor)
            .map(grapheme_width)
            .sum()
    }

    fn effective_scroll(&self, viewport: usize) -> usize {
        let cursor = self.cursor_visual_pos();
        let mut scroll = self.scroll_cells.get();
        if cursor < scroll {
            scroll = cursor;
        }
        if cursor >= scroll + viewport {
            scroll = cursor + 1 - viewport;
        }
        // Snap to a grapheme start so a wide glyph is never split.
        let mut pos = 0;
        for g in self.value.graphemes(true) {
            let next = pos + grapheme_width(g);
            if pos < scroll && scroll < next {
                scroll = next;
                break;
            }
            if next > scroll {
                break;
            }
            pos = next;
        }
        self.scroll_cells.set(scroll);
        scroll
    }
}

impl Widget for TextField {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        frame.fill(area, self.style);
        if self.value.is_empty() {
            frame.put_line(area, &self.placeholder, self.placeholder_style);
        } else {
            let scroll = self.effective_scroll(usize::from(area.width));
            let mut skipped = 0;
            let mut x = area.x;
            for g in self.value.graphemes(true) {
                let w = grapheme_width(g);
                if skipped < scroll {
                    skipped += w;
                    continue;
                }
                x = frame.put_str(x, area.y, g, self.style, area.right());
                if x >= area.right() {
                    break;
                }
            }
        }
        if self.focused {
            frame.set_cursor(Some(self.cursor_position(area)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_core::event::Modifiers;

    fn key(code: KeyCode) -> Event {
        Event::key(code)
    }

    fn typed(text: &str) -> TextField {
        let mut field = TextField::new();
        for c in text.chars() {
            field.handle_event(&key(KeyCode::Char(c)));
        }
        field
    }

    #[test]
    fn typing_appends() {
        let field = typed("aban");
        assert_eq!(field.value(), "aban");
        assert_eq!(field.cursor(), 4);
    }

    #[test]
    fn backspace_and_delete() {
        let mut field = typed("abc");
        field.handle_event(&key(KeyCode::Backspace));
        assert_eq!(field.value(), "ab");
        field.handle_event(&key(KeyCode::Home));
        field.handle_event(&key(KeyCode::Delete));
        assert_eq!(field.value(), "b");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn insert_in_middle() {
        let mut field = typed("ac");
        field.handle_event(&key(KeyCode::Left));
        field.handle_event(&key(KeyCode::Char('b')));
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn ctrl_w_deletes_word() {
        let mut field = typed("one two  ");
        field.handle_event(&Event::Key(
            KeyEvent::new(KeyCode::Char('w')).with_modifiers(Modifiers::CTRL),
        ));
        assert_eq!(field.value(), "one ");
    }

    #[test]
    fn paste_is_sanitized() {
        let mut field = TextField::new();
        field.handle_event(&Event::Paste("ab\ncd\u{7}".to_string()));
        assert_eq!(field.value(), "ab cd");
    }

    #[test]
    fn max_length_truncates() {
        let mut field = TextField::new().with_max_length(3);
        field.insert_text("abcdef");
        assert_eq!(field.value(), "abc");
        field.handle_event(&key(KeyCode::Char('x')));
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn grapheme_clusters_move_as_one() {
        let mut field = TextField::new();
        field.insert_text("e\u{301}x");
        assert_eq!(field.cursor(), 2);
        field.handle_event(&key(KeyCode::Left));
        field.handle_event(&key(KeyCode::Backspace));
        assert_eq!(field.value(), "x");
    }

    #[test]
    fn set_value_moves_cursor_to_end() {
        let mut field = TextField::new();
        field.set_value("zoo");
        assert_eq!(field.cursor(), 3);
        field.clear();
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn render_shows_placeholder_when_empty() {
        let field = TextField::new().with_placeholder("Enter word");
        let mut frame = Frame::new(12, 1);
        field.render(frame.area(), &mut frame);
        assert_eq!(frame.row_text(0), "Enter word");
    }

    #[test]
    fn render_scrolls_to_keep_cursor_visible() {
        let mut field = typed("abcdefgh");
        field.set_focused(true);
        let mut frame = Frame::new(4, 1);
        field.render(frame.area(), &mut frame);
        assert_eq!(frame.row_text(0), "fgh");
        assert_eq!(frame.cursor(), Some((3, 0)));
    }

    #[test]
    fn unfocused_field_requests_no_cursor() {
        let field = typed("ab");
        let mut frame = Frame::new(4, 1);
        field.render(frame.area(), &mut frame);
        assert_eq!(frame.cursor(), None);
    }
}
