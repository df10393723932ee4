#![forbid(unsafe_code)]

//! Wordlist language dropdown.

use wordgrid_core::event::{KeyCode, KeyEvent};
use wordgrid_core::geometry::Rect;
use wordgrid_i18n::Language;
use wordgrid_style::{InteractionState, Theme};

use crate::Widget;
use crate::frame::{Frame, text_width};

/// Outcome of input on the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    None,
    /// The highlight moved.
    Moved,
    /// A language was chosen; the list closed.
    Chosen(Language),
    /// The list closed without a choice.
    Closed,
}

/// Dropdown listing every [`Language`] with its native name.
#[derive(Debug, Clone, Default)]
pub struct LanguagePicker {
    open: bool,
    cursor: usize,
    active: Language,
    theme: Theme,
}

impl LanguagePicker {
    pub fn new(active: Language) -> Self {
        Self {
            active,
            ..Self::default()
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Mark `language` as the current one.
    pub fn set_active(&mut self, language: Language) {
        self.active = language;
    }

    pub fn active(&self) -> Language {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Highlighted language.
    pub fn highlighted(&self) -> Language {
        Language::ALL[self.cursor]
    }

    /// Open with the highlight on the active language.
    pub fn open(&mut self) {
        self.open = true;
        self.cursor = Self::position(self.active);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    fn position(language: Language) -> usize {
        Language::ALL.iter().position(|&l| l == language).unwrap_or(0)
    }

    /// Text for the dropdown button.
    pub fn button_label(&self) -> String {
        format!("[{}] {} ▾", self.active.badge(), self.active.native_name())
    }

    fn row_text(&self, language: Language) -> String {
        let mark = if language == self.active { " ✓" } else { "" };
        format!(" [{}] {}{}", language.badge(), language.native_name(), mark)
    }

    /// Keyboard handling while open.
    pub fn handle_key(&mut self, key: &KeyEvent) -> PickerAction {
        if !self.open {
            return PickerAction::None;
        }
        let last = Language::ALL.len() - 1;
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor = (self.cursor + 1).min(last),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = last,
            KeyCode::Enter | KeyCode::Char(' ') => return self.choose(self.cursor),
            KeyCode::Escape => {
                self.close();
                return PickerAction::Closed;
            }
            _ => return PickerAction::None,
        }
        PickerAction::Moved
    }

    fn choose(&mut self, position: usize) -> PickerAction {
        let Some(&language) = Language::ALL.get(position) else {
            return PickerAction::None;
        };
        self.close();
        PickerAction::Chosen(language)
    }

    /// Where the list opens below a button at `anchor`.
    pub fn list_rect(&self, anchor: Rect) -> Rect {
        let width = Language::ALL
            .iter()
            .map(|&l| text_width(&self.row_text(l)) + 1)
            .max()
            .unwrap_or(0) as u16;
        Rect::new(
            anchor.x,
            anchor.bottom(),
            width.max(anchor.width),
            Language::ALL.len() as u16,
        )
    }

    /// A click while open: choose the row under the pointer or close.
    pub fn click(&mut self, anchor: Rect, x: u16, y: u16) -> PickerAction {
        if !self.open {
            return PickerAction::None;
        }
        let list = self.list_rect(anchor);
        if list.contains(x, y) {
            return self.choose(usize::from(y - list.y));
        }
        self.close();
        PickerAction::Closed
    }
}

impl Widget for LanguagePicker {
    /// Draws the open list into `area`, normally [`LanguagePicker::list_rect`].
    fn render(&self, area: Rect, frame: &mut Frame) {
        if !self.open {
            return;
        }
        let panel = self.theme.panel();
        let highlight = self.theme.button().resolve(InteractionState::Focused);
        for (dy, &language) in Language::ALL.iter().enumerate().take(usize::from(area.height)) {
            let line = area.row(dy as u16);
            let style = if dy == self.cursor { highlight } else { panel };
            frame.fill(line, style);
            frame.put_line(line, &self.row_text(language), style);
        }
    }
}
