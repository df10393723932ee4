#![forbid(unsafe_code)]

//! Learn-more overlay.
//!
//! While open the modal owns the keyboard. Escape closes it, and so does a
//! left click anywhere outside its content rectangle.

use wordgrid_core::event::{Event, KeyCode};
use wordgrid_core::geometry::Rect;
use wordgrid_style::Theme;

use crate::Widget;
use crate::frame::{Frame, wrap_text};

/// Widest the content box gets.
pub const MAX_MODAL_WIDTH: u16 = 72;

/// Why the modal closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Escape was pressed.
    EscapePressed,
    /// A click landed outside the content.
    BackdropClicked,
}

/// A titled, bordered text overlay.
#[derive(Debug, Clone, Default)]
pub struct Modal {
    open: bool,
    title: String,
    body: String,
    hint: String,
    theme: Theme,
}

impl Modal {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// Footer line such as "Esc to close" (builder).
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Replace all text, e.g. after a language change.
    pub fn set_text(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.title = title.into();
        self.body = body.into();
        self.hint = hint.into();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    fn inner_width(screen: Rect) -> u16 {
        screen.width.min(MAX_MODAL_WIDTH).saturating_sub(4)
    }

    fn body_lines(&self, screen: Rect) -> Vec<String> {
        wrap_text(&self.body, usize::from(Self::inner_width(screen)))
    }

    /// The content box, centered on `screen`.
    pub fn content_rect(&self, screen: Rect) -> Rect {
        let lines = self.body_lines(screen).len() as u16;
        // Border, title, blank, body, blank, hint, border.
        let height = lines.saturating_add(6);
        screen.centered(screen.width.min(MAX_MODAL_WIDTH), height)
    }

    /// Handle an event while open. Returns why it closed, if it did.
    pub fn handle_event(&mut self, event: &Event, screen: Rect) -> Option<ModalAction> {
        if !self.open {
            return None;
        }
        let action = match event {
            Event::Key(key) if key.is_press() && key.code == KeyCode::Escape => {
                ModalAction::EscapePressed
            }
            Event::Mouse(mouse)
                if mouse.is_left_press() && !self.content_rect(screen).contains(mouse.x, mouse.y) =>
            {
                ModalAction::BackdropClicked
            }
            _ => return None,
        };
        self.open = false;
        tracing::debug!(?action, "modal closed");
        Some(action)
    }
}

impl Widget for Modal {
    /// Draws the content box centered in `area` (the whole screen).
    fn render(&self, area: Rect, frame: &mut Frame) {
        if !self.open {
            return;
        }
        let rect = self.content_rect(area);
        if rect.width < 4 || rect.height < 3 {
            return;
        }
        let panel = self.theme.panel();
        frame.fill(rect, panel);
        frame.border(rect, panel.fg(self.theme.border));
        let inner = Rect::new(rect.x + 2, rect.y + 1, rect.width - 4, rect.height - 2);
        frame.put_line(inner.row(0), &self.title, panel.fg(self.theme.accent).bold());
        for (i, line) in self.body_lines(area).iter().enumerate() {
            frame.put_line(inner.row(2 + i as u16), line, panel);
        }
        let hint_row = inner.row(inner.height.saturating_sub(1));
        frame.put_line(hint_row, &self.hint, panel.fg(self.theme.muted));
    }
}
