#![forbid(unsafe_code)]

//! Push button.

use wordgrid_core::geometry::Rect;
use wordgrid_style::{InteractionState, InteractiveStyle, Style};

use crate::Widget;
use crate::frame::{Frame, text_width};

/// A one-line button drawn as `[ label ]`.
#[derive(Debug, Clone, Default)]
pub struct Button {
    label: String,
    style: InteractiveStyle,
    focused: bool,
    pressed: bool,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: InteractiveStyle::new(Style::new()),
            focused: false,
            pressed: false,
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_style(&mut self, style: InteractiveStyle) {
        self.style = style;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Show the pressed look, e.g. while a dropdown is open.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Cells needed to draw the button.
    pub fn width(&self) -> u16 {
        (text_width(&self.label) + 4).min(usize::from(u16::MAX)) as u16
    }

    pub fn state(&self) -> InteractionState {
        InteractionState::from_flags(self.focused, self.pressed, false)
    }
}

impl Widget for Button {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let line = area.row(0);
        if line.is_empty() {
            return;
        }
        let style = self.style.resolve(self.state());
        let width = self.width().min(line.width);
        let rect = Rect::new(line.x, line.y, width, 1);
        frame.fill(rect, style);
        frame.put_line(rect, &format!("[ {} ]", self.label), style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_style::Theme;

    #[test]
    fn renders_bracketed_label() {
        let button = Button::new("Reset");
        let mut frame = Frame::new(12, 1);
        button.render(frame.area(), &mut frame);
        assert_eq!(frame.row_text(0), "[ Reset ]");
        assert_eq!(button.width(), 9);
    }

    #[test]
    fn focus_changes_style() {
        let theme = Theme::dark();
        let mut button = Button::new("Reset");
        button.set_style(theme.button());
        let mut frame = Frame::new(9, 1);
        button.render(frame.area(), &mut frame);
        let normal = frame.cell(0, 0).map(|c| c.style);
        button.set_focused(true);
        button.render(frame.area(), &mut frame);
        assert_ne!(frame.cell(0, 0).map(|c| c.style), normal);
        assert_eq!(button.state(), InteractionState::Focused);
    }
}
