#![forbid(unsafe_code)]

//! Cell styles with patch (cascade) semantics.

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE   = 0b0001_0000;
        const STRIKE    = 0b0010_0000;
    }
}

/// Foreground, background, and attributes for a run of cells.
///
/// Unset colors inherit from whatever the style is patched over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Attributes.
    pub attrs: StyleFlags,
}

impl Style {
    /// Empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attributes.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = self.attrs.union(attrs);
        self
    }

    /// Add [`StyleFlags::BOLD`].
    #[must_use]
    pub const fn bold(self) -> Self {
        self.attrs(StyleFlags::BOLD)
    }

    /// Add [`StyleFlags::DIM`].
    #[must_use]
    pub const fn dim(self) -> Self {
        self.attrs(StyleFlags::DIM)
    }

    /// Add [`StyleFlags::ITALIC`].
    #[must_use]
    pub const fn italic(self) -> Self {
        self.attrs(StyleFlags::ITALIC)
    }

    /// Add [`StyleFlags::UNDERLINE`].
    #[must_use]
    pub const fn underline(self) -> Self {
        self.attrs(StyleFlags::UNDERLINE)
    }

    /// Add [`StyleFlags::REVERSE`].
    #[must_use]
    pub const fn reverse(self) -> Self {
        self.attrs(StyleFlags::REVERSE)
    }

    /// Overlay `other` on top of `self`: colors set in `other` win and
    /// attributes are unioned.
    #[must_use]
    pub fn patch(self, other: &Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: self.attrs | other.attrs,
        }
    }

    /// Whether this style sets nothing.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_overrides_set_colors_only() {
        let base = Style::new().fg(Color::WHITE).bg(Color::BLACK);
        let over = Style::new().bg(Color::rgb(1, 2, 3)).bold();
        let out = base.patch(&over);
        assert_eq!(out.fg, Some(Color::WHITE));
        assert_eq!(out.bg, Some(Color::rgb(1, 2, 3)));
        assert!(out.attrs.contains(StyleFlags::BOLD));
    }

    #[test]
    fn attrs_accumulate() {
        let s = Style::new().bold().underline().dim();
        assert_eq!(
            s.attrs,
            StyleFlags::BOLD | StyleFlags::UNDERLINE | StyleFlags::DIM
        );
    }

    #[test]
    fn empty_style() {
        assert!(Style::new().is_empty());
        assert!(!Style::new().reverse().is_empty());
    }
}
