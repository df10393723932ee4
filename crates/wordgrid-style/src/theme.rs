#![forbid(unsafe_code)]

//! Light and dark themes with semantic color slots.
//!
//! Widgets never name concrete colors. They ask the [`Theme`] for a slot
//! (`text`, `accent`, `error`, ...) or for a prebuilt [`InteractiveStyle`]
//! for a control, so switching [`ThemeMode`] restyles everything at once.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::interactive::InteractiveStyle;
use crate::style::Style;

/// Light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Stored preference value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored value, falling back to [`ThemeMode::Dark`].
    #[must_use]
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized theme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme '{}' (expected 'dark' or 'light')", self.0)
    }
}

impl std::error::Error for UnknownThemeMode {}

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(UnknownThemeMode(s.to_string())),
        }
    }
}

/// Resolved palette for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub box_on: Color,
    pub box_off: Color,
    pub box_disabled: Color,
    pub info: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    /// Dark palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Color::rgb(0x12, 0x14, 0x1a),
            surface: Color::rgb(0x1e, 0x22, 0x2b),
            text: Color::rgb(0xe6, 0xe8, 0xee),
            muted: Color::rgb(0x8a, 0x90, 0x9e),
            accent: Color::rgb(0xf7, 0x93, 0x1a),
            border: Color::rgb(0x3a, 0x40, 0x4d),
            box_on: Color::rgb(0xf7, 0x93, 0x1a),
            box_off: Color::rgb(0x2a, 0x2f, 0x3a),
            box_disabled: Color::rgb(0x4a, 0x4e, 0x57),
            info: Color::rgb(0x5a, 0xa9, 0xe6),
            warning: Color::rgb(0xe6, 0xb4, 0x50),
            error: Color::rgb(0xe5, 0x53, 0x4b),
        }
    }

    /// Light palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Color::rgb(0xf7, 0xf7, 0xf5),
            surface: Color::rgb(0xff, 0xff, 0xff),
            text: Color::rgb(0x1c, 0x1e, 0x24),
            muted: Color::rgb(0x5f, 0x64, 0x70),
            accent: Color::rgb(0xb8, 0x5c, 0x00),
            border: Color::rgb(0xc8, 0xcb, 0xd2),
            box_on: Color::rgb(0xb8, 0x5c, 0x00),
            box_off: Color::rgb(0xe4, 0xe6, 0xea),
            box_disabled: Color::rgb(0xb0, 0xb3, 0xba),
            info: Color::rgb(0x1f, 0x6f, 0xb2),
            warning: Color::rgb(0x8a, 0x5a, 0x00),
            error: Color::rgb(0xb3, 0x26, 0x1e),
        }
    }

    /// Palette for `mode`.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Plain text.
    pub const fn base(&self) -> Style {
        Style::new().fg(self.text).bg(self.background)
    }

    /// Secondary text.
    pub const fn muted_text(&self) -> Style {
        Style::new().fg(self.muted).bg(self.background)
    }

    /// Headings and the selected word.
    pub const fn emphasis(&self) -> Style {
        Style::new().fg(self.accent).bg(self.background).bold()
    }

    /// A grid box; `on` selects the active look.
    pub fn grid_box(&self, on: bool) -> InteractiveStyle {
        let normal = if on {
            Style::new().fg(self.background).bg(self.box_on).bold()
        } else {
            Style::new().fg(self.text).bg(self.box_off)
        };
        InteractiveStyle::new(normal)
            .focused(Style::new().underline().bold())
            .disabled(Style::new().fg(self.box_disabled).bg(self.background).dim())
    }

    /// Push buttons and the language dropdown button.
    pub fn button(&self) -> InteractiveStyle {
        InteractiveStyle::new(Style::new().fg(self.text).bg(self.surface))
            .focused(Style::new().fg(self.background).bg(self.accent).bold())
            .pressed(Style::new().fg(self.accent).bg(self.surface).reverse())
    }

    /// The word input field.
    pub fn input(&self, invalid: bool) -> InteractiveStyle {
        let normal = if invalid {
            Style::new().fg(self.error).bg(self.surface).underline()
        } else {
            Style::new().fg(self.text).bg(self.surface)
        };
        InteractiveStyle::new(normal).focused(Style::new().bold())
    }

    /// Toasts, modal, and dropdown panels.
    pub const fn panel(&self) -> Style {
        Style::new().fg(self.text).bg(self.surface)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
