#![forbid(unsafe_code)]

//! Style types for wordgrid with cascading (patch) semantics.
//!
//! # Role in wordgrid
//! `wordgrid-style` is the shared vocabulary for colors and styling. Widgets
//! use these types to stay visually consistent without depending on the
//! terminal backend.
//!
//! # This crate provides
//! - [`Style`] and [`StyleFlags`] for cell styling.
//! - [`InteractiveStyle`] for per-state overrides (focused, pressed, disabled).
//! - [`Theme`] and [`ThemeMode`] for the light and dark palettes.
//!
//! # How it fits in the system
//! `wordgrid-widgets` resolves styles into frame cells and
//! `wordgrid-runtime` translates them into terminal attributes.

/// 24-bit colors.
pub mod color;
/// Interactive style variants for stateful controls.
pub mod interactive;
/// Style types with patch semantics.
pub mod style;
/// Light/dark theme palettes.
pub mod theme;

pub use color::Color;
pub use interactive::{InteractionState, InteractiveStyle};
pub use style::{Style, StyleFlags};
pub use theme::{Theme, ThemeMode, UnknownThemeMode};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_modes_resolve_distinct_palettes() {
        assert_ne!(Theme::for_mode(ThemeMode::Dark), Theme::for_mode(ThemeMode::Light));
        assert_eq!(Theme::default().mode, ThemeMode::Dark);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn theme_mode_serde_is_lowercase() {
        let json = serde_json::to_string(&ThemeMode::Light).unwrap();
        assert_eq!(json, "\"light\"");
        let back: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(back, ThemeMode::Dark);
    }
}
