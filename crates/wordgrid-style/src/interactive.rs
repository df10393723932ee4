//! Interactive style variants for stateful controls.
//!
//! [`InteractiveStyle`] holds style overrides for the interaction states a
//! terminal control can be in: normal, focused, pressed, and disabled. When
//! resolving, the variant for the current state is merged on top of the
//! base style using [`Style::patch`].
//!
//! # Example
//!
//! ```
//! use wordgrid_style::{Color, Style};
//! use wordgrid_style::interactive::{InteractiveStyle, InteractionState};
//!
//! let interactive = InteractiveStyle::new(Style::new().fg(Color::WHITE))
//!     .focused(Style::new().underline())
//!     .disabled(Style::new().fg(Color::rgb(64, 64, 64)));
//!
//! let current = interactive.resolve(InteractionState::from_flags(true, false, false));
//! assert_eq!(current.fg, Some(Color::WHITE));
//! ```

#![forbid(unsafe_code)]

use crate::style::Style;

/// The interaction state of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// No focus, enabled.
    #[default]
    Normal,
    /// Has keyboard focus.
    Focused,
    /// Pressed or open (a dropdown button while its list is shown).
    Pressed,
    /// Rejects interaction.
    Disabled,
    /// Has keyboard focus but rejects interaction.
    FocusedDisabled,
}

impl InteractionState {
    /// Combine independent flags into a state. Disabled wins over pressed.
    #[must_use]
    pub const fn from_flags(focused: bool, pressed: bool, disabled: bool) -> Self {
        match (focused, pressed, disabled) {
            (true, _, true) => Self::FocusedDisabled,
            (false, _, true) => Self::Disabled,
            (_, true, false) => Self::Pressed,
            (true, false, false) => Self::Focused,
            (false, false, false) => Self::Normal,
        }
    }

    /// Whether the state includes keyboard focus.
    pub const fn is_focused(self) -> bool {
        matches!(self, Self::Focused | Self::FocusedDisabled)
    }

    /// Whether the state rejects interaction.
    pub const fn is_disabled(self) -> bool {
        matches!(self, Self::Disabled | Self::FocusedDisabled)
    }
}

/// Style variants for different interaction states.
///
/// Each variant is an optional [`Style`] overlay patched on top of `normal`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractiveStyle {
    /// Base style applied in all states.
    pub normal: Style,
    /// Override applied when focused.
    pub focus: Option<Style>,
    /// Override applied when pressed.
    pub pressed: Option<Style>,
    /// Override applied when disabled.
    pub disabled: Option<Style>,
}

impl InteractiveStyle {
    /// Create an interactive style with the given base style.
    pub fn new(normal: Style) -> Self {
        Self {
            normal,
            focus: None,
            pressed: None,
            disabled: None,
        }
    }

    /// Set the focus style override.
    #[must_use]
    pub fn focused(mut self, style: Style) -> Self {
        self.focus = Some(style);
        self
    }

    /// Set the pressed style override.
    #[must_use]
    pub fn pressed(mut self, style: Style) -> Self {
        self.pressed = Some(style);
        self
    }

    /// Set the disabled style override.
    #[must_use]
    pub fn disabled(mut self, style: Style) -> Self {
        self.disabled = Some(style);
        self
    }

    /// Resolve the style for the given interaction state.
    ///
    /// For `FocusedDisabled` the disabled overlay is applied first and the
    /// focus overlay last, so the focus cursor stays visible on a disabled
    /// control.
    pub fn resolve(&self, state: InteractionState) -> Style {
        let base = self.normal;
        let overlay = |style: Style, layer: &Option<Style>| match layer {
            Some(l) => style.patch(l),
            None => style,
        };
        match state {
            InteractionState::Normal => base,
            InteractionState::Focused => overlay(base, &self.focus),
            InteractionState::Pressed => overlay(base, &self.pressed),
            InteractionState::Disabled => overlay(base, &self.disabled),
            InteractionState::FocusedDisabled => {
                overlay(overlay(base, &self.disabled), &self.focus)
            }
        }
    }
}

impl From<Style> for InteractiveStyle {
    fn from(style: Style) -> Self {
        Self::new(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    const WHITE: Color = Color::WHITE;
    const BLACK: Color = Color::BLACK;
    const BLUE: Color = Color::rgb(0, 0, 255);
    const RED: Color = Color::rgb(255, 0, 0);
    const DARK_GRAY: Color = Color::rgb(64, 64, 64);

    #[test]
    fn normal_returns_base_style() {
        let style = InteractiveStyle::new(Style::new().fg(WHITE));
        assert_eq!(style.resolve(InteractionState::Normal).fg, Some(WHITE));
    }

    #[test]
    fn focus_patches_over_base() {
        let style =
            InteractiveStyle::new(Style::new().fg(WHITE).bg(BLACK)).focused(Style::new().fg(BLUE));
        let resolved = style.resolve(InteractionState::Focused);
        assert_eq!(resolved.fg, Some(BLUE));
        assert_eq!(resolved.bg, Some(BLACK)); // inherited from base
    }

    #[test]
    fn missing_override_returns_base() {
        let style = InteractiveStyle::new(Style::new().fg(WHITE));
        assert_eq!(style.resolve(InteractionState::Pressed).fg, Some(WHITE));
        assert_eq!(style.resolve(InteractionState::Disabled).fg, Some(WHITE));
    }

    #[test]
    fn focused_disabled_applies_focus_last() {
        let style = InteractiveStyle::new(Style::new().fg(WHITE))
            .disabled(Style::new().fg(DARK_GRAY).bg(BLACK))
            .focused(Style::new().fg(RED));
        let resolved = style.resolve(InteractionState::FocusedDisabled);
        assert_eq!(resolved.fg, Some(RED));
        assert_eq!(resolved.bg, Some(BLACK));
    }

    #[test]
    fn from_flags_precedence() {
        use InteractionState::*;
        assert_eq!(InteractionState::from_flags(false, false, false), Normal);
        assert_eq!(InteractionState::from_flags(true, false, false), Focused);
        assert_eq!(InteractionState::from_flags(true, true, false), Pressed);
        assert_eq!(InteractionState::from_flags(false, true, true), Disabled);
        assert_eq!(InteractionState::from_flags(true, false, true), FocusedDisabled);
        assert!(FocusedDisabled.is_focused());
        assert!(FocusedDisabled.is_disabled());
        assert!(!Pressed.is_disabled());
    }

    #[test]
    fn from_style_creates_normal_only() {
        let style: InteractiveStyle = Style::new().fg(WHITE).into();
        assert_eq!(style.normal.fg, Some(WHITE));
        assert!(style.focus.is_none());
        assert!(style.disabled.is_none());
    }
}
