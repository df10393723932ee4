#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! Terminal backends translate their native events into these types so that
//! widgets and the application can be driven identically by a real terminal
//! and by the headless simulator.
//!
//! # Design Notes
//!
//! - Mouse coordinates are 0-indexed
//! - `KeyEventKind` defaults to `Press` when the terminal cannot tell
//! - `Modifiers` use bitflags for easy combination

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A mouse event.
    Mouse(MouseEvent),

    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },

    /// Pasted text (bracketed paste).
    Paste(String),

    /// Terminal focus gained (`true`) or lost (`false`).
    Focus(bool),

    /// A scheduled deadline elapsed.
    Tick,
}

impl Event {
    /// Shorthand for a plain key press.
    #[must_use]
    pub const fn key(code: KeyCode) -> Self {
        Self::Key(KeyEvent::new(code))
    }

    /// Shorthand for a left-button press at `(x, y)`.
    #[must_use]
    pub const fn click(x: u16, y: u16) -> Self {
        Self::Mouse(MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, y))
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt modifier is held.
    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Check if Shift modifier is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Press or auto-repeat; releases are ignored by every widget.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        !matches!(self.kind, KeyEventKind::Release)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Escape,
    /// Backspace key.
    Backspace,
    /// Tab key.
    Tab,
    /// Shift+Tab (back-tab).
    BackTab,
    /// Delete key.
    Delete,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Function key (F1-F24).
    F(u8),
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,
    /// Key is being held (repeat event).
    Repeat,
    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// The type of mouse event.
    pub kind: MouseEventKind,
    /// X coordinate (0-indexed, leftmost column is 0).
    pub x: u16,
    /// Y coordinate (0-indexed, topmost row is 0).
    pub y: u16,
}

impl MouseEvent {
    /// Create a new mouse event.
    #[must_use]
    pub const fn new(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }

    /// Get the position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Whether this is a left-button press.
    #[must_use]
    pub const fn is_left_press(&self) -> bool {
        matches!(self.kind, MouseEventKind::Down(MouseButton::Left))
    }
}

/// The type of mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Mouse button pressed down.
    Down(MouseButton),
    /// Mouse button released.
    Up(MouseButton),
    /// Mouse moved.
    Moved,
    /// Mouse wheel scrolled up.
    ScrollUp,
    /// Mouse wheel scrolled down.
    ScrollDown,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

#[cfg(feature = "crossterm")]
mod crossterm_compat {
    use crossterm::event as cte;

    use super::{
        Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent,
        MouseEventKind,
    };

    impl Event {
        /// Map a crossterm event. Returns `None` for events wordgrid has no
        /// use for (media keys, horizontal scroll, and the like).
        #[must_use]
        pub fn from_crossterm(event: cte::Event) -> Option<Self> {
            match event {
                cte::Event::Key(key) => map_key(key).map(Event::Key),
                cte::Event::Mouse(mouse) => map_mouse(mouse).map(Event::Mouse),
                cte::Event::Resize(width, height) => Some(Event::Resize { width, height }),
                cte::Event::Paste(text) => Some(Event::Paste(text)),
                cte::Event::FocusGained => Some(Event::Focus(true)),
                cte::Event::FocusLost => Some(Event::Focus(false)),
            }
        }
    }

    fn map_modifiers(modifiers: cte::KeyModifiers) -> Modifiers {
        let mut out = Modifiers::NONE;
        if modifiers.contains(cte::KeyModifiers::SHIFT) {
            out |= Modifiers::SHIFT;
        }
        if modifiers.contains(cte::KeyModifiers::ALT) {
            out |= Modifiers::ALT;
        }
        if modifiers.contains(cte::KeyModifiers::CONTROL) {
            out |= Modifiers::CTRL;
        }
        if modifiers.intersects(cte::KeyModifiers::SUPER | cte::KeyModifiers::META) {
            out |= Modifiers::SUPER;
        }
        out
    }

    fn map_key(key: cte::KeyEvent) -> Option<KeyEvent> {
        let code = match key.code {
            cte::KeyCode::Char(c) => KeyCode::Char(c),
            cte::KeyCode::Enter => KeyCode::Enter,
            cte::KeyCode::Esc => KeyCode::Escape,
            cte::KeyCode::Backspace => KeyCode::Backspace,
            cte::KeyCode::Tab => KeyCode::Tab,
            cte::KeyCode::BackTab => KeyCode::BackTab,
            cte::KeyCode::Delete => KeyCode::Delete,
            cte::KeyCode::Home => KeyCode::Home,
            cte::KeyCode::End => KeyCode::End,
            cte::KeyCode::Up => KeyCode::Up,
            cte::KeyCode::Down => KeyCode::Down,
            cte::KeyCode::Left => KeyCode::Left,
            cte::KeyCode::Right => KeyCode::Right,
            cte::KeyCode::F(n) => KeyCode::F(n),
            _ => return None,
        };
        let kind = match key.kind {
            cte::KeyEventKind::Press => KeyEventKind::Press,
            cte::KeyEventKind::Repeat => KeyEventKind::Repeat,
            cte::KeyEventKind::Release => KeyEventKind::Release,
        };
        Some(
            KeyEvent::new(code)
                .with_modifiers(map_modifiers(key.modifiers))
                .with_kind(kind),
        )
    }

    fn map_button(button: cte::MouseButton) -> MouseButton {
        match button {
            cte::MouseButton::Left => MouseButton::Left,
            cte::MouseButton::Right => MouseButton::Right,
            cte::MouseButton::Middle => MouseButton::Middle,
        }
    }

    fn map_mouse(mouse: cte::MouseEvent) -> Option<MouseEvent> {
        let kind = match mouse.kind {
            cte::MouseEventKind::Down(b) => MouseEventKind::Down(map_button(b)),
            cte::MouseEventKind::Up(b) => MouseEventKind::Up(map_button(b)),
            cte::MouseEventKind::Drag(_) | cte::MouseEventKind::Moved => MouseEventKind::Moved,
            cte::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
            cte::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
            _ => return None,
        };
        Some(MouseEvent::new(kind, mouse.column, mouse.row))
    }

}
