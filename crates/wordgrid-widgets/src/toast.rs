#![forbid(unsafe_code)]

//! Toast notifications.
//!
//! A toast is a short bordered message with a stable [`ToastId`]. The id
//! names the kind of notice, not the instance: showing a toast whose id is
//! already on screen replaces it and restarts its clock. Lifetime handling
//! lives in [`NotificationQueue`](crate::notification_queue::NotificationQueue).

use std::fmt;
use std::time::Duration;

use wordgrid_core::geometry::Rect;
use wordgrid_style::{Style, Theme};

use crate::Widget;
use crate::frame::{Frame, text_width, wrap_text};

/// Widest a toast gets, border included.
pub const MAX_TOAST_WIDTH: u16 = 44;

/// Stable identifier of a kind of toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub &'static str);

impl ToastId {
    /// Repeated clicks on a disabled box.
    pub const DISABLED_BOX: ToastId = ToastId("disabled-box");
    /// A typed word that is not in the list.
    pub const INVALID_WORD: ToastId = ToastId("invalid-word");
    /// A wordlist that failed to load.
    pub const WORDLIST_ERROR: ToastId = ToastId("wordlist-error");

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// How loud a toast is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastSeverity {
    #[default]
    Info,
    Warning,
    Error,
}

impl ToastSeverity {
    fn marker(self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

/// One toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: ToastSeverity,
    /// Display lifetime, counted from `shown_at`.
    pub duration: Duration,
    /// When the toast became visible; `None` while queued.
    pub shown_at: Option<Duration>,
    theme: Theme,
}

impl Toast {
    /// An info toast with a 3 second lifetime.
    pub fn new(id: ToastId, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
            severity: ToastSeverity::Info,
            duration: Duration::from_millis(3000),
            shown_at: None,
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub fn severity(mut self, severity: ToastSeverity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// When the toast disappears, if it is showing.
    pub fn expires_at(&self) -> Option<Duration> {
        self.shown_at.map(|t| t.saturating_add(self.duration))
    }

    /// Whether the toast has outlived its duration.
    pub fn is_expired(&self, now: Duration) -> bool {
        self.expires_at().is_some_and(|t| now >= t)
    }

    fn body_width(&self) -> usize {
        usize::from(MAX_TOAST_WIDTH - 4)
    }

    fn lines(&self) -> Vec<String> {
        let text = format!("{} {}", self.severity.marker(), self.message);
        wrap_text(&text, self.body_width())
    }

    /// `(width, height)` of the toast including its border.
    pub fn calculate_dimensions(&self) -> (u16, u16) {
        let lines = self.lines();
        let inner = lines.iter().map(|l| text_width(l)).max().unwrap_or(0);
        let width = (inner + 4).min(usize::from(MAX_TOAST_WIDTH)) as u16;
        let height = (lines.len() + 2).min(usize::from(u16::MAX)) as u16;
        (width, height)
    }

    fn accent(&self) -> Style {
        let color = match self.severity {
            ToastSeverity::Info => self.theme.info,
            ToastSeverity::Warning => self.theme.warning,
            ToastSeverity::Error => self.theme.error,
        };
        self.theme.panel().fg(color)
    }
}

impl Widget for Toast {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.width < 3 || area.height < 3 {
            return;
        }
        frame.fill(area, self.theme.panel());
        frame.border(area, self.accent());
        let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);
        for (dy, line) in self.lines().iter().enumerate().take(usize::from(inner.height)) {
            let row = inner.row(dy as u16);
            let end = frame.put_line(row, line, self.theme.panel());
            if dy == 0 {
                // Recolor the severity marker.
                frame.put_str(
                    row.x,
                    row.y,
                    self.severity.marker(),
                    self.accent().bold(),
                    end.min(row.x + 1),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable_strings() {
        assert_eq!(ToastId::DISABLED_BOX.as_str(), "disabled-box");
        assert_eq!(ToastId::INVALID_WORD.to_string(), "invalid-word");
        assert_eq!(ToastId::WORDLIST_ERROR.as_str(), "wordlist-error");
    }

    #[test]
    fn expiry_counts_from_shown_at() {
        let mut toast = Toast::new(ToastId::INVALID_WORD, "nope");
        assert!(!toast.is_expired(Duration::from_secs(100)));
        toast.shown_at = Some(Duration::from_millis(500));
        assert!(!toast.is_expired(Duration::from_millis(3499)));
        assert!(toast.is_expired(Duration::from_millis(3500)));
    }

    #[test]
    fn dimensions_fit_message() {
        let toast = Toast::new(ToastId::INVALID_WORD, "Word not found");
        assert_eq!(toast.calculate_dimensions(), (20, 3));
    }

    #[test]
    fn long_messages_wrap() {
        let toast = Toast::new(
            ToastId::DISABLED_BOX,
            "The 2048 box cannot be combined with other boxes. Deselect it first.",
        );
        let (w, h) = toast.calculate_dimensions();
        assert!(w <= MAX_TOAST_WIDTH);
        assert_eq!(h, 4);
    }

    #[test]
    fn render_draws_border_and_text() {
        let toast =
            Toast::new(ToastId::INVALID_WORD, "Word not found").severity(ToastSeverity::Warning);
        let (w, h) = toast.calculate_dimensions();
        let mut frame = Frame::new(w, h);
        toast.render(frame.area(), &mut frame);
        assert!(frame.row_text(0).starts_with('┌'));
        assert_eq!(frame.row_text(1), "│ ! Word not found │");
    }
}
