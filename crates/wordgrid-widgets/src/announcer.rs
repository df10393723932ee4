#![forbid(unsafe_code)]

//! Live-region announcements for assistive technology.
//!
//! Every state-affecting action produces one [`Announcement`]. The text
//! stays up until [`Announcer::tick`] passes the clear deadline, which is
//! re-armed on each announcement so only the last one is ever cleared.

use std::time::Duration;

use wordgrid_core::geometry::Rect;
use wordgrid_core::{DisplayState, Timer};
use wordgrid_style::Theme;

use crate::Widget;
use crate::frame::Frame;

/// Default lifetime of an announcement.
pub const DEFAULT_CLEAR_DELAY: Duration = Duration::from_millis(1000);

/// What happened, before localization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    /// A word is selected.
    Selected { word: String, index: u16 },
    /// The pattern is empty.
    Empty,
    /// The pattern exceeds the list.
    OutOfRange { value: u16 },
}

impl Announcement {
    /// The announcement matching a display state.
    pub fn for_display(display: &DisplayState) -> Self {
        match display {
            DisplayState::Empty => Self::Empty,
            DisplayState::OutOfRange { value } => Self::OutOfRange { value: *value },
            DisplayState::Valid { word, value } => Self::Selected {
                word: word.clone(),
                index: *value,
            },
        }
    }
}

/// Holds the current announcement text.
#[derive(Debug, Clone)]
pub struct Announcer {
    message: Option<String>,
    last: Option<Announcement>,
    clear_timer: Timer,
    clear_delay: Duration,
    count: u64,
    theme: Theme,
}

impl Default for Announcer {
    fn default() -> Self {
        Self::new(DEFAULT_CLEAR_DELAY)
    }
}

impl Announcer {
    pub fn new(clear_delay: Duration) -> Self {
        Self {
            message: None,
            last: None,
            clear_timer: Timer::new(),
            clear_delay,
            count: 0,
            theme: Theme::default(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Publish `text` for `announcement` and re-arm the clear timer.
    pub fn announce(&mut self, announcement: Announcement, text: String, now: Duration) {
        tracing::debug!(message = %text, "announce");
        self.message = Some(text);
        self.last = Some(announcement);
        self.clear_timer.schedule(now, self.clear_delay);
        self.count += 1;
    }

    /// Current text, if not yet cleared.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Most recent announcement, kept after the text clears.
    pub fn last(&self) -> Option<&Announcement> {
        self.last.as_ref()
    }

    /// Number of announcements made.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Clear the text once due. Returns `true` if it was cleared.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.clear_timer.fire(now) {
            self.message = None;
            return true;
        }
        false
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.clear_timer.deadline()
    }
}

impl Widget for Announcer {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if let Some(text) = &self.message {
            frame.put_line(area, text, self.theme.muted_text().italic());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn maps_display_states() {
        assert_eq!(Announcement::for_display(&DisplayState::Empty), Announcement::Empty);
        assert_eq!(
            Announcement::for_display(&DisplayState::OutOfRange { value: 3000 }),
            Announcement::OutOfRange { value: 3000 }
        );
        assert_eq!(
            Announcement::for_display(&DisplayState::Valid {
                word: "zoo".into(),
                value: 2048
            }),
            Announcement::Selected {
                word: "zoo".into(),
                index: 2048
            }
        );
    }

    #[test]
    fn clears_after_delay() {
        let mut a = Announcer::default();
        a.announce(Announcement::Empty, "No pattern selected".into(), ms(0));
        assert!(!a.tick(ms(999)));
        assert_eq!(a.message(), Some("No pattern selected"));
        assert!(a.tick(ms(1000)));
        assert_eq!(a.message(), None);
        assert_eq!(a.last(), Some(&Announcement::Empty));
    }

    #[test]
    fn only_last_announcement_is_cleared() {
        let mut a = Announcer::default();
        a.announce(Announcement::Empty, "first".into(), ms(0));
        a.announce(Announcement::Empty, "second".into(), ms(800));
        assert!(!a.tick(ms(1000)));
        assert_eq!(a.message(), Some("second"));
        assert!(a.tick(ms(1800)));
        assert_eq!(a.count(), 2);
    }
}
