#![forbid(unsafe_code)]

//! Widgets for the wordgrid selector.
//!
//! # Role in wordgrid
//! `wordgrid-widgets` turns the core state into something a person can see
//! and touch. Every view here either renders a [`StateSnapshot`] or turns an
//! input event into a mutation of the [`BitState`](wordgrid_core::BitState)
//! it is handed. No view holds a reference to another view.
//!
//! # This crate provides
//! - [`Frame`], the cell buffer widgets render into.
//! - [`GridView`] and [`WordInputView`], the two ways to edit the pattern.
//! - [`Readout`] and [`Announcer`], the derived text outputs.
//! - [`NotificationQueue`] and [`BlockedNudge`] for user-facing notices.
//! - [`LanguagePicker`], [`Modal`], and [`Button`] for the chrome.
//!
//! # How it fits in the system
//! The application's sync controller builds one [`StateSnapshot`] per
//! mutation and hands it to every [`StateListener`]. The runtime presents
//! the resulting [`Frame`] to the terminal.

pub mod announcer;
pub mod button;
pub mod frame;
pub mod grid;
pub mod language_picker;
pub mod modal;
pub mod notification_queue;
pub mod nudge;
pub mod readout;
pub mod snapshot;
pub mod text_field;
pub mod toast;
pub mod word_input;

pub use announcer::{Announcement, Announcer};
pub use button::Button;
pub use frame::{Cell, Frame};
pub use grid::{GridAction, GridView};
pub use language_picker::{LanguagePicker, PickerAction};
pub use modal::{Modal, ModalAction};
pub use notification_queue::{
    NotificationQueue, NotificationStack, QueueAction, QueueConfig, QueueStats,
};
pub use nudge::BlockedNudge;
pub use readout::{Readout, ReadoutLabels};
pub use snapshot::{StateListener, StateSnapshot};
pub use text_field::TextField;
pub use toast::{Toast, ToastId, ToastSeverity};
pub use word_input::{InputAction, Validation, WordInputView};

use wordgrid_core::geometry::Rect;

/// A widget that can be rendered to a frame.
pub trait Widget {
    /// Render the widget into `area` of the frame.
    fn render(&self, area: Rect, frame: &mut Frame);
}
