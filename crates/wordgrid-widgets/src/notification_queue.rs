#![forbid(unsafe_code)]

//! Notification queue for toast notifications.
//!
//! The queue provides:
//! - Replacement by id: showing a toast whose id is visible or pending
//!   replaces that toast and restarts its lifetime, so a kind of notice is
//!   never on screen twice.
//! - A maximum visible count, with overflow waiting in FIFO order.
//! - Deadline-based expiry driven by [`NotificationQueue::tick`].
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use wordgrid_widgets::notification_queue::{NotificationQueue, QueueConfig};
//! use wordgrid_widgets::toast::{Toast, ToastId};
//!
//! let mut queue = NotificationQueue::new(QueueConfig::default());
//! queue.show(Toast::new(ToastId::INVALID_WORD, "Word not found"), Duration::ZERO);
//! assert_eq!(queue.visible_count(), 1);
//! queue.tick(Duration::from_secs(3));
//! assert!(queue.is_empty());
//! ```

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use wordgrid_core::geometry::Rect;

use crate::Widget;
use crate::frame::Frame;
use crate::toast::{Toast, ToastId};

/// Configuration for the notification queue.
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Maximum number of toasts visible at once.
    pub max_visible: usize,
    /// Maximum number of toasts waiting.
    pub max_queued: usize,
    /// Distance from the top-right corner.
    pub margin: u16,
    /// Blank rows between stacked toasts.
    pub stagger_offset: u16,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            max_visible: 3,
            max_queued: 10,
            margin: 1,
            stagger_offset: 0,
        }
    }
}

impl QueueConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self
    }

    #[must_use]
    pub fn max_queued(mut self, max: usize) -> Self {
        self.max_queued = max;
        self
    }

    #[must_use]
    pub fn margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }
}

/// Actions returned by `tick()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueAction {
    /// A pending toast became visible.
    Show(ToastId),
    /// A visible toast expired.
    Hide(ToastId),
}

/// Queue statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Toasts passed to `show`.
    pub total_pushed: u64,
    /// Toasts that replaced one with the same id.
    pub replaced: u64,
    /// Pending toasts dropped because the queue was full.
    pub overflow_count: u64,
    /// Toasts dismissed explicitly.
    pub user_dismissed: u64,
    /// Toasts that timed out.
    pub auto_expired: u64,
    /// `show` calls per id.
    pub per_id: HashMap<&'static str, u64>,
}

impl QueueStats {
    /// How many times a toast with `id` was shown.
    pub fn shown(&self, id: ToastId) -> u64 {
        self.per_id.get(id.as_str()).copied().unwrap_or(0)
    }
}

/// Notification queue manager.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Toast>,
    visible: Vec<Toast>,
    config: QueueConfig,
    stats: QueueStats,
}

impl NotificationQueue {
    pub fn new(config: QueueConfig) -> Self {
        Self {
            pending: VecDeque::new(),
            visible: Vec::new(),
            config,
            stats: QueueStats::default(),
        }
    }

    /// Show `toast` at `now`, replacing any toast with the same id.
    pub fn show(&mut self, mut toast: Toast, now: Duration) {
        self.stats.total_pushed += 1;
        *self.stats.per_id.entry(toast.id.as_str()).or_insert(0) += 1;
        tracing::debug!(id = %toast.id, severity = ?toast.severity, "toast");

        if let Some(slot) = self.visible.iter_mut().find(|t| t.id == toast.id) {
            toast.shown_at = Some(now);
            *slot = toast;
            self.stats.replaced += 1;
            return;
        }
        if let Some(slot) = self.pending.iter_mut().find(|t| t.id == toast.id) {
            *slot = toast;
            self.stats.replaced += 1;
            return;
        }
        if self.visible.len() < self.config.max_visible {
            toast.shown_at = Some(now);
            self.visible.push(toast);
            return;
        }
        if self.pending.len() >= self.config.max_queued {
            self.pending.pop_front();
            self.stats.overflow_count += 1;
        }
        self.pending.push_back(toast);
    }

    /// Remove the toast with `id`, visible or pending.
    pub fn dismiss(&mut self, id: ToastId, now: Duration) -> bool {
        let before = self.total_count();
        self.visible.retain(|t| t.id != id);
        self.pending.retain(|t| t.id != id);
        let removed = before != self.total_count();
        if removed {
            self.stats.user_dismissed += 1;
            self.promote(now, &mut Vec::new());
        }
        removed
    }

    /// Remove everything.
    pub fn dismiss_all(&mut self) {
        self.stats.user_dismissed += self.total_count() as u64;
        self.visible.clear();
        self.pending.clear();
    }

    /// Expire due toasts and promote pending ones.
    pub fn tick(&mut self, now: Duration) -> Vec<QueueAction> {
        let mut actions = Vec::new();
        let mut i = 0;
        while i < self.visible.len() {
            if self.visible[i].is_expired(now) {
                let toast = self.visible.remove(i);
                self.stats.auto_expired += 1;
                actions.push(QueueAction::Hide(toast.id));
            } else {
                i += 1;
            }
        }
        self.promote(now, &mut actions);
        actions
    }

    fn promote(&mut self, now: Duration, actions: &mut Vec<QueueAction>) {
        while self.visible.len() < self.config.max_visible {
            let Some(mut toast) = self.pending.pop_front() else {
                break;
            };
            toast.shown_at = Some(now);
            actions.push(QueueAction::Show(toast.id));
            self.visible.push(toast);
        }
    }

    /// Earliest expiry among visible toasts.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.visible.iter().filter_map(Toast::expires_at).min()
    }

    pub fn visible(&self) -> &[Toast] {
        &self.visible
    }

    /// Visible toast with `id`.
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.visible.iter().find(|t| t.id == id)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn total_count(&self) -> usize {
        self.visible.len() + self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.pending.is_empty()
    }

    pub fn stats(&self) -> &QueueStats {
        &self.stats
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Top-right stacking positions for the visible toasts.
    ///
    /// Returns `(id, x, y)` relative to the screen origin.
    pub fn calculate_positions(&self, width: u16, height: u16) -> Vec<(ToastId, u16, u16)> {
        let margin = self.config.margin;
        let mut y = margin;
        let mut positions = Vec::with_capacity(self.visible.len());
        for toast in &self.visible {
            let (w, h) = toast.calculate_dimensions();
            if y >= height {
                break;
            }
            let x = width.saturating_sub(w).saturating_sub(margin);
            positions.push((toast.id, x, y));
            y = y.saturating_add(h).saturating_add(self.config.stagger_offset);
        }
        positions
    }
}

/// Renders the visible toasts of a queue.
pub struct NotificationStack<'a> {
    queue: &'a NotificationQueue,
}

impl<'a> NotificationStack<'a> {
    pub fn new(queue: &'a NotificationQueue) -> Self {
        Self { queue }
    }
}

impl Widget for NotificationStack<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let positions = self.queue.calculate_positions(area.width, area.height);
        for (toast, (_, x, y)) in self.queue.visible().iter().zip(positions) {
            let (w, h) = toast.calculate_dimensions();
            let rect = Rect::new(area.x + x, area.y + y, w, h).intersection(&area);
            if !rect.is_empty() {
                toast.render(rect, frame);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn toast(id: &'static str, msg: &str) -> Toast {
        Toast::new(ToastId(id), msg)
    }

    #[test]
    fn show_makes_visible() {
        let mut q = NotificationQueue::default();
        q.show(toast("a", "hello"), ms(0));
        assert_eq!(q.visible_count(), 1);
        assert_eq!(q.visible()[0].shown_at, Some(ms(0)));
    }

    #[test]
    fn same_id_replaces_and_restarts() {
        let mut q = NotificationQueue::default();
        q.show(toast("a", "first"), ms(0));
        q.show(toast("a", "second"), ms(2000));
        assert_eq!(q.visible_count(), 1);
        assert_eq!(q.visible()[0].message, "second");
        assert!(q.tick(ms(3000)).is_empty());
        assert_eq!(q.tick(ms(5000)), vec![QueueAction::Hide(ToastId("a"))]);
        assert_eq!(q.stats().replaced, 1);
        assert_eq!(q.stats().shown(ToastId("a")), 2);
    }

    #[test]
    fn overflow_waits_then_promotes() {
        let mut q = NotificationQueue::default();
        for (i, id) in ["a", "b", "c", "d"].into_iter().enumerate() {
            q.show(toast(id, "m").duration(ms(1000 * (i as u64 + 1))), ms(0));
        }
        assert_eq!(q.visible_count(), 3);
        assert_eq!(q.pending_count(), 1);
        let actions = q.tick(ms(1000));
        assert_eq!(
            actions,
            vec![QueueAction::Hide(ToastId("a")), QueueAction::Show(ToastId("d"))]
        );
        assert_eq!(q.get(ToastId("d")).and_then(|t| t.shown_at), Some(ms(1000)));
    }

    #[test]
    fn pending_same_id_is_replaced() {
        let mut q = NotificationQueue::new(QueueConfig::new().max_visible(1));
        q.show(toast("a", "m"), ms(0));
        q.show(toast("b", "old"), ms(0));
        q.show(toast("b", "new"), ms(10));
        assert_eq!(q.pending_count(), 1);
        q.dismiss(ToastId("a"), ms(20));
        assert_eq!(q.visible()[0].message, "new");
    }

    #[test]
    fn full_queue_drops_oldest_pending() {
        let mut q = NotificationQueue::new(QueueConfig::new().max_visible(1).max_queued(1));
        q.show(toast("a", "m"), ms(0));
        q.show(toast("b", "m"), ms(0));
        q.show(toast("c", "m"), ms(0));
        assert_eq!(q.pending_count(), 1);
        assert_eq!(q.stats().overflow_count, 1);
    }

    #[test]
    fn next_deadline_is_earliest_expiry() {
        let mut q = NotificationQueue::default();
        q.show(toast("a", "m").duration(ms(10_000)), ms(0));
        q.show(toast("b", "m"), ms(500));
        assert_eq!(q.next_deadline(), Some(ms(3500)));
    }

    #[test]
    fn positions_stack_top_right() {
        let mut q = NotificationQueue::default();
        q.show(toast("a", "hello"), ms(0));
        q.show(toast("b", "world"), ms(0));
        let pos = q.calculate_positions(80, 24);
        let (w, h) = q.visible()[0].calculate_dimensions();
        assert_eq!(pos[0], (ToastId("a"), 80 - w - 1, 1));
        assert_eq!(pos[1].2, 1 + h);
    }

    #[test]
    fn stack_renders_message() {
        let mut q = NotificationQueue::default();
        q.show(toast("a", "hello"), ms(0));
        let mut frame = Frame::new(30, 6);
        NotificationStack::new(&q).render(frame.area(), &mut frame);
        assert!(frame.contains_text("i hello"));
    }
}
