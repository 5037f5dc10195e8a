// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and expires them once their display
//! duration has elapsed. It is also the default [`Notifier`] behind
//! [`make_toast_dispatcher`](super::make_toast_dispatcher).

use super::notification::{Notification, NotificationId};
use super::toast::{Notifier, ToastOptions};
use crate::domain::notifications::MaxVisible;
use std::collections::VecDeque;
use std::time::Instant;

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
    /// How many notifications may be visible at once.
    max_visible: MaxVisible,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager with a custom visible limit.
    #[must_use]
    pub fn with_max_visible(max_visible: MaxVisible) -> Self {
        Self {
            max_visible,
            ..Self::default()
        }
    }

    /// Returns the visible limit.
    #[must_use]
    pub fn max_visible(&self) -> MaxVisible {
        self.max_visible
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `max_visible` notifications are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < self.max_visible.value() {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Processes a tick event, dismissing any notifications that have expired.
    ///
    /// Should be called periodically (e.g., every 100-500ms) to handle auto-dismiss.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Dismisses every visible notification whose duration has elapsed at `now`.
    ///
    /// Queued notifications are not aged; a promoted notification starts its
    /// countdown from when it was created, so a long wait can expire it on the
    /// next tick.
    pub fn tick_at(&mut self, now: Instant) {
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired_at(now))
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all notifications (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Promotes notifications from the queue to visible while there's space.
    fn promote_from_queue(&mut self) {
        while self.visible.len() < self.max_visible.value() {
            if let Some(notification) = self.queue.pop_front() {
                self.visible.push_back(notification);
            } else {
                break;
            }
        }
    }
}

impl Notifier for Manager {
    fn success(&mut self, message: &str, options: ToastOptions) {
        self.push(Notification::success(message).with_duration(options.duration));
    }

    fn error(&mut self, message: &str, options: ToastOptions) {
        self.push(Notification::error(message).with_duration(options.duration));
    }
}
