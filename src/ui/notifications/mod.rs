// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (review saved, submission failed, etc.) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`toast`] - `ToastRequest`, the `Notifier` seam and `ToastDispatcher`
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//!
//! # Usage
//!
//! ```
//! use campus_reviews::ui::notifications::{make_toast_dispatcher, ToastRequest};
//!
//! let mut dispatcher = make_toast_dispatcher();
//! dispatcher.toast(ToastRequest::new().title("Saved").description("Review posted"));
//!
//! let shown: Vec<_> = dispatcher.notifier().visible().map(|n| n.message()).collect();
//! assert_eq!(shown, ["Saved: Review posted"]);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 3s unless the request or settings say otherwise
//! - Max visible toasts: 3 by default (others are queued)

mod manager;
mod notification;
mod toast;

pub use manager::Manager;
pub use notification::{Notification, NotificationId, Severity};
pub use toast::{make_toast_dispatcher, Notifier, ToastDispatcher, ToastOptions, ToastRequest, Variant};

