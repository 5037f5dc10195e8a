// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! - [`MaxVisible`]: How many toasts may be on screen at once
//! - [`toast_defaults`]: Default toast display duration

mod newtypes;

pub use newtypes::{default_toast_duration, max_visible_bounds, toast_defaults, MaxVisible};
