// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toasts**: Display duration and visible stack size
//! - **Logging**: Log filter level

use crate::domain::notifications::{max_visible_bounds, toast_defaults};

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default toast display duration (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = toast_defaults::DURATION_MS;

/// Default number of toasts visible at once.
pub const DEFAULT_MAX_VISIBLE_TOASTS: usize = max_visible_bounds::DEFAULT;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default tracing filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TOAST_DURATION_MS > 0);

    assert!(DEFAULT_MAX_VISIBLE_TOASTS >= max_visible_bounds::MIN);
    assert!(DEFAULT_MAX_VISIBLE_TOASTS <= max_visible_bounds::MAX);
};
