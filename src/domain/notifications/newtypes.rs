// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.

use std::time::Duration;

// =============================================================================
// Toast Defaults
// =============================================================================

/// Defaults applied to toast requests that leave fields unset.
pub mod toast_defaults {
    /// Display duration in milliseconds when a request does not specify one.
    pub const DURATION_MS: u64 = 3000;
}

/// Returns the default toast display duration.
#[must_use]
pub fn default_toast_duration() -> Duration {
    Duration::from_millis(toast_defaults::DURATION_MS)
}

// =============================================================================
// Max Visible Bounds
// =============================================================================

/// Visible toast count bounds (1 to 10).
pub mod max_visible_bounds {
    /// Minimum number of simultaneously visible toasts.
    pub const MIN: usize = 1;
    /// Maximum number of simultaneously visible toasts.
    pub const MAX: usize = 10;
    /// Default number of simultaneously visible toasts.
    pub const DEFAULT: usize = 3;
}

// =============================================================================
// MaxVisible
// =============================================================================

/// Maximum number of toasts shown at once; the rest wait in a queue.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxVisible(usize);

impl MaxVisible {
    /// Creates a new limit, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(max_visible_bounds::MIN, max_visible_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self(max_visible_bounds::DEFAULT)
    }
}
