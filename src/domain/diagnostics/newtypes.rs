// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.
//!
//! This module provides type-safe wrappers for diagnostics values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Error Buffer Capacity Bounds
// =============================================================================

/// Error buffer capacity bounds (10 to 10000 records).
pub mod error_buffer_bounds {
    /// Minimum number of retained error records.
    pub const MIN: usize = 10;
    /// Maximum number of retained error records.
    pub const MAX: usize = 10_000;
    /// Default number of retained error records.
    pub const DEFAULT: usize = 1000;
}

// =============================================================================
// ErrorBufferCapacity
// =============================================================================

/// Number of error records a recording sink keeps before evicting the oldest.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (10–10000 records).
///
/// # Example
///
/// ```
/// use campus_reviews::domain::diagnostics::ErrorBufferCapacity;
///
/// let capacity = ErrorBufferCapacity::new(250);
/// assert_eq!(capacity.value(), 250);
///
/// // Values outside range are clamped
/// assert_eq!(ErrorBufferCapacity::new(50_000).value(), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorBufferCapacity(usize);

impl ErrorBufferCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(error_buffer_bounds::MIN, error_buffer_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= error_buffer_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= error_buffer_bounds::MAX
    }
}

impl Default for ErrorBufferCapacity {
    fn default() -> Self {
        Self(error_buffer_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
