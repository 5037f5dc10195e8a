// SPDX-License-Identifier: MPL-2.0
//! Review domain types.
//!
//! Bounds for review submissions, shared by the validation schema and
//! anything that needs to describe the limits to a user.

// =============================================================================
// Rating Bounds
// =============================================================================

/// Star rating bounds, inclusive (1 to 5).
pub mod rating_bounds {
    /// Lowest accepted rating.
    pub const MIN: f64 = 1.0;
    /// Highest accepted rating.
    pub const MAX: f64 = 5.0;
}

// =============================================================================
// Text Bounds
// =============================================================================

/// Review title length bounds, in characters.
pub mod title_bounds {
    /// Minimum title length.
    pub const MIN_CHARS: u64 = 2;
    /// Maximum title length.
    pub const MAX_CHARS: u64 = 100;
}

/// Review body length bounds, in characters.
pub mod content_bounds {
    /// Minimum content length.
    pub const MIN_CHARS: u64 = 10;
    /// Maximum content length.
    pub const MAX_CHARS: u64 = 2000;
}

/// Counts characters (Unicode scalar values), the unit all text bounds use.
#[must_use]
pub fn char_len(text: &str) -> u64 {
    text.chars().count() as u64
}

const _: () = {
    assert!(title_bounds::MIN_CHARS < title_bounds::MAX_CHARS);
    assert!(content_bounds::MIN_CHARS < content_bounds::MAX_CHARS);
};
