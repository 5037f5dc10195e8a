// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! This module provides pure domain types for diagnostics:
//! - [`ErrorBufferCapacity`]: How many error records a recording sink retains

mod newtypes;

pub use newtypes::{error_buffer_bounds, ErrorBufferCapacity};
