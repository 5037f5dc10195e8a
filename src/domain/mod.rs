// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and bounds.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`ErrorBufferCapacity`](diagnostics::ErrorBufferCapacity))
//! - [`notifications`]: Toast limits ([`MaxVisible`](notifications::MaxVisible))
//! - [`review`]: Rating and text bounds for review submissions

pub mod diagnostics;
pub mod notifications;
pub mod review;
