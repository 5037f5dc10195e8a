// SPDX-License-Identifier: MPL-2.0
//! User-facing feedback components.

pub mod notifications;
