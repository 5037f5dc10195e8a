// SPDX-License-Identifier: MPL-2.0
//! `campus_reviews` holds the client-side support code of the campus reviews
//! app: toast dispatch, error logging and validation of review submissions.
//!
//! The three pieces are independent of each other:
//!
//! - [`ui::notifications`]: Turns toast requests into notifications
//! - [`diagnostics`]: Tagged error logging with swappable sinks
//! - [`review`]: The review submission schema

#![doc(html_root_url = "https://docs.rs/campus_reviews/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod logging;
pub mod review;
pub mod ui;
