// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for reporting application errors.
//!
//! Errors are rendered into [`ErrorRecord`]s and handed to an [`ErrorSink`].
//!
//! # Architecture
//!
//! - [`log_error`] / [`get_error_logger`]: Function entry points writing to stderr
//! - [`ErrorLogger`]: Logger value bound to any sink
//! - [`ConsoleSink`], [`TracingSink`], [`RecordingSink`]: Available sinks

mod logger;
mod sinks;

pub use logger::{get_error_logger, log_error, ErrorLogFn, ErrorLogger};
pub use sinks::{ConsoleSink, ErrorRecord, ErrorSink, RecordingSink, TracingSink, ERROR_TAG};
