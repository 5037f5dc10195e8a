// SPDX-License-Identifier: MPL-2.0
//! Error logging entry points.
//!
//! [`log_error`] is the fire-and-forget function call sites use. Code that
//! wants to keep the sink swappable holds the function returned by
//! [`get_error_logger`], or an [`ErrorLogger`] value bound to any
//! [`ErrorSink`].

use std::fmt;
use std::sync::{Arc, LazyLock};

use super::sinks::{ConsoleSink, ErrorRecord, ErrorSink, TracingSink, ERROR_TAG};

/// Signature shared by [`log_error`] and anything that replaces it.
pub type ErrorLogFn = fn(&dyn fmt::Debug, Option<&dyn fmt::Debug>);

static CONSOLE: LazyLock<ConsoleSink<std::io::Stderr>> = LazyLock::new(ConsoleSink::stderr);

/// Writes `error` and optional `info` to stderr, tagged `[AppError]`.
///
/// Never panics and never returns an error; it is called from error paths.
///
/// ```
/// use campus_reviews::diagnostics::log_error;
///
/// log_error(&"upload failed", Some(&("review", 42)));
/// log_error(&std::io::Error::other("disk full"), None);
/// ```
pub fn log_error(error: &dyn fmt::Debug, info: Option<&dyn fmt::Debug>) {
    log_to(&*CONSOLE, error, info);
}

fn log_to(sink: &dyn ErrorSink, error: &dyn fmt::Debug, info: Option<&dyn fmt::Debug>) {
    sink.record(&ErrorRecord::new(ERROR_TAG, error, info));
}

/// Returns the current error logging function.
#[must_use]
pub fn get_error_logger() -> ErrorLogFn {
    log_error
}

/// Error logger bound to an explicit sink.
#[derive(Clone)]
pub struct ErrorLogger {
    sink: Arc<dyn ErrorSink>,
}

impl ErrorLogger {
    pub fn new(sink: Arc<dyn ErrorSink>) -> Self {
        Self { sink }
    }

    /// Logger writing to stderr, same output as [`log_error`].
    #[must_use]
    pub fn console() -> Self {
        Self::new(Arc::new(ConsoleSink::stderr()))
    }

    /// Logger emitting `tracing` error events instead of raw stderr lines.
    #[must_use]
    pub fn tracing() -> Self {
        Self::new(Arc::new(TracingSink))
    }

    /// Forwards `error` and optional `info` to the sink, tagged `[AppError]`.
    pub fn log_error(&self, error: &dyn fmt::Debug, info: Option<&dyn fmt::Debug>) {
        log_to(self.sink.as_ref(), error, info);
    }
}

impl Default for ErrorLogger {
    fn default() -> Self {
        Self::console()
    }
}

impl fmt::Debug for ErrorLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorLogger").finish_non_exhaustive()
    }
}
