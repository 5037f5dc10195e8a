// SPDX-License-Identifier: MPL-2.0
//! Destinations for logged errors.
//!
//! Every sink receives an already-rendered [`ErrorRecord`], so sinks never
//! deal with arbitrary error types and never need to fail.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::diagnostics::ErrorBufferCapacity;

/// Marker prefixed to every logged error.
pub const ERROR_TAG: &str = "[AppError]";

/// One logged error, rendered with `Debug`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRecord {
    pub tag: String,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    pub logged_at: DateTime<Utc>,
}

impl ErrorRecord {
    /// Renders `error` and `info` into a record stamped with the current time.
    pub fn new(tag: &str, error: &dyn fmt::Debug, info: Option<&dyn fmt::Debug>) -> Self {
        Self {
            tag: tag.to_string(),
            error: render(error),
            info: info.map(render),
            logged_at: Utc::now(),
        }
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tag, self.error)?;
        if let Some(info) = &self.info {
            write!(f, " {info}")?;
        }
        Ok(())
    }
}

/// Formats with `Debug`, keeping whatever was written if the impl errors out.
fn render(value: &dyn fmt::Debug) -> String {
    let mut out = String::new();
    let _ = write!(out, "{value:?}");
    out
}

/// Receives logged errors.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorSink: Send + Sync {
    /// Stores or emits one record. Must not panic.
    fn record(&self, record: &ErrorRecord);
}

// =============================================================================
// ConsoleSink
// =============================================================================

/// Writes one line per record to a writer (stderr by default).
#[derive(Debug)]
pub struct ConsoleSink<W> {
    out: Mutex<W>,
}

impl ConsoleSink<io::Stderr> {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> ErrorSink for ConsoleSink<W> {
    fn record(&self, record: &ErrorRecord) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        // Nowhere left to report a failed write.
        let _ = writeln!(out, "{record}");
        let _ = out.flush();
    }
}

// =============================================================================
// TracingSink
// =============================================================================

/// Forwards records to `tracing` at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn record(&self, record: &ErrorRecord) {
        tracing::error!(
            tag = %record.tag,
            error = %record.error,
            info = record.info.as_deref(),
            "application error"
        );
    }
}

// =============================================================================
// RecordingSink
// =============================================================================

/// Keeps the most recent records in memory, evicting the oldest when full.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<VecDeque<ErrorRecord>>,
    capacity: ErrorBufferCapacity,
}

impl RecordingSink {
    #[must_use]
    pub fn new(capacity: ErrorBufferCapacity) -> Self {
        Self {
            records: Mutex::new(VecDeque::with_capacity(capacity.value())),
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> ErrorBufferCapacity {
        self.capacity
    }

    /// Returns a snapshot of the stored records, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<ErrorRecord> {
        self.records
            .lock()
            .map(|records| records.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}

impl ErrorSink for RecordingSink {
    fn record(&self, record: &ErrorRecord) {
        let Ok(mut records) = self.records.lock() else {
            return;
        };
        if records.len() >= self.capacity.value() {
            records.pop_front();
        }
        records.push_back(record.clone());
    }
}
