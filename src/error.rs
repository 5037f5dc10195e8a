// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

use crate::review::ReviewViolations;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The review payload was not well-formed JSON or had the wrong shape.
    #[error("JSON Error: {0}")]
    Json(String),

    /// The review payload parsed but broke one or more field rules.
    #[error("Invalid review: {0}")]
    InvalidReview(ReviewViolations),

    /// Bad command-line arguments.
    #[error("Usage Error: {0}")]
    Usage(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Usage(err.to_string())
    }
}

impl From<ReviewViolations> for Error {
    fn from(violations: ReviewViolations) -> Self {
        Error::InvalidReview(violations)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
