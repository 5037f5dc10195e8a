// SPDX-License-Identifier: MPL-2.0
//! Shared setup for integration tests.
//!
//! Call [`setup`] at the top of every test that touches configuration. It
//! runs once per test binary and redirects the settings store to a private
//! temporary directory, so tests never read or write the real user settings.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use campus_reviews::config::CONFIG_DIR_ENV;
use tempfile::TempDir;

static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();

/// Points the settings store at a temp directory. Idempotent.
pub fn setup() -> &'static Path {
    CONFIG_DIR
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("failed to create temp config dir");
            std::env::set_var(CONFIG_DIR_ENV, dir.path());
            std::env::remove_var("RUST_LOG");
            dir
        })
        .path()
}

/// Path of the settings file inside the redirected store.
pub fn settings_path() -> PathBuf {
    setup().join("settings.toml")
}

/// A review payload that passes every rule.
pub const VALID_REVIEW_JSON: &str = r#"{
    "rating": 5,
    "title": "Great dorm",
    "content": "This place is wonderful and spacious."
}"#;
