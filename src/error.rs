// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for configuration and index loading.
//!
//! Two things can go wrong, and they fail differently:
//!
//! | Error            | When                         | Consequence                        |
//! |------------------|------------------------------|------------------------------------|
//! | `ConfigError`    | parsing the page's literal   | fatal at startup                   |
//! | `IndexLoadError` | fetching `search.json`       | logged, search stays disabled      |
//!
//! "No results" is not an error. It's the `Empty` panel state.

use thiserror::Error;

/// The configuration literal is malformed.
///
/// There is no sensible fallback matching behavior, so these surface at
/// construction and stop the search box from initializing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("configuration is not valid JSON: {0}")]
    Json(String),

    #[error("invalid value for `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("unknown search key `{0}`")]
    UnknownKey(String),

    #[error("`keys` must name at least one field")]
    NoKeys,

    #[error("key `{key}` has non-positive weight {weight}")]
    InvalidWeight { key: String, weight: f64 },

    #[error("threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),

    #[error("limit must be a positive integer")]
    ZeroLimit,
}

/// The document index could not be loaded.
///
/// Either the whole corpus arrives or none of it does; there is no partial
/// index.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexLoadError {
    /// The request never produced a response (missing file, network error).
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("fetching {url} returned {status} {status_text}")]
    Status {
        url: String,
        status: u16,
        status_text: String,
    },

    /// The body is not an array of `{title, text, href}` objects.
    #[error("index at {url} is malformed: {reason}")]
    Parse { url: String, reason: String },
}
