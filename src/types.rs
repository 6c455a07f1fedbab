// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through the search pipeline.
//!
//! A `Document` is one entry of `search.json`, written by the site generator
//! and never touched again. A `MatchResult` pairs a document with the score the
//! matcher gave it. Scores follow the "distance" convention: `0.0` is a perfect
//! match, `1.0` is no match at all, so sorting ascending puts the best first.
//!
//! # Invariants
//!
//! - **Corpus**: loaded once per page session, read-only afterwards.
//! - **MatchResult**: `ref_index < corpus.len()` and
//!   `corpus[ref_index] == item`.

use serde::{Deserialize, Serialize};

/// One searchable entry of the document index.
///
/// The generator emits a few more fields per entry (`objectID`, `section`);
/// serde drops anything that isn't listed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Breadcrumb-style title, e.g. `"User guide > Install"`.
    pub title: String,
    /// Plain text of the section body.
    pub text: String,
    /// Link target, relative to the site root (`"guide.html#install"`).
    pub href: String,
}

impl Document {
    /// Look up a searchable field by name.
    ///
    /// Returns `None` for names that aren't document fields.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "text" => Some(&self.text),
            "href" => Some(&self.href),
            _ => None,
        }
    }
}

/// Names accepted by [`Document::field`].
pub const DOCUMENT_FIELDS: &[&str] = &["title", "text", "href"];

/// A document that scored within the configured threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub item: Document,
    /// Combined score over all matching keys (lower is better).
    pub score: f64,
    /// Position of `item` in the corpus. Used as the final tiebreaker.
    pub ref_index: usize,
}
