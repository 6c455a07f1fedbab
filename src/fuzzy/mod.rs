// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance and the extended query syntax.
//!
//! Everything above this module sees one capability: "score this field for
//! this query". A plain query is a single [`FuzzyPattern`]; with extended
//! search on, it's an [`ExtendedQuery`] of operator terms.

mod extended;
mod pattern;

pub use extended::{ExtendedQuery, Term, TermKind};
pub use pattern::{FuzzyPattern, PatternOptions};

/// Scores one (already folded) field value against a compiled query.
///
/// Returns `None` when the field doesn't match, otherwise a score in
/// `[0, 1]` where lower is better.
pub trait Scorer {
    fn score(&self, text: &str) -> Option<f64>;
}
