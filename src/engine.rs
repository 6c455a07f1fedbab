// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The match engine: a configured scorer over a fixed corpus.
//!
//! Construction folds every searchable field once and records its length
//! norm, so a query only pays for scoring. The corpus is never mutated;
//! `search` can be called any number of times.
//!
//! # Record score
//!
//! Each key that matches contributes `score ^ (weight * norm)` and the
//! contributions multiply:
//!
//! ```text
//! record = Π max(score_k, ε) ^ (weight_k * norm_k)
//! norm_k = 1 / sqrt(words in field k)      (1.0 with ignoreFieldNorm)
//! ```
//!
//! Matching in several keys beats matching in one, and a hit in a short
//! field beats the same hit buried in a long one. Keys that don't match are
//! left out of the product; a record with no matching key is dropped.
//!
//! # Ordering
//!
//! With `shouldSort`, results are ranked by score (ascending) with corpus
//! position as the tiebreaker. Without it, results come back in corpus order
//! and scanning stops as soon as `limit` matches are found.

use crate::config::SearchConfig;
use crate::error::ConfigError;
use crate::fuzzy::{ExtendedQuery, FuzzyPattern, PatternOptions, Scorer};
use crate::types::{Document, MatchResult};
use crate::utils::{word_count, Folding};
use std::cmp::Ordering;

/// One searchable field of one document, folded at construction.
#[derive(Debug, Clone)]
struct IndexedField {
    key: usize,
    value: String,
    norm: f64,
}

/// Configured matcher over an immutable corpus.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    corpus: Vec<Document>,
    fields: Vec<Vec<IndexedField>>,
    /// Key weights, normalized to sum to 1.
    weights: Vec<f64>,
    folding: Folding,
    options: PatternOptions,
    should_sort: bool,
    extended: bool,
}

impl MatchEngine {
    /// Build an engine over `corpus`.
    ///
    /// Fails only when the configuration is malformed.
    pub fn new(corpus: Vec<Document>, config: &SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(corpus, config))
    }

    /// Build from a configuration that has already passed `validate`.
    pub(crate) fn build(corpus: Vec<Document>, config: &SearchConfig) -> Self {
        let keys = config.normalized_keys();
        let folding = Folding {
            case_sensitive: config.is_case_sensitive,
            strip_diacritics: config.ignore_diacritics,
        };

        let fields = corpus
            .iter()
            .map(|doc| {
                keys.iter()
                    .enumerate()
                    .filter_map(|(key, (name, _))| {
                        let raw = doc.field(name)?;
                        let value = folding.apply(raw);
                        let norm = if config.ignore_field_norm {
                            1.0
                        } else {
                            field_norm(&value)
                        };
                        Some(IndexedField { key, value, norm })
                    })
                    .collect()
            })
            .collect();

        Self {
            corpus,
            fields,
            weights: keys.into_iter().map(|(_, w)| w).collect(),
            folding,
            options: PatternOptions {
                threshold: config.threshold,
                ignore_location: config.ignore_location,
                location: config.location,
                distance: config.distance,
                min_match_char_length: config.min_match_char_length,
            },
            should_sort: config.should_sort,
            extended: config.use_extended_search,
        }
    }

    pub fn corpus(&self) -> &[Document] {
        &self.corpus
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Ranked matches for `query`, at most `limit` of them.
    pub fn search(&self, query: &str, limit: usize) -> Vec<MatchResult> {
        let folded = self.folding.apply(query);
        let scorer = self.compile(&folded);

        let matches = self
            .fields
            .iter()
            .enumerate()
            .filter_map(|(ref_index, fields)| {
                let score = self.score_record(scorer.as_ref(), fields)?;
                Some(MatchResult {
                    item: self.corpus[ref_index].clone(),
                    score,
                    ref_index,
                })
            });

        let results: Vec<MatchResult> = if self.should_sort {
            let mut all: Vec<MatchResult> = matches.collect();
            all.sort_by(compare_matches);
            all.truncate(limit);
            all
        } else {
            matches.take(limit).collect()
        };

        tracing::debug!(query, hits = results.len(), limit, "search");
        results
    }

    fn compile(&self, query: &str) -> Box<dyn Scorer> {
        if self.extended {
            Box::new(ExtendedQuery::parse(query, self.options))
        } else {
            Box::new(FuzzyPattern::new(query, self.options))
        }
    }

    fn score_record(&self, scorer: &dyn Scorer, fields: &[IndexedField]) -> Option<f64> {
        let mut total = 1.0;
        let mut matched = false;
        for field in fields {
            if let Some(score) = scorer.score(&field.value) {
                let exponent = self.weights[field.key] * field.norm;
                total *= score.max(f64::EPSILON).powf(exponent);
                matched = true;
            }
        }
        matched.then_some(total)
    }
}

/// `1 / sqrt(words)`, rounded to three decimals.
fn field_norm(value: &str) -> f64 {
    let norm = 1.0 / (word_count(value) as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}

/// Rank two matches: lower score first, then corpus order.
pub fn compare_matches(a: &MatchResult, b: &MatchResult) -> Ordering {
    match a.score.partial_cmp(&b.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.ref_index.cmp(&b.ref_index),
    }
}
