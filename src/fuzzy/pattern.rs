// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring matching for a single pattern.
//!
//! A pattern matches a field when some substring of the field is within a few
//! edits of the pattern. The score is the error rate (`errors / pattern_len`),
//! plus a proximity penalty when location matters:
//!
//! ```text
//! score = errors / len(pattern) + |start - location| / distance
//! ```
//!
//! A match is kept when `score <= threshold` and at least
//! `min_match_char_length` pattern chars line up with the text. Threshold 0.0
//! only accepts a verbatim occurrence; threshold 1.0 accepts any alignment
//! that still matches that many chars.
//!
//! The DP is the classic Levenshtein table with a free starting column: row 0
//! is all zeros, so a match may begin anywhere in the text.
//!
//! Patterns longer than [`MAX_PATTERN_LEN`] chars are split into chunks that
//! are scored separately. A chunked pattern matches when any chunk does; its
//! score is the mean over chunks, with a missed chunk counting as 1.0.

use super::Scorer;

/// Longest pattern scored in one DP pass.
pub const MAX_PATTERN_LEN: usize = 32;

/// Options shared by every fuzzy pattern built for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternOptions {
    pub threshold: f64,
    pub ignore_location: bool,
    pub location: usize,
    pub distance: usize,
    pub min_match_char_length: usize,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            ignore_location: true,
            location: 0,
            distance: 100,
            min_match_char_length: 1,
        }
    }
}

/// Up to `MAX_PATTERN_LEN` consecutive pattern chars.
#[derive(Debug, Clone)]
struct Chunk {
    text: String,
    chars: Vec<char>,
    /// Char offset of the chunk within the whole pattern.
    offset: usize,
}

/// A folded query pattern ready to be scored against folded field values.
#[derive(Debug, Clone)]
pub struct FuzzyPattern {
    pattern: String,
    chunks: Vec<Chunk>,
    options: PatternOptions,
}

impl FuzzyPattern {
    /// Build a pattern. `pattern` must already be folded the same way as the
    /// text it will be scored against.
    pub fn new(pattern: &str, options: PatternOptions) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        let chunks = chars
            .chunks(MAX_PATTERN_LEN)
            .enumerate()
            .map(|(i, chunk)| Chunk {
                text: chunk.iter().collect(),
                chars: chunk.to_vec(),
                offset: i * MAX_PATTERN_LEN,
            })
            .collect();
        Self {
            pattern: pattern.to_string(),
            chunks,
            options,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Score of a `chunk` match with `errors` edits starting at char offset `start`.
    fn compute_score(&self, chunk: &Chunk, errors: usize, start: usize) -> f64 {
        let accuracy = errors as f64 / chunk.chars.len() as f64;
        if self.options.ignore_location {
            return accuracy;
        }
        let proximity = start.abs_diff(self.options.location + chunk.offset);
        if self.options.distance == 0 {
            // No drift allowed at all
            return if proximity > 0 { 1.0 } else { accuracy };
        }
        accuracy + proximity as f64 / self.options.distance as f64
    }

    /// Best score over every substring of `text`, or `None` if nothing is
    /// within the threshold.
    pub fn search(&self, text: &str) -> Option<f64> {
        match self.chunks.as_slice() {
            [] => None,
            [chunk] => self.search_chunk(chunk, text),
            chunks => {
                let mut matched = false;
                let mut total = 0.0;
                for chunk in chunks {
                    match self.search_chunk(chunk, text) {
                        Some(score) => {
                            matched = true;
                            total += score;
                        }
                        None => total += 1.0,
                    }
                }
                let score = total / chunks.len() as f64;
                (matched && score <= self.options.threshold).then_some(score)
            }
        }
    }

    fn search_chunk(&self, chunk: &Chunk, text: &str) -> Option<f64> {
        let m = chunk.chars.len();
        let threshold = self.options.threshold;
        let mut best: Option<f64> = None;

        // Verbatim occurrences: zero errors, only proximity can cost anything
        if m >= self.options.min_match_char_length {
            let mut from = 0;
            let mut start = 0;
            while let Some(found) = text[from..].find(chunk.text.as_str()) {
                let byte_pos = from + found;
                start += text[from..byte_pos].chars().count();
                let score = self.compute_score(chunk, 0, start);
                if score <= threshold && best.is_none_or(|b| score < b) {
                    best = Some(score);
                }
                if score == 0.0 || self.options.ignore_location {
                    return best;
                }
                // Step one char so overlapping occurrences are seen too
                let step = text[byte_pos..].chars().next().map_or(1, char::len_utf8);
                from = byte_pos + step;
                start += 1;
            }
        }

        // errors / m <= threshold bounds how many edits are worth tracking
        let max_errors = (threshold * m as f64).floor() as usize;
        if max_errors == 0 {
            return best;
        }

        // dp[j] = best edit distance of pattern[..j] ending at the current text char
        let mut dp: Vec<usize> = (0..=m).collect();

        for (i, tc) in text.chars().enumerate() {
            let mut prev = dp[0];
            dp[0] = 0;
            for (j, &pc) in chunk.chars.iter().enumerate() {
                let temp = dp[j + 1];
                let cost = usize::from(pc != tc);
                dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
                prev = temp;
            }

            let errors = dp[m];
            if errors > max_errors || m - errors.min(m) < self.options.min_match_char_length {
                continue;
            }
            let start = (i + 1).saturating_sub(m);
            let score = self.compute_score(chunk, errors, start);
            if score <= threshold && best.is_none_or(|b| score < b) {
                best = Some(score);
            }
        }

        best
    }
}

impl Scorer for FuzzyPattern {
    fn score(&self, text: &str) -> Option<f64> {
        self.search(text)
    }
}
