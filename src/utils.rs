// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String folding applied to both sides of a match.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// How text is folded before it reaches the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Folding {
    pub case_sensitive: bool,
    pub strip_diacritics: bool,
}

impl Folding {
    /// Fold a string for matching.
    ///
    /// - "Café" → "cafe" (case-insensitive, diacritics stripped)
    /// - "Café" → "café" (case-insensitive only)
    ///
    /// Without the `unicode-normalization` feature, diacritic stripping is a
    /// no-op and only case folding applies.
    pub fn apply(self, value: &str) -> String {
        let value = if self.strip_diacritics {
            strip_diacritics(value)
        } else {
            value.to_string()
        };
        if self.case_sensitive {
            value
        } else {
            value.to_lowercase()
        }
    }
}

#[cfg(feature = "unicode-normalization")]
fn strip_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn strip_diacritics(value: &str) -> String {
    value.to_string()
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Number of whitespace-separated words, never less than one.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count().max(1)
}
