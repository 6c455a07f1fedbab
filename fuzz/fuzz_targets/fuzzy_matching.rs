// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for approximate substring scoring.
//!
//! Whatever the pattern, text and options, a score is either absent or inside
//! `[0, threshold]`, and a verbatim occurrence always scores zero when
//! location is ignored.

#![no_main]

use arbitrary::Arbitrary;
use docfind::fuzzy::{FuzzyPattern, PatternOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    pattern: String,
    text: String,
    threshold: u8,
    ignore_location: bool,
    location: u8,
    distance: u8,
}

fuzz_target!(|input: Input| {
    // Cap the DP size
    if input.pattern.len() > 64 || input.text.len() > 4096 {
        return;
    }

    let options = PatternOptions {
        threshold: f64::from(input.threshold) / 255.0,
        ignore_location: input.ignore_location,
        location: usize::from(input.location),
        distance: usize::from(input.distance),
        min_match_char_length: 1,
    };
    let pattern = FuzzyPattern::new(&input.pattern, options);

    if let Some(score) = pattern.search(&input.text) {
        assert!(score >= 0.0 && score <= options.threshold, "score {score}");
    }

    if options.ignore_location && !input.pattern.is_empty() && input.text.contains(&input.pattern) {
        assert_eq!(pattern.search(&input.text), Some(0.0));
    }
});
