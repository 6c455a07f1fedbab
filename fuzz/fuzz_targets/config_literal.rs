// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the configuration literal parser.
//!
//! The literal comes from a templating layer, so anything can show up. Parsing
//! must either fail with a `ConfigError` or produce a configuration that passes
//! its own validation and builds an engine.

#![no_main]

use docfind::{MatchEngine, SearchConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|literal: &str| {
    let Ok(config) = SearchConfig::from_json(literal) else {
        return;
    };
    assert!(config.validate().is_ok());
    assert!(config.limit > 0);
    assert!((0.0..=1.0).contains(&config.threshold));

    let engine = MatchEngine::new(Vec::new(), &config).expect("validated config");
    assert!(engine.search("anything", config.limit).is_empty());
});
