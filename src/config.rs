// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search configuration literal.
//!
//! The theme embeds a JSON object in every page at build time. It's written by
//! a templating layer that doesn't care much about JSON types, so booleans show
//! up as `"True"` and integers as `"10"`. We accept both spellings and reject
//! everything else:
//!
//! ```json
//! {"ignoreLocation": true, "keys": ["title", "text"], "limit": 10,
//!  "min_chars_for_search": 1, "shouldSort": "True", "threshold": 0.5,
//!  "useExtendedSearch": "True"}
//! ```
//!
//! Parsed once at startup and never mutated. A malformed literal is fatal:
//! there is no default matching behavior worth falling back to.

use crate::error::ConfigError;
use crate::types::DOCUMENT_FIELDS;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// The literal the theme ships when the site doesn't override anything.
pub const THEME_DEFAULT_LITERAL: &str = r#"{"ignoreLocation": true, "keys": ["title", "text"], "limit": 10, "min_chars_for_search": 1, "shouldSort": "True", "threshold": 0.5, "useExtendedSearch": "True"}"#;

/// One entry of `keys`: either a bare field name or `{name, weight}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    Name(String),
    Weighted {
        name: String,
        #[serde(default = "default_weight")]
        weight: f64,
    },
}

fn default_weight() -> f64 {
    1.0
}

impl KeySpec {
    pub fn name(&self) -> &str {
        match self {
            KeySpec::Name(name) | KeySpec::Weighted { name, .. } => name,
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            KeySpec::Name(_) => 1.0,
            KeySpec::Weighted { weight, .. } => *weight,
        }
    }
}

impl From<&str> for KeySpec {
    fn from(name: &str) -> Self {
        KeySpec::Name(name.to_string())
    }
}

/// Resolved search options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Score matches by closeness only, not by where in the field they occur.
    #[serde(deserialize_with = "lenient_bool")]
    pub ignore_location: bool,
    /// Document fields to search.
    pub keys: Vec<KeySpec>,
    /// Maximum number of results returned per query.
    #[serde(deserialize_with = "lenient_usize")]
    pub limit: usize,
    /// Queries shorter than this (after trimming) hide the panel.
    #[serde(
        rename = "min_chars_for_search",
        alias = "minCharsForSearch",
        deserialize_with = "lenient_usize"
    )]
    pub min_chars_for_search: usize,
    /// Sort results best-first. When false, results keep corpus order.
    #[serde(deserialize_with = "lenient_bool")]
    pub should_sort: bool,
    /// Match strictness: 0.0 requires a perfect match, 1.0 accepts any
    /// alignment with at least `min_match_char_length` matched chars.
    #[serde(deserialize_with = "lenient_f64")]
    pub threshold: f64,
    /// Parse queries with the extended operator syntax (`'`, `=`, `^`, `$`, `!`, `|`).
    #[serde(deserialize_with = "lenient_bool")]
    pub use_extended_search: bool,
    #[serde(deserialize_with = "lenient_bool")]
    pub is_case_sensitive: bool,
    /// Fold accented characters to their base form before matching.
    #[serde(deserialize_with = "lenient_bool")]
    pub ignore_diacritics: bool,
    /// Expected match position, used when `ignore_location` is false.
    #[serde(deserialize_with = "lenient_usize")]
    pub location: usize,
    /// How far from `location` a match may drift before scoring 1.0.
    #[serde(deserialize_with = "lenient_usize")]
    pub distance: usize,
    /// Skip the shorter-fields-rank-higher adjustment.
    #[serde(deserialize_with = "lenient_bool")]
    pub ignore_field_norm: bool,
    #[serde(deserialize_with = "lenient_usize")]
    pub min_match_char_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ignore_location: true,
            keys: vec![KeySpec::from("title"), KeySpec::from("text")],
            limit: 10,
            min_chars_for_search: 1,
            should_sort: true,
            threshold: 0.5,
            use_extended_search: true,
            is_case_sensitive: false,
            ignore_diacritics: false,
            location: 0,
            distance: 100,
            ignore_field_norm: false,
            min_match_char_length: 1,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a configuration literal.
    pub fn from_json(literal: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig =
            serde_json::from_str(literal).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }
        if self.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        if self.min_match_char_length == 0 {
            return Err(ConfigError::InvalidField {
                field: "minMatchCharLength",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.keys.is_empty() {
            return Err(ConfigError::NoKeys);
        }
        for key in &self.keys {
            if !DOCUMENT_FIELDS.contains(&key.name()) {
                return Err(ConfigError::UnknownKey(key.name().to_string()));
            }
            let weight = key.weight();
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ConfigError::InvalidWeight {
                    key: key.name().to_string(),
                    weight,
                });
            }
        }
        Ok(())
    }

    /// Key names with weights scaled to sum to 1.
    pub fn normalized_keys(&self) -> Vec<(String, f64)> {
        let total: f64 = self.keys.iter().map(KeySpec::weight).sum();
        self.keys
            .iter()
            .map(|k| (k.name().to_string(), k.weight() / total))
            .collect()
    }
}

// =============================================================================
// LENIENT SCALARS
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(u64),
    Float(f64),
    Str(String),
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(de::Error::custom(format!("expected a boolean, got {:?}", s))),
        },
    }
}

fn lenient_usize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(n) => usize::try_from(n).map_err(de::Error::custom),
        NumberOrString::Float(f) if f >= 0.0 && f.fract() == 0.0 => Ok(f as usize),
        NumberOrString::Float(f) => Err(de::Error::custom(format!(
            "expected a non-negative integer, got {}",
            f
        ))),
        NumberOrString::Str(s) => s
            .trim()
            .parse::<usize>()
            .map_err(|_| de::Error::custom(format!("expected a non-negative integer, got {:?}", s))),
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(n) => Ok(n as f64),
        NumberOrString::Float(f) => Ok(f),
        NumberOrString::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("expected a number, got {:?}", s))),
    }
}
