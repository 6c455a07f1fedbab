//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a document from its three fields.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(title: &str, text: &str, href: &str) -> Document {
    Document {
        title: title.to_string(),
        text: text.to_string(),
        href: href.to_string(),
    }
}

/// A small documentation site, shaped like what the site generator emits.
pub fn sample_corpus() -> Vec<Document> {
    vec![
        make_doc(
            "Getting started > Install Guide",
            "How to install the package with pip or conda.",
            "getting_started/install.html#install-guide",
        ),
        make_doc(
            "User guide > Configuration",
            "Configure the theme through html_theme_options in conf.py.",
            "user_guide/configuration.html#configuration",
        ),
        make_doc(
            "User guide > Search",
            "The search box uses fuzzy matching over a prebuilt index.",
            "user_guide/search.html#search",
        ),
        make_doc(
            "API reference > Regex helpers",
            "Patterns such as a.b or (x|y) are matched literally.",
            "/api/regex.html#regex-helpers",
        ),
        make_doc(
            "Changelog",
            "Release notes for every version.",
            "changelog.html",
        ),
    ]
}

/// Serialize a corpus the way `search.json` stores it.
pub fn corpus_json(docs: &[Document]) -> String {
    serde_json::to_string(docs).unwrap_or_else(|_| "[]".to_string())
}
