// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query term highlighting.
//!
//! The query is trimmed and split on whitespace. Every occurrence of any term
//! is marked, case-insensitively. Terms are literal text: `a.b` highlights the
//! three characters `a.b` and never `axb`, because each term goes through
//! `regex::escape` before it joins the alternation.
//!
//! Alternation is leftmost-first, so when two terms overlap at the same
//! position the one typed first wins.

use regex::{Regex, RegexBuilder};

/// A run of text that is either highlighted or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Compiled highlight pattern for one query.
#[derive(Debug, Clone)]
pub struct Highlighter {
    regex: Option<Regex>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        let terms: Vec<String> = query.split_whitespace().map(regex::escape).collect();
        if terms.is_empty() {
            return Self { regex: None };
        }

        let pattern = format!("({})", terms.join("|"));
        let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => Some(regex),
            Err(e) => {
                // Only reachable for absurdly long queries (compiled size limit)
                tracing::warn!(error = %e, "highlight pattern rejected; rendering plain text");
                None
            }
        };
        Self { regex }
    }

    /// Split `text` into plain and highlighted runs. Concatenating the runs
    /// gives back `text` unchanged.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let Some(regex) = &self.regex else {
            return vec![Segment {
                text,
                highlighted: false,
            }];
        };

        let mut segments = Vec::new();
        let mut last = 0;
        for m in regex.find_iter(text) {
            if m.start() > last {
                segments.push(Segment {
                    text: &text[last..m.start()],
                    highlighted: false,
                });
            }
            segments.push(Segment {
                text: m.as_str(),
                highlighted: true,
            });
            last = m.end();
        }
        if last < text.len() || segments.is_empty() {
            segments.push(Segment {
                text: &text[last..],
                highlighted: false,
            });
        }
        segments
    }
}
