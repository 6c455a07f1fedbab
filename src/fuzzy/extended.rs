// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Extended query syntax.
//!
//! Power users can narrow a search with operators instead of relying on fuzzy
//! matching alone. Terms separated by spaces must all match; `|` separates
//! alternatives.
//!
//! | Token     | Kind            | Field matches when          |
//! |-----------|-----------------|-----------------------------|
//! | `jscript` | fuzzy           | fuzzy-matches `jscript`     |
//! | `=scheme` | exact           | is exactly `scheme`         |
//! | `'python` | include         | contains `python`           |
//! | `!ruby`   | inverse include | does not contain `ruby`     |
//! | `^java`   | prefix          | starts with `java`          |
//! | `!^earlang` | inverse prefix | does not start with `earlang` |
//! | `.js$`    | suffix          | ends with `.js`             |
//! | `!.go$`   | inverse suffix  | does not end with `.go`     |
//!
//! Double quotes keep spaces inside one term: `="install guide"`.
//!
//! Operator terms score 0.0 when they match. A group's score is the mean of
//! its terms, and the first group that matches wins.

use super::{FuzzyPattern, PatternOptions, Scorer};

/// How a single term is compared with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Fuzzy,
    Exact,
    Include,
    InverseInclude,
    Prefix,
    InversePrefix,
    Suffix,
    InverseSuffix,
}

impl TermKind {
    pub fn is_inverse(self) -> bool {
        matches!(
            self,
            TermKind::InverseInclude | TermKind::InversePrefix | TermKind::InverseSuffix
        )
    }
}

/// One parsed term. Fuzzy terms carry their compiled pattern.
#[derive(Debug, Clone)]
pub struct Term {
    pub kind: TermKind,
    pub value: String,
    fuzzy: Option<FuzzyPattern>,
}

impl Term {
    fn new(kind: TermKind, value: &str, options: PatternOptions) -> Self {
        let fuzzy = (kind == TermKind::Fuzzy).then(|| FuzzyPattern::new(value, options));
        Self {
            kind,
            value: value.to_string(),
            fuzzy,
        }
    }

    fn score(&self, text: &str) -> Option<f64> {
        let v = self.value.as_str();
        let hit = match self.kind {
            TermKind::Fuzzy => return self.fuzzy.as_ref().and_then(|p| p.search(text)),
            TermKind::Exact => text == v,
            TermKind::Include => text.contains(v),
            TermKind::InverseInclude => !text.contains(v),
            TermKind::Prefix => text.starts_with(v),
            TermKind::InversePrefix => !text.starts_with(v),
            TermKind::Suffix => text.ends_with(v),
            TermKind::InverseSuffix => !text.ends_with(v),
        };
        hit.then_some(0.0)
    }
}

/// A parsed extended query: OR of AND-groups.
#[derive(Debug, Clone)]
pub struct ExtendedQuery {
    groups: Vec<Vec<Term>>,
}

impl ExtendedQuery {
    /// Parse a folded query string.
    pub fn parse(query: &str, options: PatternOptions) -> Self {
        let groups = query
            .split('|')
            .map(|group| {
                split_terms(group)
                    .into_iter()
                    .map(|token| {
                        let (kind, value) = classify(&token);
                        Term::new(kind, &value, options)
                    })
                    .collect::<Vec<_>>()
            })
            .filter(|group| !group.is_empty())
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[Vec<Term>] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Scorer for ExtendedQuery {
    fn score(&self, text: &str) -> Option<f64> {
        'groups: for group in &self.groups {
            let mut total = 0.0;
            for term in group {
                match term.score(text) {
                    Some(score) => total += score,
                    None => continue 'groups,
                }
            }
            return Some(total / group.len() as f64);
        }
        None
    }
}

/// Split on spaces that are not inside double quotes.
fn split_terms(group: &str) -> Vec<String> {
    let mut terms = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in group.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                current.push(c);
            }
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    terms.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        terms.push(current);
    }
    terms
}

/// Work out a token's kind and strip its operator (and surrounding quotes).
///
/// Order matters: `!^x` must be seen before `!x`, and `!x$` before `x$`.
fn classify(token: &str) -> (TermKind, String) {
    let candidates: [(TermKind, Option<&str>); 7] = [
        (TermKind::Exact, token.strip_prefix('=')),
        (TermKind::Include, token.strip_prefix('\'')),
        (TermKind::InversePrefix, token.strip_prefix("!^")),
        (
            TermKind::InverseSuffix,
            token.strip_prefix('!').and_then(|t| t.strip_suffix('$')),
        ),
        (TermKind::Prefix, token.strip_prefix('^')),
        (TermKind::Suffix, token.strip_suffix('$')),
        (TermKind::InverseInclude, token.strip_prefix('!')),
    ];

    for (kind, body) in candidates {
        if let Some(body) = body {
            let body = unquote(body);
            if !body.is_empty() {
                return (kind, body.to_string());
            }
        }
    }
    (TermKind::Fuzzy, unquote(token).to_string())
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
