// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result panel rendering.
//!
//! Pure functions from `(query, matches)` to markup. The page owns the DOM;
//! this module only decides what goes inside the results container:
//!
//! ```html
//! <div class="result-item" data-href="guide.html#install">
//!   <div class="result-title"><span class="highlight">Install</span> Guide</div>
//!   <div class="result-text">How to <span class="highlight">install</span></div>
//! </div>
//! ```
//!
//! Document text is HTML-escaped before the highlight spans are added, so an
//! index entry can't inject markup into the page.

use super::highlight::{Highlighter, Segment};
use crate::types::MatchResult;
use serde::Serialize;
use std::fmt::Write;

/// Selectors and class names shared with the page's HTML.
pub mod dom {
    /// The search input inside the theme's navbar.
    pub const SEARCH_BOX_SELECTOR: &str = ".bd-search input";
    /// Id of the results container.
    pub const RESULTS_ID: &str = "results";
    pub const RESULT_ITEM_CLASS: &str = "result-item";
    pub const RESULT_TITLE_CLASS: &str = "result-title";
    pub const RESULT_TEXT_CLASS: &str = "result-text";
    pub const NO_RESULTS_CLASS: &str = "no-results";
    pub const HIGHLIGHT_CLASS: &str = "highlight";
    /// Attribute carrying each item's navigation target.
    pub const HREF_ATTRIBUTE: &str = "data-href";
    pub const NO_RESULTS_MESSAGE: &str = "No matched documents";
}

/// One rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedItem {
    pub title_html: String,
    pub text_html: String,
    /// Raw href from the index, resolved against the origin on navigation.
    pub href: String,
}

/// Which of the three panel states we're in, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    Hidden,
    Empty,
    Populated,
}

/// What the results container should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel {
    /// No query, query too short, or index not ready.
    #[default]
    Hidden,
    /// Query ran, nothing matched.
    Empty,
    /// Query ran, at least one match.
    Populated(Vec<RenderedItem>),
}

impl Panel {
    /// Build the panel for a query that was actually run.
    pub fn from_matches(query: &str, matches: &[MatchResult]) -> Self {
        if matches.is_empty() {
            return Panel::Empty;
        }
        let highlighter = Highlighter::new(query);
        Panel::Populated(
            matches
                .iter()
                .map(|m| RenderedItem {
                    title_html: highlight_html(&highlighter, &m.item.title),
                    text_html: highlight_html(&highlighter, &m.item.text),
                    href: m.item.href.clone(),
                })
                .collect(),
        )
    }

    pub fn state(&self) -> PanelState {
        match self {
            Panel::Hidden => PanelState::Hidden,
            Panel::Empty => PanelState::Empty,
            Panel::Populated(_) => PanelState::Populated,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Panel::Hidden)
    }

    pub fn items(&self) -> &[RenderedItem] {
        match self {
            Panel::Populated(items) => items,
            _ => &[],
        }
    }

    /// Inner HTML of the results container.
    pub fn to_html(&self) -> String {
        match self {
            Panel::Hidden => String::new(),
            Panel::Empty => format!(
                r#"<div class="{}">{}</div>"#,
                dom::NO_RESULTS_CLASS,
                dom::NO_RESULTS_MESSAGE
            ),
            Panel::Populated(items) => {
                let mut html = String::new();
                for item in items {
                    let _ = write!(
                        html,
                        r#"<div class="{item_class}" {attr}="{href}"><div class="{title_class}">{title}</div><div class="{text_class}">{text}</div></div>"#,
                        item_class = dom::RESULT_ITEM_CLASS,
                        attr = dom::HREF_ATTRIBUTE,
                        href = escape_html(&item.href),
                        title_class = dom::RESULT_TITLE_CLASS,
                        title = item.title_html,
                        text_class = dom::RESULT_TEXT_CLASS,
                        text = item.text_html,
                    );
                }
                html
            }
        }
    }

    /// CSS `display` value for the container.
    pub fn display(&self) -> &'static str {
        if self.is_visible() {
            "block"
        } else {
            "none"
        }
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Escape `text` and wrap every highlighted run in a highlight span.
pub fn highlight_html(highlighter: &Highlighter, text: &str) -> String {
    let mut html = String::with_capacity(text.len());
    for Segment { text, highlighted } in highlighter.segments(text) {
        if highlighted {
            let _ = write!(
                html,
                r#"<span class="{}">{}</span>"#,
                dom::HIGHLIGHT_CLASS,
                escape_html(text)
            );
        } else {
            html.push_str(&escape_html(text));
        }
    }
    html
}
