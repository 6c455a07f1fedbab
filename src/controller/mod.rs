// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search box state machine.
//!
//! One owned controller per page. UI callbacks become [`Event`]s; the
//! controller answers each with a list of [`Effect`]s for the host (the WASM
//! runtime, the CLI, or a test) to apply. Rendering and navigation are pure
//! functions of `(query, matches)`, so none of this needs a live DOM.
//!
//! ```text
//!             query too short / empty / index not ready
//!          ┌──────────────────────────────────────────────┐
//!          ▼                                              │
//!      ┌────────┐  0 matches  ┌───────┐  ≥1 match  ┌───────────┐
//!      │ Hidden │────────────▶│ Empty │───────────▶│ Populated │
//!      └────────┘             └───────┘            └───────────┘
//! ```
//!
//! Input that arrives before the index is a no-op. The controller remembers
//! the latest query and replays it once `IndexLoaded` delivers the engine, so
//! the panel catches up with whatever the user typed in the meantime.

pub mod highlight;
pub mod navigate;
pub mod render;

use crate::config::SearchConfig;
use crate::engine::MatchEngine;
use crate::error::{ConfigError, IndexLoadError};
use crate::types::MatchResult;
use navigate::resolve_href;
use render::Panel;

/// Keys the controller distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other(String),
}

impl From<&str> for Key {
    /// Accepts `KeyboardEvent.key` values.
    fn from(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Something happened on the page.
#[derive(Debug)]
pub enum Event {
    /// The search box value changed.
    Input(String),
    KeyDown(Key),
    /// A result item was clicked (index into the rendered list).
    Click(usize),
    /// The index fetch finished.
    IndexLoaded(Result<MatchEngine, IndexLoadError>),
}

/// Something the host should do in response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the results container with this panel.
    Render(Panel),
    /// Send the browser to this absolute URL.
    Navigate(String),
    /// Cancel the key event's default action (form submission).
    PreventDefault,
}

/// Index lifecycle as seen by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IndexState {
    #[default]
    Loading,
    Ready,
    Failed(IndexLoadError),
}

/// Owns the configuration, the engine (once loaded) and the current query.
#[derive(Debug)]
pub struct SearchController {
    config: SearchConfig,
    origin: String,
    engine: Option<MatchEngine>,
    index_state: IndexState,
    query: String,
    matches: Vec<MatchResult>,
    panel: Panel,
}

impl SearchController {
    /// `origin` is the page's `location.origin`, used to resolve hrefs.
    pub fn new(config: SearchConfig, origin: impl Into<String>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            origin: origin.into(),
            engine: None,
            index_state: IndexState::Loading,
            query: String::new(),
            matches: Vec::new(),
            panel: Panel::Hidden,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matches behind the current panel, for hosts that render on their own.
    pub fn results(&self) -> &[MatchResult] {
        &self.matches
    }

    pub fn index_state(&self) -> &IndexState {
        &self.index_state
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    /// Feed one event through the state machine.
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Input(value) => self.on_input(&value),
            Event::KeyDown(key) => self.on_key(&key),
            Event::Click(index) => self.on_click(index),
            Event::IndexLoaded(result) => self.on_loaded(result),
        }
    }

    fn on_input(&mut self, value: &str) -> Vec<Effect> {
        self.query = value.trim().to_string();

        let too_short = self.query.chars().count() < self.config.min_chars_for_search;
        if too_short || self.query.is_empty() {
            self.matches.clear();
            return self.show(Panel::Hidden);
        }

        let Some(engine) = &self.engine else {
            // Not an error: the query is replayed once the index arrives
            tracing::debug!(query = %self.query, "index not ready, ignoring input");
            return Vec::new();
        };

        self.matches = engine.search(&self.query, self.config.limit);
        let panel = Panel::from_matches(&self.query, &self.matches);
        self.show(panel)
    }

    fn on_key(&self, key: &Key) -> Vec<Effect> {
        if *key != Key::Enter {
            return Vec::new();
        }
        let mut effects = vec![Effect::PreventDefault];
        if let Some(first) = self.panel.items().first() {
            effects.push(Effect::Navigate(resolve_href(&self.origin, &first.href)));
        }
        effects
    }

    fn on_click(&self, index: usize) -> Vec<Effect> {
        match self.panel.items().get(index) {
            Some(item) => vec![Effect::Navigate(resolve_href(&self.origin, &item.href))],
            None => Vec::new(),
        }
    }

    fn on_loaded(&mut self, result: Result<MatchEngine, IndexLoadError>) -> Vec<Effect> {
        if self.engine.is_some() {
            tracing::debug!("index already loaded, ignoring second load");
            return Vec::new();
        }
        match result {
            Ok(engine) => {
                self.engine = Some(engine);
                self.index_state = IndexState::Ready;
                if self.query.is_empty() {
                    Vec::new()
                } else {
                    let query = self.query.clone();
                    self.on_input(&query)
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "search disabled");
                self.index_state = IndexState::Failed(e);
                Vec::new()
            }
        }
    }

    fn show(&mut self, panel: Panel) -> Vec<Effect> {
        self.panel = panel.clone();
        vec![Effect::Render(panel)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::make_doc;

    const ORIGIN: &str = "https://docs.example.com";

    fn ready_controller() -> SearchController {
        let mut c = SearchController::new(SearchConfig::default(), ORIGIN).unwrap();
        let engine = MatchEngine::new(
            vec![make_doc("Install Guide", "How to install", "docs/install")],
            c.config(),
        )
        .unwrap();
        c.dispatch(Event::IndexLoaded(Ok(engine)));
        c
    }

    #[test]
    fn test_input_before_load_is_noop() {
        let mut c = SearchController::new(SearchConfig::default(), ORIGIN).unwrap();
        assert!(c.dispatch(Event::Input("install".into())).is_empty());
        assert_eq!(c.panel(), &Panel::Hidden);
        assert_eq!(c.index_state(), &IndexState::Loading);
    }

    #[test]
    fn test_query_replayed_after_load() {
        let mut c = SearchController::new(SearchConfig::default(), ORIGIN).unwrap();
        c.dispatch(Event::Input("install".into()));
        let engine = MatchEngine::new(
            vec![make_doc("Install Guide", "How to install", "docs/install")],
            c.config(),
        )
        .unwrap();
        let effects = c.dispatch(Event::IndexLoaded(Ok(engine)));
        assert_eq!(effects.len(), 1);
        assert_eq!(c.panel().items().len(), 1);
    }

    #[test]
    fn test_failed_load_keeps_search_disabled() {
        let mut c = SearchController::new(SearchConfig::default(), ORIGIN).unwrap();
        let err = IndexLoadError::Status {
            url: "search.json".into(),
            status: 404,
            status_text: "Not Found".into(),
        };
        assert!(c.dispatch(Event::IndexLoaded(Err(err.clone()))).is_empty());
        assert_eq!(c.index_state(), &IndexState::Failed(err));
        assert!(c.dispatch(Event::Input("install".into())).is_empty());
    }

    #[test]
    fn test_whitespace_only_input_hides() {
        let mut c = ready_controller();
        c.dispatch(Event::Input("install".into()));
        let effects = c.dispatch(Event::Input("   ".into()));
        assert_eq!(effects, vec![Effect::Render(Panel::Hidden)]);
    }

    #[test]
    fn test_input_is_trimmed() {
        let mut c = ready_controller();
        c.dispatch(Event::Input("  install  ".into()));
        assert_eq!(c.query(), "install");
        assert_eq!(c.panel().items().len(), 1);
        assert_eq!(c.results()[0].item.title, "Install Guide");
    }

    #[test]
    fn test_enter_navigates_to_first_result() {
        let mut c = ready_controller();
        c.dispatch(Event::Input("install".into()));
        let effects = c.dispatch(Event::KeyDown(Key::Enter));
        assert_eq!(
            effects,
            vec![
                Effect::PreventDefault,
                Effect::Navigate("https://docs.example.com/docs/install".into())
            ]
        );
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut c = ready_controller();
        c.dispatch(Event::Input("install".into()));
        assert!(c.dispatch(Event::KeyDown(Key::from("ArrowDown"))).is_empty());
    }

    #[test]
    fn test_click_out_of_range() {
        let mut c = ready_controller();
        c.dispatch(Event::Input("install".into()));
        assert!(c.dispatch(Event::Click(5)).is_empty());
    }

    #[test]
    fn test_second_load_is_ignored() {
        let mut c = ready_controller();
        let other = MatchEngine::new(vec![], c.config()).unwrap();
        assert!(c.dispatch(Event::IndexLoaded(Ok(other))).is_empty());
        c.dispatch(Event::Input("install".into()));
        assert_eq!(c.panel().items().len(), 1);
    }
}
