//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docfind::controller::{Effect, Event, SearchController};
use docfind::{Document, MatchEngine, SearchConfig};

// Re-export canonical test utilities from docfind::testing
pub use docfind::testing::{corpus_json, make_doc, sample_corpus};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Origin used for href resolution in every controller test.
pub const ORIGIN: &str = "https://docs.example.com";

/// Small literal with a one-char minimum; everything else defaults.
pub const SMALL_CONFIG: &str = r#"{"limit": 10, "min_chars_for_search": 1}"#;

// ============================================================================
// BUILDERS
// ============================================================================

/// Engine over `docs` with the default configuration.
pub fn engine(docs: Vec<Document>) -> MatchEngine {
    MatchEngine::new(docs, &SearchConfig::default()).expect("default config is valid")
}

/// A controller whose index has already loaded.
pub fn ready_controller(config: SearchConfig, docs: Vec<Document>) -> SearchController {
    let engine = MatchEngine::new(docs, &config).expect("valid config");
    let mut controller = SearchController::new(config, ORIGIN).expect("valid config");
    controller.dispatch(Event::IndexLoaded(Ok(engine)));
    controller
}

/// A controller over the sample corpus with the theme's default literal.
pub fn sample_controller() -> SearchController {
    ready_controller(SearchConfig::default(), sample_corpus())
}

// ============================================================================
// EFFECT HELPERS
// ============================================================================

/// The URL of the single `Navigate` effect, if any.
pub fn navigation(effects: &[Effect]) -> Option<&str> {
    effects.iter().find_map(|effect| match effect {
        Effect::Navigate(url) => Some(url.as_str()),
        _ => None,
    })
}

/// Hrefs of the currently rendered items, in order.
pub fn rendered_hrefs(controller: &SearchController) -> Vec<String> {
    controller
        .panel()
        .items()
        .iter()
        .map(|item| item.href.clone())
        .collect()
}
