//! Property-based tests using proptest.
//!
//! These tests check that the search box invariants hold for randomly
//! generated corpora, queries and document text.

mod common;

use common::{make_doc, ready_controller};
use docfind::controller::highlight::Highlighter;
use docfind::controller::render::highlight_html;
use docfind::controller::Event;
use docfind::{Document, MatchEngine, PanelState, SearchConfig};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate random word-like strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{2,8}").unwrap()
}

/// Generate random document text (multiple words).
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..10).prop_map(|words| words.join(" "))
}

/// Generate a corpus of documents.
fn corpus_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec((text_strategy(), text_strategy()), 0..15).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (title, text))| make_doc(&title, &text, &format!("p{i}.html")))
            .collect()
    })
}

/// Query terms made of regex metacharacters and letters.
fn literal_term_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[a-c.()|*+?\[\]^$\\]{1,4}").unwrap()
}

/// Free text that may contain markup and metacharacters.
fn messy_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r#"[a-cA-C .()|*+?<>&"'\[\]^$\\]{0,40}"#).unwrap()
}

// ============================================================================
// ENGINE PROPERTIES
// ============================================================================

proptest! {
    /// Never more results than the limit, and sorted best-first.
    #[test]
    fn prop_limit_and_order(
        corpus in corpus_strategy(),
        query in word_strategy(),
        limit in 1usize..6,
    ) {
        let engine = MatchEngine::new(corpus, &SearchConfig::default()).unwrap();
        let results = engine.search(&query, limit);

        prop_assert!(results.len() <= limit);
        for pair in results.windows(2) {
            prop_assert!(pair[0].score <= pair[1].score);
        }
        for r in &results {
            prop_assert_eq!(&engine.corpus()[r.ref_index], &r.item);
            prop_assert!((0.0..=1.0).contains(&r.score));
        }
    }

    /// A word copied out of a document always finds that document.
    #[test]
    fn prop_verbatim_word_is_found(
        corpus in corpus_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!corpus.is_empty());
        let target = pick.index(corpus.len());
        let word = corpus[target].title.split(' ').next().unwrap().to_string();

        let engine = MatchEngine::new(corpus.clone(), &SearchConfig {
            limit: corpus.len(),
            ..SearchConfig::default()
        }).unwrap();
        let results = engine.search(&word, corpus.len());

        prop_assert!(results.iter().any(|r| r.ref_index == target));
    }
}

// ============================================================================
// HIGHLIGHT PROPERTIES
// ============================================================================

proptest! {
    /// Concatenating the segments gives back the original text.
    #[test]
    fn prop_segments_reassemble(
        query in "[a-z ]{0,12}",
        text in messy_text_strategy(),
    ) {
        let joined: String = Highlighter::new(&query)
            .segments(&text)
            .iter()
            .map(|s| s.text)
            .collect();
        prop_assert_eq!(joined, text);
    }

    /// Metacharacters are literal: every highlighted run is the term itself.
    #[test]
    fn prop_highlight_is_literal(
        term in literal_term_strategy(),
        text in messy_text_strategy(),
    ) {
        for segment in Highlighter::new(&term).segments(&text) {
            if segment.highlighted {
                prop_assert!(segment.text.eq_ignore_ascii_case(&term));
            }
        }
    }

    /// Document text never reaches the page as live markup.
    #[test]
    fn prop_rendered_text_is_escaped(
        term in "[a-c]{1,3}",
        text in messy_text_strategy(),
    ) {
        let html = highlight_html(&Highlighter::new(&term), &text);
        let stripped = html
            .replace(r#"<span class="highlight">"#, "")
            .replace("</span>", "");
        prop_assert!(!stripped.contains('<'));
        prop_assert!(!stripped.contains('>'));
        prop_assert!(!stripped.contains('"'));
    }
}

// ============================================================================
// CONTROLLER PROPERTIES
// ============================================================================

proptest! {
    /// Short queries hide the panel; long enough ones show at most `limit` items.
    #[test]
    fn prop_panel_respects_min_chars_and_limit(
        corpus in corpus_strategy(),
        query in "[a-z0-9 ]{0,10}",
        min_chars in 1usize..5,
        limit in 1usize..5,
    ) {
        let config = SearchConfig {
            min_chars_for_search: min_chars,
            limit,
            ..SearchConfig::default()
        };
        let mut c = ready_controller(config, corpus);
        c.dispatch(Event::Input(query.clone()));

        let trimmed = query.trim();
        if trimmed.chars().count() < min_chars {
            prop_assert_eq!(c.panel().state(), PanelState::Hidden);
        } else {
            prop_assert_ne!(c.panel().state(), PanelState::Hidden);
            prop_assert!(c.panel().items().len() <= limit);
        }
    }
}
