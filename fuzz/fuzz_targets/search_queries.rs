// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search box input.
//!
//! Feeds arbitrary text through the controller exactly as the input listener
//! would. Emoji, RTL text, stray operators, unbalanced quotes: none of it may
//! panic, exceed the limit, or leak unescaped markup into the panel.

#![no_main]

use docfind::controller::{Event, Key, SearchController};
use docfind::testing::sample_corpus;
use docfind::{MatchEngine, PanelState, SearchConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &str| {
    let config = SearchConfig::default();
    let engine = MatchEngine::new(sample_corpus(), &config).expect("default config is valid");
    let mut controller =
        SearchController::new(config.clone(), "https://docs.example.com").expect("valid config");
    controller.dispatch(Event::IndexLoaded(Ok(engine)));

    controller.dispatch(Event::Input(query.to_string()));
    let panel = controller.panel();

    if query.trim().is_empty() {
        assert_eq!(panel.state(), PanelState::Hidden);
    }
    assert!(panel.items().len() <= config.limit);

    for item in panel.items() {
        for html in [&item.title_html, &item.text_html] {
            let stripped = html
                .replace(r#"<span class="highlight">"#, "")
                .replace("</span>", "");
            assert!(!stripped.contains('<'), "unescaped markup: {html}");
        }
    }

    // Enter must always be safe, with or without results
    let effects = controller.dispatch(Event::KeyDown(Key::Enter));
    assert!(!effects.is_empty());
});
