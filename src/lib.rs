//! Client-side fuzzy search for static documentation sites.
//!
//! The site generator writes every page's `{title, text, href}` into one
//! `search.json`. This crate loads that file once, scores each record against
//! the query with a typo-tolerant matcher, and drives the results panel under
//! the navbar search box.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  config.rs  │────▶│  loader.rs   │────▶│    engine.rs     │
//! │(SearchConfig│     │ (IndexLoader,│     │  (MatchEngine,   │
//! │  literal)   │     │ IndexSource) │     │   search)        │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                   │                      │
//!        │                   │              ┌───────┴────────┐
//!        │                   │              │    fuzzy/      │
//!        │                   │              │ (FuzzyPattern, │
//!        │                   │              │ ExtendedQuery) │
//!        │                   │              └────────────────┘
//!        ▼                   ▼                      ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │                       controller/                          │
//! │   (SearchController: Hidden / Empty / Populated, render,   │
//! │    highlight, navigate)                                    │
//! └───────────────────────────────────────────────────────────┘
//!        │                                          │
//!        ▼                                          ▼
//! ┌──────────────────┐                    ┌──────────────────┐
//! │ runtime/wasm.rs  │                    │   main.rs (CLI)  │
//! │  (DocfindApp)    │                    │                  │
//! └──────────────────┘                    └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use docfind::controller::{Event, SearchController};
//! use docfind::{Document, MatchEngine, SearchConfig};
//!
//! let config = SearchConfig::default();
//! let corpus = vec![Document {
//!     title: "Install Guide".into(),
//!     text: "How to install".into(),
//!     href: "docs/install".into(),
//! }];
//! let engine = MatchEngine::new(corpus, &config).unwrap();
//!
//! let mut controller = SearchController::new(config, "https://docs.example.com").unwrap();
//! controller.dispatch(Event::IndexLoaded(Ok(engine)));
//! controller.dispatch(Event::Input("install".into()));
//!
//! assert_eq!(
//!     controller.panel().items()[0].title_html,
//!     r#"<span class="highlight">Install</span> Guide"#
//! );
//! ```

pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod loader;
pub mod runtime;
pub mod testing;
mod types;
mod utils;

pub use config::{KeySpec, SearchConfig, THEME_DEFAULT_LITERAL};
pub use controller::render::{Panel, PanelState, RenderedItem};
pub use controller::{Effect, Event, Key, SearchController};
pub use engine::MatchEngine;
pub use error::{ConfigError, IndexLoadError};
#[cfg(feature = "native")]
pub use loader::FileSource;
pub use loader::{FetchResponse, IndexLoader, IndexSource, DEFAULT_INDEX_URL};
pub use types::{Document, MatchResult, DOCUMENT_FIELDS};
pub use utils::Folding;
