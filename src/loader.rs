// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fetch the document index once and turn it into a match engine.
//!
//! The fetch itself belongs to whoever owns the network: JavaScript in the
//! browser, the filesystem for the CLI and tests. Both go through the same
//! acceptance rules in [`IndexLoader::accept`]:
//!
//! 1. non-2xx status → `IndexLoadError::Status`
//! 2. body isn't an array of `{title, text, href}` → `IndexLoadError::Parse`
//! 3. otherwise the whole corpus becomes a `MatchEngine`
//!
//! There's no retry and no partial index. A failed load leaves search
//! disabled until the page is reloaded.

use crate::config::SearchConfig;
use crate::engine::MatchEngine;
use crate::error::{ConfigError, IndexLoadError};
use crate::types::Document;
use async_trait::async_trait;

/// Where the theme puts the index, relative to the page.
pub const DEFAULT_INDEX_URL: &str = "search.json";

/// The parts of an HTTP response the loader looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl FetchResponse {
    /// A `200 OK` response carrying `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            status_text: "OK".to_string(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can fetch a URL. The only suspending operation in the crate.
#[async_trait(?Send)]
pub trait IndexSource {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, IndexLoadError>;
}

/// Loads the corpus and builds the engine with a validated configuration.
#[derive(Debug, Clone)]
pub struct IndexLoader {
    url: String,
    config: SearchConfig,
}

impl IndexLoader {
    /// Create a loader. The configuration is validated here so a bad literal
    /// fails at startup, before any fetch.
    pub fn new(url: impl Into<String>, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            url: url.into(),
            config,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Fetch the index from `source` and build the engine.
    pub async fn load<S: IndexSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<MatchEngine, IndexLoadError> {
        let result = match source.fetch(&self.url).await {
            Ok(response) => self.accept(response),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            tracing::error!(url = %self.url, error = %e, "index load failed");
        }
        result
    }

    /// Validate a response and build the engine from its body.
    pub fn accept(&self, response: FetchResponse) -> Result<MatchEngine, IndexLoadError> {
        if !response.is_success() {
            return Err(IndexLoadError::Status {
                url: self.url.clone(),
                status: response.status,
                status_text: response.status_text,
            });
        }

        let corpus: Vec<Document> =
            serde_json::from_str(&response.body).map_err(|e| IndexLoadError::Parse {
                url: self.url.clone(),
                reason: e.to_string(),
            })?;

        tracing::info!(url = %self.url, documents = corpus.len(), "index loaded");
        Ok(MatchEngine::build(corpus, &self.config))
    }
}

// =============================================================================
// FILESYSTEM SOURCE
// =============================================================================

/// Serves index URLs from a directory, the way a static file server would.
///
/// A missing file answers `404 Not Found` rather than failing the fetch, so
/// the CLI reports the same error a browser would see.
#[cfg(feature = "native")]
#[derive(Debug, Clone)]
pub struct FileSource {
    root: std::path::PathBuf,
}

#[cfg(feature = "native")]
impl FileSource {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(feature = "native")]
#[async_trait(?Send)]
impl IndexSource for FileSource {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, IndexLoadError> {
        let path = self.root.join(url.trim_start_matches('/'));
        match tokio::fs::read_to_string(&path).await {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FetchResponse {
                status: 404,
                status_text: "Not Found".to_string(),
                body: String::new(),
            }),
            Err(e) => Err(IndexLoadError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
