// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the docs search box.
//!
//! JavaScript owns the network and the DOM; Rust owns every decision. The page
//! wires its listeners to a `DocfindApp` and applies whatever each call returns:
//!
//! ```js
//! const app = new DocfindApp(JSON.stringify(config), location.origin,
//!                            (url) => { location.href = url; });
//! const box = document.querySelector(DocfindApp.searchBoxSelector());
//! const results = document.getElementById(DocfindApp.resultsId());
//!
//! const apply = (out) => {
//!     if (out.html !== undefined) {
//!         results.innerHTML = out.html;
//!         results.style.display = out.visible ? "block" : "none";
//!     }
//! };
//!
//! fetch(DocfindApp.indexUrl())
//!     .then(async (r) => apply(app.loadResponse(r.status, r.statusText, await r.text())))
//!     .catch((e) => app.loadFailed(String(e)));
//!
//! box.addEventListener("input", (e) => apply(app.input(e.target.value)));
//! box.addEventListener("keydown", (e) => {
//!     if (app.keydown(e.key).preventDefault) e.preventDefault();
//! });
//! results.addEventListener("click", (e) => {
//!     const item = e.target.closest(".result-item");
//!     if (item) apply(app.click([...results.children].indexOf(item)));
//! });
//! ```
//!
//! Navigation goes through the `onNavigate` callback when one is given, and is
//! always reported in the returned `navigate` field as well.

use crate::config::SearchConfig;
use crate::controller::render::dom;
use crate::controller::{Effect, Event, Key, SearchController};
use crate::error::IndexLoadError;
use crate::loader::{FetchResponse, IndexLoader, DEFAULT_INDEX_URL};
use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(message: &str);
}

/// What the page should do after one call.
///
/// `html` and `visible` are absent when the results container should be left
/// alone (input before the index is ready, key presses, clicks).
#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    navigate: Option<String>,
    prevent_default: bool,
}

impl JsOutcome {
    fn from_effects(effects: Vec<Effect>) -> Self {
        let mut outcome = JsOutcome::default();
        for effect in effects {
            match effect {
                Effect::Render(panel) => {
                    outcome.html = Some(panel.to_html());
                    outcome.visible = Some(panel.is_visible());
                }
                Effect::Navigate(url) => outcome.navigate = Some(url),
                Effect::PreventDefault => outcome.prevent_default = true,
            }
        }
        outcome
    }
}

/// One search box on one page.
#[wasm_bindgen]
pub struct DocfindApp {
    controller: SearchController,
    loader: IndexLoader,
    on_navigate: Option<Function>,
}

#[wasm_bindgen]
impl DocfindApp {
    /// Parse the configuration literal and set up an idle controller.
    ///
    /// Throws if the literal is malformed; search can't run without it.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: &str,
        origin: &str,
        on_navigate: Option<Function>,
    ) -> Result<DocfindApp, JsValue> {
        let config = SearchConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid search config: {}", e)))?;
        let loader = IndexLoader::new(DEFAULT_INDEX_URL, config.clone())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let controller =
            SearchController::new(config, origin).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(DocfindApp {
            controller,
            loader,
            on_navigate,
        })
    }

    #[wasm_bindgen(js_name = "searchBoxSelector")]
    pub fn search_box_selector() -> String {
        dom::SEARCH_BOX_SELECTOR.to_string()
    }

    #[wasm_bindgen(js_name = "resultsId")]
    pub fn results_id() -> String {
        dom::RESULTS_ID.to_string()
    }

    #[wasm_bindgen(js_name = "indexUrl")]
    pub fn index_url() -> String {
        DEFAULT_INDEX_URL.to_string()
    }

    /// Whether the index has loaded.
    #[wasm_bindgen(js_name = "isReady")]
    pub fn is_ready(&self) -> bool {
        self.controller.is_ready()
    }

    /// Hand over the index response. Replays whatever was typed while loading.
    #[wasm_bindgen(js_name = "loadResponse")]
    pub fn load_response(
        &mut self,
        status: u16,
        status_text: String,
        body: String,
    ) -> Result<JsValue, JsValue> {
        let result = self.loader.accept(FetchResponse {
            status,
            status_text,
            body,
        });
        if let Err(e) = &result {
            console_error(&e.to_string());
        }
        self.dispatch(Event::IndexLoaded(result))
    }

    /// Report a fetch that never produced a response (network error).
    #[wasm_bindgen(js_name = "loadFailed")]
    pub fn load_failed(&mut self, message: String) -> Result<JsValue, JsValue> {
        let error = IndexLoadError::Fetch {
            url: self.loader.url().to_string(),
            reason: message,
        };
        console_error(&error.to_string());
        self.dispatch(Event::IndexLoaded(Err(error)))
    }

    /// The search box value changed.
    #[wasm_bindgen]
    pub fn input(&mut self, value: &str) -> Result<JsValue, JsValue> {
        self.dispatch(Event::Input(value.to_string()))
    }

    /// A key went down in the search box (`KeyboardEvent.key`).
    #[wasm_bindgen]
    pub fn keydown(&mut self, key: &str) -> Result<JsValue, JsValue> {
        self.dispatch(Event::KeyDown(Key::from(key)))
    }

    /// The `index`-th result item was clicked.
    #[wasm_bindgen]
    pub fn click(&mut self, index: usize) -> Result<JsValue, JsValue> {
        self.dispatch(Event::Click(index))
    }

    /// Current panel markup, for pages that re-render on their own schedule.
    #[wasm_bindgen]
    pub fn html(&self) -> String {
        self.controller.panel().to_html()
    }
}

impl DocfindApp {
    fn dispatch(&mut self, event: Event) -> Result<JsValue, JsValue> {
        let outcome = JsOutcome::from_effects(self.controller.dispatch(event));
        if let (Some(url), Some(callback)) = (&outcome.navigate, &self.on_navigate) {
            callback.call1(&JsValue::NULL, &JsValue::from_str(url))?;
        }
        to_value(&outcome).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
