// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings.
//!
//! The browser is the only production host. Everything here is a thin
//! translation layer over [`crate::controller::SearchController`]; the native
//! CLI drives the same controller directly.

#[cfg(feature = "wasm")]
pub mod wasm;
