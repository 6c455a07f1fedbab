// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docfind command-line interface.
//!
//! Two subcommands: `search` runs a query against a `search.json` exactly the
//! way the browser would (same config literal, same controller), and
//! `check-config` validates a configuration literal before it ships.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docfind",
    about = "Fuzzy search over a static documentation index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a search.json index and display results
    Search {
        /// Path to the index file (JSON array of {title, text, href})
        index: String,

        /// Search query
        query: String,

        /// Configuration literal, inline JSON or a path to a JSON file
        ///
        /// Defaults to the theme's shipped literal.
        #[arg(short, long)]
        config: Option<String>,

        /// Origin used to resolve result hrefs
        #[arg(long, default_value = "http://localhost:8000")]
        origin: String,

        /// Override the configured result limit
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the results panel markup instead of the terminal view
        #[arg(long)]
        html: bool,
    },

    /// Validate a configuration literal and print it fully resolved
    CheckConfig {
        /// Inline JSON or a path to a JSON file
        config: String,
    },
}
