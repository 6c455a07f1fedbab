// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context};
use clap::Parser;
use std::path::Path;

use docfind::controller::{Event, SearchController};
use docfind::{FileSource, IndexLoader, PanelState, SearchConfig, THEME_DEFAULT_LITERAL};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            index,
            query,
            config,
            origin,
            limit,
            html,
        } => run_search(&index, &query, config.as_deref(), &origin, limit, html),
        Commands::CheckConfig { config } => run_check_config(&config),
    }
}

/// Accept a config argument as inline JSON or as a path to a JSON file.
fn read_config(arg: &str) -> anyhow::Result<SearchConfig> {
    let literal = if arg.trim_start().starts_with('{') {
        arg.to_string()
    } else {
        std::fs::read_to_string(arg).with_context(|| format!("reading config file {}", arg))?
    };
    SearchConfig::from_json(&literal).context("invalid search config")
}

fn run_search(
    index: &str,
    query: &str,
    config: Option<&str>,
    origin: &str,
    limit: Option<usize>,
    html: bool,
) -> anyhow::Result<()> {
    let mut config = read_config(config.unwrap_or(THEME_DEFAULT_LITERAL))?;
    if let Some(limit) = limit {
        config.limit = limit;
    }

    let path = Path::new(index);
    let root = path.parent().unwrap_or_else(|| Path::new("."));
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        bail!("not an index file: {}", index);
    };

    let loader = IndexLoader::new(file_name, config.clone())?;
    let mut controller = SearchController::new(config, origin)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("starting runtime")?;
    let engine = runtime
        .block_on(loader.load(&FileSource::new(root)))
        .context("search disabled")?;

    controller.dispatch(Event::IndexLoaded(Ok(engine)));
    controller.dispatch(Event::Input(query.to_string()));

    if html {
        println!("{}", controller.panel().to_html());
        return Ok(());
    }

    match controller.panel().state() {
        PanelState::Hidden => {
            eprintln!(
                "query shorter than {} characters; panel stays hidden",
                controller.config().min_chars_for_search
            );
        }
        PanelState::Empty | PanelState::Populated => {
            display::print_results(controller.query(), controller.results(), origin);
        }
    }
    Ok(())
}

fn run_check_config(arg: &str) -> anyhow::Result<()> {
    let config = read_config(arg)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
