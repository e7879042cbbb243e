// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use pattern_equals::config::load_and_validate_config;
use pattern_equals::layout::{LayoutMap, PatternLayout};
use pattern_equals::observability::init_tracing;
use pattern_equals::observability::messages::layout::EventStreamCompleted;
use pattern_equals::observability::messages::StructuredLog;
use pattern_equals::pattern::PatternParser;
use pattern_equals::stream::render_event_stream;
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <config.yaml|config.toml> [events.jsonl]", args[0]);
        eprintln!("Reads JSON-lines events from the file, or stdin when omitted.");
        eprintln!("Example: {} configs/redaction.yaml configs/events.jsonl", args[0]);
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1], args.get(2).map(String::as_str)).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config_file: &str, events_file: Option<&str>) -> Result<()> {
    let config = load_and_validate_config(config_file)
        .with_context(|| format!("Failed to load configuration '{}'", config_file))?;

    let parser = PatternParser::with_builtins();
    let layout_map = LayoutMap::from_config(&config, &parser);

    // Keep configuration order for output
    let layouts: Vec<Arc<PatternLayout>> = config
        .layouts
        .iter()
        .filter_map(|l| layout_map.get(&l.id).cloned())
        .collect();

    let mut stdout = tokio::io::stdout();
    let summary = match events_file {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open events file '{}'", path))?;
            render_event_stream(BufReader::new(file), &layouts, &mut stdout).await?
        }
        None => render_event_stream(BufReader::new(tokio::io::stdin()), &layouts, &mut stdout).await?,
    };

    EventStreamCompleted {
        rendered: summary.rendered,
        skipped: summary.skipped,
    }
    .log();

    Ok(())
}
