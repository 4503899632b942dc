// ABOUTME: CLI for normalizing decoded RSS documents with feedcanon-rss.
// ABOUTME: Reads JSON raw documents from files or stdin and prints canonical feeds as JSON.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use feedcanon_rss::{Normalizer, RawFeed};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Normalize one or more decoded RSS documents and output JSON.
#[derive(Parser, Debug)]
#[command(name = "feedcanon")]
#[command(about = "Normalize decoded RSS documents and print canonical JSON", long_about = None)]
struct Args {
    /// JSON files holding a raw decoded document. Use "-" to read one from stdin.
    #[arg(required = true)]
    targets: Vec<String>,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let normalizer = Normalizer::new();

    let mut results = Vec::new();

    for target in &args.targets {
        match load_raw_feed(target) {
            Ok(raw) => {
                let feed = normalizer.transform_feed(&raw);
                tracing::debug!(target = %target, entries = feed.entries.len(), "normalized feed");
                results.push(json!({
                    "source": target,
                    "ok": true,
                    "feed": feed,
                    "error": null
                }));
            }
            Err(err) => {
                tracing::warn!(target = %target, error = %err, "could not load raw document");
                results.push(json!({
                    "source": target,
                    "ok": false,
                    "feed": null,
                    "error": format!("{err:#}")
                }));
            }
        }
    }

    // Single successful target => bare feed object, otherwise an envelope.
    let single_ok = args.targets.len() == 1
        && results.first().and_then(|r| r.get("ok")).and_then(|v| v.as_bool()) == Some(true);

    let output = if single_ok {
        results
            .first()
            .and_then(|r| r.get("feed"))
            .cloned()
            .unwrap_or_else(|| json!({}))
    } else {
        let normalized = results
            .iter()
            .filter(|r| r.get("ok").and_then(|v| v.as_bool()) == Some(true))
            .count();
        let failed = results.len() - normalized;
        json!({
            "feeds": results,
            "total_feeds": results.len(),
            "normalized": normalized,
            "failed": failed
        })
    };

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn load_raw_feed(target: &str) -> Result<RawFeed> {
    let bytes = load_bytes(target)?;
    serde_json::from_slice(&bytes).with_context(|| format!("invalid raw document in {target}"))
}

fn load_bytes(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read(path)?)
}
