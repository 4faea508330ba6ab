//! Print a resolved INI file as JSON.

use anyhow::{Context, anyhow};
use clap::Parser;
use ininest_rs::IniTree;
use log::{LevelFilter, debug, info};
use std::path::PathBuf;

/// Command-line options for the `ininest` tool.
#[derive(Parser)]
#[command(name = "ininest", version)]
struct Cli {
    /// INI file to resolve
    file: PathBuf,
    /// Print only the node at this dotted path (e.g. `production.db.host`)
    #[arg(long)]
    get: Option<String>,
    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::builder()
        .format_timestamp_millis()
        .filter_level(level)
        .parse_default_env()
        .try_init();

    info!(
        "resolving {} (get_set={}, compact={})",
        cli.file.display(),
        cli.get.is_some(),
        cli.compact
    );
    let tree = IniTree::load_from_path(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;

    let node = match cli.get.as_deref() {
        Some(path) => tree
            .get(path)
            .ok_or_else(|| anyhow!("no value at '{path}'"))?,
        None => tree.root(),
    };
    debug!("serializing node (object={})", node.is_object());

    let output = if cli.compact {
        serde_json::to_string(node)
    } else {
        serde_json::to_string_pretty(node)
    }
    .context("failed to serialize config")?;
    println!("{output}");
    Ok(())
}
