//! # Paths Subcommand
//!
//! Searches a captured path catalog, the way the mapping editor narrows
//! autocomplete candidates.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mapval_core::{load_document, CatalogPath, PathCatalog};

use crate::{to_json, OutputFormat, EXIT_OK};

/// Arguments for the paths subcommand.
#[derive(Args, Debug)]
pub struct PathsArgs {
    /// Catalog document (JSON or YAML).
    #[arg(long)]
    pub catalog: PathBuf,

    /// Case-insensitive search term; empty lists every path.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the paths subcommand.
pub fn run_paths(args: &PathsArgs) -> Result<u8> {
    let catalog: PathCatalog = load_document(&args.catalog)
        .with_context(|| format!("failed to load catalog: {}", args.catalog.display()))?;
    if !catalog.has_example {
        tracing::warn!("catalog has no captured example payload");
    }
    let hits = catalog.filter(&args.search);
    println!("{}", render_paths(&hits, args.format)?);
    Ok(EXIT_OK)
}

fn render_paths(paths: &[&CatalogPath], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&paths),
        OutputFormat::Text => Ok(paths
            .iter()
            .map(|p| match &p.sample {
                Some(sample) => format!("  {:<40} {:<8} {sample}", p.path, p.kind),
                None => format!("  {:<40} {}", p.path, p.kind),
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
