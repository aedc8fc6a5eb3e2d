//! # Rules Subcommand
//!
//! Lists the saved rules of one direction, optionally narrowed by a
//! case-insensitive search over source and target paths.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mapval_core::{load_document, Direction, MappingRule, MappingSet};

use crate::{to_json, OutputFormat, EXIT_OK};

/// Arguments for the rules subcommand.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Saved rules (JSON or YAML array).
    #[arg(long)]
    pub rules: PathBuf,

    /// Direction to list (`request` or `response`).
    #[arg(long, default_value = "response")]
    pub direction: Direction,

    /// Search term matched against source and target paths.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the rules subcommand.
pub fn run_rules(args: &RulesArgs) -> Result<u8> {
    let set: MappingSet = load_document(&args.rules)
        .with_context(|| format!("failed to load rules: {}", args.rules.display()))?;
    let hits = set.search(args.direction, &args.search);
    println!("{}", render_rules(&hits, args.format)?);
    Ok(EXIT_OK)
}

fn render_rules(rules: &[&MappingRule], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&rules),
        OutputFormat::Text => {
            let mut lines: Vec<String> = rules
                .iter()
                .map(|r| format!("  {:<32} -> {}", r.source_path, r.target_path))
                .collect();
            lines.push(format!("Total: {} mappings", rules.len()));
            Ok(lines.join("\n"))
        }
    }
}
