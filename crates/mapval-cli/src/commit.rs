//! # Commit Subcommand
//!
//! Runs the save gate for one rule against the saved set. On acceptance
//! prints the updated set and, with `--write`, rewrites the rules file in
//! the format its extension names. On rejection prints each diagnostic with its suggestion.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mapval_core::{load_document, save_document, MappingRule, MappingSet};
use mapval_validator::{commit, GateError, StructuralValidator};

use crate::validate::render_result;
use crate::{to_json, OutputFormat, EXIT_OK, EXIT_REJECTED};

/// Arguments for the commit subcommand.
#[derive(Args, Debug)]
pub struct CommitArgs {
    /// Saved rules (JSON or YAML array).
    #[arg(long)]
    pub rules: PathBuf,

    /// Rule to save. An `id` matching a saved rule replaces it.
    #[arg(long)]
    pub rule: PathBuf,

    /// Rewrite the rules file with the updated set.
    #[arg(long)]
    pub write: bool,
}

/// Outcome of a gate run, before printing.
#[derive(Debug)]
pub enum CommitOutcome {
    Accepted(MappingSet),
    Rejected(GateError),
}

/// Execute the commit subcommand.
pub fn run_commit(args: &CommitArgs, validator: &StructuralValidator) -> Result<u8> {
    match commit_files(args, validator)? {
        CommitOutcome::Accepted(set) => {
            println!("{}", to_json(&set)?);
            Ok(EXIT_OK)
        }
        CommitOutcome::Rejected(GateError::Rejected { result }) => {
            println!("{}", render_result(&result, OutputFormat::Text)?);
            Ok(EXIT_REJECTED)
        }
        CommitOutcome::Rejected(err) => {
            println!("{err}");
            Ok(EXIT_REJECTED)
        }
    }
}

/// Load inputs, run the gate, and persist on acceptance when asked to.
pub fn commit_files(args: &CommitArgs, validator: &StructuralValidator) -> Result<CommitOutcome> {
    let mut set: MappingSet = load_document(&args.rules)
        .with_context(|| format!("failed to load rules: {}", args.rules.display()))?;
    let rule: MappingRule = load_document(&args.rule)
        .with_context(|| format!("failed to load rule: {}", args.rule.display()))?;

    match commit(validator, &mut set, rule) {
        Ok(result) => {
            tracing::info!(scenario = %result.scenario, rules = set.len(), "mapping accepted");
            if args.write {
                save_document(&args.rules, &set)
                    .with_context(|| format!("failed to write rules: {}", args.rules.display()))?;
            }
            Ok(CommitOutcome::Accepted(set))
        }
        Err(err) => Ok(CommitOutcome::Rejected(err)),
    }
}
