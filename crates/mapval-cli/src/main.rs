//! # mapval CLI entry point
//!
//! Parses command-line arguments, loads the validator configuration and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mapval_cli::commit::{run_commit, CommitArgs};
use mapval_cli::paths::{run_paths, PathsArgs};
use mapval_cli::rules::{run_rules, RulesArgs};
use mapval_cli::validate::{run_validate, ValidateArgs};
use mapval_validator::{StructuralValidator, ValidatorConfig};

/// Structural validation for API field-mapping rules.
///
/// Classifies the payload shape implied by a set of mapping rules and
/// reports rules that are inconsistent with it.
#[derive(Parser, Debug)]
#[command(name = "mapval", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a validator configuration file (YAML or JSON).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate saved rules plus an optional draft.
    Validate(ValidateArgs),

    /// Gate a rule for saving and optionally write it to the rules file.
    Commit(CommitArgs),

    /// List saved rules of one direction.
    Rules(RulesArgs),

    /// Search a captured path catalog.
    Paths(PathsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = match &cli.config {
        Some(path) => ValidatorConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => ValidatorConfig::default(),
    };
    tracing::debug!(?config, "validator configuration");
    let validator = StructuralValidator::new(config);

    match cli.command {
        Commands::Validate(args) => run_validate(&args, &validator),
        Commands::Commit(args) => run_commit(&args, &validator),
        Commands::Rules(args) => run_rules(&args),
        Commands::Paths(args) => run_paths(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapval_cli::OutputFormat;
    use mapval_core::Direction;

    #[test]
    fn cli_parse_validate_with_draft() {
        let cli = Cli::try_parse_from([
            "mapval",
            "validate",
            "--rules",
            "rules.json",
            "--draft",
            "draft.yaml",
            "--format",
            "json",
        ])
        .unwrap();
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.rules, PathBuf::from("rules.json"));
            assert_eq!(args.draft, Some(PathBuf::from("draft.yaml")));
            assert_eq!(args.format, OutputFormat::Json);
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_validate_requires_rules() {
        assert!(Cli::try_parse_from(["mapval", "validate"]).is_err());
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mapval", "validate", "--rules", "r.json", "-vv", "--config", "c.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("c.yaml")));
    }

    #[test]
    fn cli_parse_commit() {
        let cli = Cli::try_parse_from([
            "mapval", "commit", "--rules", "r.json", "--rule", "n.json", "--write",
        ])
        .unwrap();
        if let Commands::Commit(args) = cli.command {
            assert!(args.write);
            assert_eq!(args.rule, PathBuf::from("n.json"));
        } else {
            panic!("expected commit");
        }
    }

    #[test]
    fn cli_parse_rules_direction() {
        let cli = Cli::try_parse_from([
            "mapval", "rules", "--rules", "r.json", "--direction", "request", "--search", "id",
        ])
        .unwrap();
        if let Commands::Rules(args) = cli.command {
            assert_eq!(args.direction, Direction::Request);
            assert_eq!(args.search, "id");
        } else {
            panic!("expected rules");
        }
    }

    #[test]
    fn cli_parse_rules_rejects_unknown_direction() {
        assert!(Cli::try_parse_from([
            "mapval", "rules", "--rules", "r.json", "--direction", "sideways",
        ])
        .is_err());
    }

    #[test]
    fn cli_parse_paths_defaults() {
        let cli = Cli::try_parse_from(["mapval", "paths", "--catalog", "c.json"]).unwrap();
        if let Commands::Paths(args) = cli.command {
            assert_eq!(args.search, "");
            assert_eq!(args.format, OutputFormat::Text);
        } else {
            panic!("expected paths");
        }
    }
}
