//! # mapval-cli: Command-Line Interface
//!
//! Provides the `mapval` binary. Argument parsing lives here; every
//! decision is delegated to `mapval-validator` and `mapval-core`.
//!
//! ## Subcommands
//!
//! - `mapval validate`: classify a rule set (plus draft) and print diagnostics.
//! - `mapval commit`: run the save gate for one rule, optionally rewriting
//!   the rules file.
//! - `mapval rules`: list the rules of one direction, filtered by a term.
//! - `mapval paths`: search a captured path catalog.
//!
//! ```bash
//! mapval validate --rules mappings.json --draft draft.json --format json
//! mapval commit --rules mappings.yaml --rule new.yaml --write
//! ```
//!
//! ## Exit Codes
//!
//! `0` success, `1` runtime error, `2` validation failed or commit rejected.

pub mod commit;
pub mod paths;
pub mod rules;
pub mod validate;

use clap::ValueEnum;

/// Exit code for a run that completed and found nothing wrong.
pub const EXIT_OK: u8 = 0;

/// Exit code when validation failed or the gate rejected a rule.
pub const EXIT_REJECTED: u8 = 2;

/// How results are printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON matching the library's wire format.
    Json,
}

/// Render `value` as pretty JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
