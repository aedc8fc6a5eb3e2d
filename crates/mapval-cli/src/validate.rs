//! # Validate Subcommand
//!
//! Runs the structural validator over a rules file and an optional draft
//! and prints the result.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use mapval_core::{load_document, MappingRule, MappingSet};
use mapval_validator::{StructuralValidator, ValidationResult};

use crate::{to_json, OutputFormat, EXIT_OK, EXIT_REJECTED};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Saved rules (JSON or YAML array).
    #[arg(long)]
    pub rules: PathBuf,

    /// Rule being created or edited.
    #[arg(long)]
    pub draft: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, validator: &StructuralValidator) -> Result<u8> {
    let result = validate_files(validator, &args.rules, args.draft.as_deref())?;
    println!("{}", render_result(&result, args.format)?);
    Ok(if result.valid { EXIT_OK } else { EXIT_REJECTED })
}

/// Load the inputs and validate them.
pub fn validate_files(
    validator: &StructuralValidator,
    rules: &Path,
    draft: Option<&Path>,
) -> Result<ValidationResult> {
    let set: MappingSet = load_document(rules)
        .with_context(|| format!("failed to load rules: {}", rules.display()))?;
    let draft: Option<MappingRule> = draft
        .map(|p| {
            load_document(p).with_context(|| format!("failed to load draft: {}", p.display()))
        })
        .transpose()?;

    tracing::info!(rules = set.len(), draft = draft.is_some(), "validating mapping rules");
    Ok(validator.validate(set.rules(), draft.as_ref()))
}

/// Render a result for the terminal.
pub fn render_result(result: &ValidationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(result),
        OutputFormat::Text => {
            let mut out = format!(
                "{}: {} ({})",
                if result.valid { "VALID" } else { "INVALID" },
                result.scenario,
                result.scenario.describe()
            );
            for e in &result.errors {
                out.push_str(&format!("\n  error   {}: {}", e.kind, e.message));
                if let Some(s) = &e.suggestion {
                    out.push_str(&format!("\n          suggestion: {s}"));
                }
            }
            for w in &result.warnings {
                out.push_str(&format!("\n  warning {}: {}", w.kind, w.message));
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn validates_json_rules_and_yaml_draft() {
        let rules = write(
            ".json",
            r#"[{"direction":"response","sourcePath":"status","targetPath":"situacao"}]"#,
        );
        let draft = write(
            ".yaml",
            "direction: response\nsourcePath: object[*].id\ntargetPath: id\n",
        );
        let result = validate_files(
            &StructuralValidator::default(),
            rules.path(),
            Some(draft.path()),
        )
        .unwrap();
        assert!(!result.valid);

        let text = render_result(&result, OutputFormat::Text).unwrap();
        assert!(text.starts_with("INVALID: object_with_arrays"));
        assert!(text.contains("suggestion: items[*].id"));
    }

    #[test]
    fn valid_without_draft() {
        let rules = write(
            ".json",
            r#"[{"direction":"response","sourcePath":"records[*].id","targetPath":"id"}]"#,
        );
        let result =
            validate_files(&StructuralValidator::default(), rules.path(), None).unwrap();
        assert!(result.valid);
        let json = render_result(&result, OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["scenario"], "array_root");
    }

    #[test]
    fn missing_rules_file_is_an_error() {
        let err = validate_files(
            &StructuralValidator::default(),
            Path::new("/nonexistent/rules.json"),
            None,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("failed to load rules"));
    }
}
