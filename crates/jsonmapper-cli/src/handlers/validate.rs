//! Validate command handler

use super::utils::load_rules;
use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use jsonmapper_core::{validate_rules, CoercionMode, Severity};

/// Handle the validate command
pub fn handle_validate(args: ValidateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    output.info(&format!("Validating rules: {}", args.rules.display()))?;

    let rules = load_rules(&args.rules)?;
    let mode = if args.type_driven {
        CoercionMode::TypeDriven
    } else {
        config.mapping.coercion_mode
    };

    let issues = validate_rules(&rules, mode);
    let warnings = issues
        .iter()
        .filter(|issue| issue.severity == Severity::Warning)
        .count();

    tracing::info!(
        rules = rules.len(),
        issues = issues.len(),
        warnings,
        coercion_mode = %mode,
        "Rules validated"
    );

    output.rule_issues(&issues)?;

    if args.deny_warnings && warnings > 0 {
        return Err(Error::ValidationFailed { count: warnings });
    }

    Ok(())
}
