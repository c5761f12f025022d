//! Static checks over a rule tree
//!
//! Validation never rejects a rule set; every rule set is applicable. It
//! reports rules whose effect probably differs from what their author
//! intended, given the coercion mode they will run under.

use super::engine::CoercionMode;
use crate::error::Severity;
use crate::types::MappingRule;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of issue found in a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// `sourceKey` has no usable segment
    EmptySourceKey,
    /// `targetKey` is empty
    EmptyTargetKey,
    /// Sub-rules on a type that never applies them
    IgnoredSubMappers,
    /// Declared type is not applied because no sub-rules are declared
    CoercionSkipped,
    /// Container type without sub-rules copies nested objects unchanged
    ContainerWithoutSubMappers,
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            IssueCode::EmptySourceKey => "empty_source_key",
            IssueCode::EmptyTargetKey => "empty_target_key",
            IssueCode::IgnoredSubMappers => "ignored_sub_mappers",
            IssueCode::CoercionSkipped => "coercion_skipped",
            IssueCode::ContainerWithoutSubMappers => "container_without_sub_mappers",
        };
        f.write_str(code)
    }
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleIssue {
    pub code: IssueCode,
    pub severity: Severity,
    /// Location in the rule tree, e.g. `rules[2].subMappers[0]`
    pub location: String,
    pub message: String,
}

/// Check every rule, depth first
pub fn validate_rules(rules: &[MappingRule], mode: CoercionMode) -> Vec<RuleIssue> {
    let mut issues = Vec::new();
    for (index, rule) in rules.iter().enumerate() {
        check_rule(rule, &format!("rules[{}]", index), mode, &mut issues);
    }
    issues
}

fn check_rule(rule: &MappingRule, location: &str, mode: CoercionMode, issues: &mut Vec<RuleIssue>) {
    let mut report = |code, severity, message: String| {
        issues.push(RuleIssue {
            code,
            severity,
            location: location.to_string(),
            message,
        });
    };

    if rule.source_key.is_empty() {
        report(
            IssueCode::EmptySourceKey,
            Severity::Warning,
            "sourceKey has no segments; the rule only ever writes its default value".to_string(),
        );
    }

    if rule.target_key.is_empty() {
        report(
            IssueCode::EmptyTargetKey,
            Severity::Warning,
            "targetKey is empty; values are written under the empty key".to_string(),
        );
    }

    let declared = &rule.field_type;
    match (rule.has_sub_mappers(), declared.is_container()) {
        (true, false) => report(
            IssueCode::IgnoredSubMappers,
            Severity::Warning,
            format!("subMappers are never applied for type '{}'", declared),
        ),
        (false, false) if !declared.is_scalar() => {}
        (false, is_container) => match mode {
            CoercionMode::Compatible => report(
                IssueCode::CoercionSkipped,
                Severity::Warning,
                format!(
                    "type '{}' is not applied without subMappers; the value passes through unchanged",
                    declared
                ),
            ),
            CoercionMode::TypeDriven if is_container => report(
                IssueCode::ContainerWithoutSubMappers,
                Severity::Info,
                format!("type '{}' without subMappers copies nested objects unchanged", declared),
            ),
            CoercionMode::TypeDriven => {}
        },
        (true, true) => {}
    }

    for (index, sub) in rule.sub_mappers.iter().enumerate() {
        check_rule(sub, &format!("{}.subMappers[{}]", location, index), mode, issues);
    }
}
