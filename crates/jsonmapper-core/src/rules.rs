//! Loading rule lists from their JSON form
//!
//! A rule file is a JSON array of rule objects. Errors name the offending
//! rule's position so a long rule file can be fixed without guessing.

use crate::types::MappingRule;
use crate::{Error, Result};
use serde_json::Value;

/// Parse a rule list from JSON text
pub fn from_json_str(text: &str) -> Result<Vec<MappingRule>> {
    let value: Value = serde_json::from_str(text)?;
    from_value(value)
}

/// Build a rule list from an already parsed document
pub fn from_value(value: Value) -> Result<Vec<MappingRule>> {
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(Error::RuleDefinition {
                message: format!("expected an array of rules, found {}", kind_of(&other)),
                location: None,
            })
        }
    };

    let rules = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|e| Error::RuleDefinition {
                message: e.to_string(),
                location: Some(format!("rules[{}]", index)),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = rules.len(), "Loaded mapping rules");
    Ok(rules)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
