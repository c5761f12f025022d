//! Scalar coercions applied by the mapping engine
//!
//! Every coercion works on the value's string rendering: strings render as
//! their contents, anything else as compact JSON. Numeric parses fail hard;
//! the boolean parse is lenient and never fails.
//!
//! Copyright (c) 2025 jsonmapper contributors
//! Licensed under the Apache-2.0 license

use crate::types::MappingRule;
use crate::{Error, Result};
use serde_json::{Number, Value};
use std::borrow::Cow;

/// String rendering of a value as used by filters and coercions
pub fn render(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Parse the value as a base-10 integer
pub fn integer(value: &Value, rule: &MappingRule) -> Result<Value> {
    render(value)
        .parse::<i64>()
        .map(Value::from)
        .map_err(|e| failure(value, rule, e.to_string()))
}

/// Parse the value as a finite floating-point number
pub fn floating(value: &Value, rule: &MappingRule) -> Result<Value> {
    let parsed = render(value)
        .trim()
        .parse::<f64>()
        .map_err(|e| failure(value, rule, e.to_string()))?;

    Number::from_f64(parsed)
        .map(Value::Number)
        .ok_or_else(|| failure(value, rule, "value is not a finite number".to_string()))
}

/// `true` only for a case-insensitive `"true"`; everything else is `false`
pub fn boolean(value: &Value) -> Value {
    Value::Bool(render(value).eq_ignore_ascii_case("true"))
}

fn failure(value: &Value, rule: &MappingRule, reason: String) -> Error {
    Error::Coercion {
        source_key: rule.source_key.to_string(),
        target_key: rule.target_key.clone(),
        field_type: rule.field_type.to_string(),
        value: value.to_string(),
        reason,
    }
}
