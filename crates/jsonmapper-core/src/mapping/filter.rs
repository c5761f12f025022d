//! Equality filters for array selectors
//!
//! A filter condition is a `&`-separated list of `key=value` clauses. An
//! element matches when it is an object and every clause holds, comparing
//! the field's string rendering to the expected value case-insensitively.
//! Malformed clauses reject every element rather than raising an error.
//!
//! Copyright (c) 2025 jsonmapper contributors
//! Licensed under the Apache-2.0 license

use super::coerce::render;
use super::path::split_dropping_trailing_empty;
use serde_json::Value;

/// A single `key=value` clause of a filter condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Field `key` must render as `value`, ignoring case
    Equals { key: String, value: String },
    /// Missing `=`, missing value, or empty key
    Malformed(String),
}

impl Clause {
    /// Parse every clause of a filter condition
    pub fn parse_all(condition: &str) -> Vec<Clause> {
        split_dropping_trailing_empty(condition, '&')
            .into_iter()
            .map(Clause::parse)
            .collect()
    }

    fn parse(raw: &str) -> Clause {
        let parts = split_dropping_trailing_empty(raw, '=');
        if parts.len() < 2 {
            return Clause::Malformed(raw.to_string());
        }

        let key = parts[0].trim();
        if key.is_empty() {
            return Clause::Malformed(raw.to_string());
        }

        // Anything after a second '=' is ignored
        Clause::Equals {
            key: key.to_string(),
            value: parts[1].to_string(),
        }
    }

    fn holds(&self, element: &serde_json::Map<String, Value>) -> bool {
        match self {
            Clause::Malformed(_) => false,
            Clause::Equals { key, value } => match element.get(key) {
                None | Some(Value::Null) => false,
                Some(field) => eq_ignore_case(&render(field), value),
            },
        }
    }
}

/// Check whether `element` satisfies all `clauses`
pub fn matches(element: &Value, clauses: &[Clause]) -> bool {
    match element.as_object() {
        Some(object) => clauses.iter().all(|clause| clause.holds(object)),
        None => false,
    }
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.eq_ignore_ascii_case(right)
        || left
            .chars()
            .flat_map(char::to_lowercase)
            .eq(right.chars().flat_map(char::to_lowercase))
}
