//! Rule-driven conversion of one document into another
//!
//! For every rule, in order, the engine resolves the rule's source path,
//! falls back to the rule's default value, coerces the result to the
//! declared type and writes it under the target key. Rules whose source
//! resolves to nothing and that carry no default are skipped entirely.
//!
//! Copyright (c) 2025 jsonmapper contributors
//! Licensed under the Apache-2.0 license

use super::coerce;
use crate::types::{FieldType, MappingRule, Object};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, trace};

/// Decides when a rule's declared type is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoercionMode {
    /// Coerce only rules that declare sub-rules. Scalar rules without
    /// sub-rules pass their value through unchanged.
    #[default]
    Compatible,
    /// Coerce every rule according to its declared type
    TypeDriven,
}

impl fmt::Display for CoercionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionMode::Compatible => write!(f, "compatible"),
            CoercionMode::TypeDriven => write!(f, "type_driven"),
        }
    }
}

/// Options controlling a [`Mapper`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperOptions {
    /// When declared types are applied
    pub coercion_mode: CoercionMode,
}

/// Applies mapping rules to source documents
///
/// A mapper holds no per-call state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    options: MapperOptions,
}

impl Mapper {
    /// Create a mapper with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with the given options
    pub fn with_options(options: MapperOptions) -> Self {
        Self { options }
    }

    /// Set the coercion mode
    pub fn coercion_mode(mut self, mode: CoercionMode) -> Self {
        self.options.coercion_mode = mode;
        self
    }

    /// Current options
    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Convert `source` into a fresh object.
    ///
    /// With no rules the result is a deep copy of `source`.
    pub fn convert(&self, source: &Value, rules: &[MappingRule]) -> Result<Value> {
        if rules.is_empty() {
            return Ok(source.clone());
        }

        let mut target = Map::new();
        self.convert_into(source, rules, &mut target)?;
        Ok(Value::Object(target))
    }

    /// Apply `rules` to `source`, merging the results into `target`.
    ///
    /// Later rules overwrite earlier ones writing the same target key. On a
    /// coercion failure `target` keeps whatever earlier rules wrote.
    pub fn convert_into(
        &self,
        source: &Value,
        rules: &[MappingRule],
        target: &mut Object,
    ) -> Result<()> {
        for rule in rules {
            let value = match self.resolve_with_default(source, rule) {
                Some(value) => value,
                None => {
                    debug!(
                        source_key = %rule.source_key,
                        target_key = %rule.target_key,
                        "No value and no default, skipping rule"
                    );
                    continue;
                }
            };

            let value = self.coerce(value, rule)?;
            target.insert(rule.target_key.clone(), value);
        }

        Ok(())
    }

    fn resolve_with_default<'a>(&self, source: &'a Value, rule: &'a MappingRule) -> Option<&'a Value> {
        rule.source_key.resolve(source).or_else(|| {
            let default = rule.default_value();
            if default.is_some() {
                debug!(
                    source_key = %rule.source_key,
                    target_key = %rule.target_key,
                    "Source path absent, using default value"
                );
            }
            default
        })
    }

    fn should_coerce(&self, rule: &MappingRule) -> bool {
        match self.options.coercion_mode {
            CoercionMode::Compatible => rule.has_sub_mappers(),
            CoercionMode::TypeDriven => true,
        }
    }

    fn coerce(&self, value: &Value, rule: &MappingRule) -> Result<Value> {
        if !self.should_coerce(rule) {
            return Ok(value.clone());
        }

        trace!(
            target_key = %rule.target_key,
            field_type = %rule.field_type,
            "Coercing value"
        );

        match &rule.field_type {
            FieldType::Integer => coerce::integer(value, rule),
            FieldType::Floating => coerce::floating(value, rule),
            FieldType::Boolean => Ok(coerce::boolean(value)),
            FieldType::Array => self.coerce_array(value, &rule.sub_mappers),
            FieldType::Object if value.is_object() => self.convert(value, &rule.sub_mappers),
            FieldType::Object | FieldType::Passthrough(_) => Ok(value.clone()),
        }
    }

    fn coerce_array(&self, value: &Value, sub_mappers: &[MappingRule]) -> Result<Value> {
        let elements = match value {
            Value::Array(elements) => elements
                .iter()
                .map(|element| {
                    if element.is_object() {
                        self.convert(element, sub_mappers)
                    } else {
                        Ok(element.clone())
                    }
                })
                .collect::<Result<Vec<_>>>()?,
            Value::Object(_) => vec![self.convert(value, sub_mappers)?],
            scalar => vec![scalar.clone()],
        };

        Ok(Value::Array(elements))
    }
}
