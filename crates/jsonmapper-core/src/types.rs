//! Core types for jsonmapper
//!
//! This module defines the declarative mapping rule and the closed set of
//! target types a rule can coerce to. Rules deserialize from the JSON rule
//! format:
//!
//! ```json
//! {
//!   "sourceKey": "MATERIAL_INFO.MATERIAL_FILE[IMG_CLS=071]",
//!   "targetKey": "fileList",
//!   "type": "array",
//!   "subMappers": [
//!     { "sourceKey": "type", "targetKey": "type", "defaultValue": "1" }
//!   ]
//! }
//! ```

use crate::mapping::SourcePath;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A JSON-like document; objects keep insertion order
pub type Document = Value;

/// An object-shaped target document
pub type Object = Map<String, Value>;

/// Target type declared by a mapping rule
///
/// Parsed once, trimmed and case-insensitively, when the rule is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum FieldType {
    /// `byte`, `short`, `int`, `integer`, `long`
    Integer,
    /// `double`, `float`
    Floating,
    /// `boolean`, `bool`
    Boolean,
    /// `array`
    Array,
    /// `object`, `json`
    Object,
    /// Any other or missing type; values pass through unchanged
    Passthrough(Option<String>),
}

impl FieldType {
    /// Parse a declared type name
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "byte" | "short" | "int" | "integer" | "long" => FieldType::Integer,
            "double" | "float" => FieldType::Floating,
            "boolean" | "bool" => FieldType::Boolean,
            "array" => FieldType::Array,
            "object" | "json" => FieldType::Object,
            _ => FieldType::Passthrough(Some(name.to_string())),
        }
    }

    /// Array or object, the only types that apply sub-rules
    pub fn is_container(&self) -> bool {
        matches!(self, FieldType::Array | FieldType::Object)
    }

    /// Integer, floating or boolean
    pub fn is_scalar(&self) -> bool {
        matches!(self, FieldType::Integer | FieldType::Floating | FieldType::Boolean)
    }
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Passthrough(None)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Integer => write!(f, "integer"),
            FieldType::Floating => write!(f, "double"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Array => write!(f, "array"),
            FieldType::Object => write!(f, "object"),
            FieldType::Passthrough(Some(name)) => write!(f, "{}", name),
            FieldType::Passthrough(None) => write!(f, "unspecified"),
        }
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<Option<String>> for FieldType {
    fn from(name: Option<String>) -> Self {
        match name {
            Some(name) => Self::parse(&name),
            None => FieldType::Passthrough(None),
        }
    }
}

impl From<FieldType> for Option<String> {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Passthrough(name) => name,
            known => Some(known.to_string()),
        }
    }
}

/// A declarative mapping rule
///
/// Rules form an owned tree through `sub_mappers`; there are no parent
/// links. A rule list is built once and shared read-only between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRule {
    /// Path into the source document
    pub source_key: SourcePath,

    /// Key written in the target object
    pub target_key: String,

    /// Declared target type
    #[serde(rename = "type", default)]
    pub field_type: FieldType,

    /// Substituted when the source path resolves to nothing; `null` means unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    /// Rules applied to nested objects for `array` and `object` types
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sub_mappers: Vec<MappingRule>,
}

impl MappingRule {
    /// Create a passthrough rule copying `source_key` to `target_key`
    pub fn new(source_key: impl Into<SourcePath>, target_key: impl Into<String>) -> Self {
        Self {
            source_key: source_key.into(),
            target_key: target_key.into(),
            field_type: FieldType::default(),
            default_value: None,
            sub_mappers: Vec::new(),
        }
    }

    /// Set the declared type
    pub fn with_type(mut self, field_type: impl Into<FieldType>) -> Self {
        self.field_type = field_type.into();
        self
    }

    /// Set the default value; `null` clears it
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.default_value = (!value.is_null()).then_some(value);
        self
    }

    /// Set the nested rules
    pub fn with_sub_mappers(mut self, sub_mappers: Vec<MappingRule>) -> Self {
        self.sub_mappers = sub_mappers;
        self
    }

    /// The default value, if one is set and not `null`
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref().filter(|value| !value.is_null())
    }

    /// Whether nested rules are declared
    pub fn has_sub_mappers(&self) -> bool {
        !self.sub_mappers.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<MappingRule>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<MappingRule>>::deserialize(deserializer)?.unwrap_or_default())
}
