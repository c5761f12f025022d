//! Path resolution and the rule-driven mapping engine
//!
//! - [`path`] - compiled source paths and their resolution
//! - [`filter`] - `key=value` filters for array selectors
//! - [`coerce`] - scalar coercions
//! - [`engine`] - the [`Mapper`] applying rule lists
//! - [`validator`] - static checks over rule trees
//!
//! Copyright (c) 2025 jsonmapper contributors
//! Licensed under the Apache-2.0 license

pub mod coerce;
pub mod engine;
pub mod filter;
pub mod path;
pub mod validator;


pub use engine::{CoercionMode, Mapper, MapperOptions};
pub use filter::Clause;
pub use path::{Segment, Selector, SourcePath};
pub use validator::{validate_rules, IssueCode, RuleIssue};

use crate::types::{MappingRule, Object};
use crate::Result;
use serde_json::Value;

/// Convert `source` with default options
pub fn convert(source: &Value, rules: &[MappingRule]) -> Result<Value> {
    Mapper::new().convert(source, rules)
}

/// Merge the conversion of `source` into `target` with default options
pub fn convert_into(source: &Value, rules: &[MappingRule], target: &mut Object) -> Result<()> {
    Mapper::new().convert_into(source, rules, target)
}

/// Resolve a path expression against `source`
pub fn resolve<'a>(source: &'a Value, path: &str) -> Option<&'a Value> {
    SourcePath::parse(path).resolve(source)
}
