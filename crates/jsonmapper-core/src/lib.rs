//! jsonmapper core - rule-driven transformation of JSON documents
//!
//! This crate converts one JSON-like document into another using a
//! declarative list of [`MappingRule`]s. Each rule names a source path, a
//! target key, a target type and optional nested rules.
//!
//! # Main Components
//!
//! - **Path Resolver**: dotted paths with array index and filter selectors
//! - **Mapping Engine**: default fallback, type coercion and recursive rules
//! - **Rule Loading**: the JSON rule format via `serde`
//! - **Validation**: static checks over rule trees
//!
//! # Example
//!
//! ```
//! use jsonmapper_core::{convert, MappingRule, Result};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let source = json!({"list": [{"a": "1"}, {"a": "2"}]});
//!     let rules = vec![MappingRule::new("list", "items")
//!         .with_type("array")
//!         .with_sub_mappers(vec![MappingRule::new("a", "n").with_type("int")])];
//!
//!     let target = convert(&source, &rules)?;
//!     assert_eq!(target, json!({"items": [{"n": "1"}, {"n": "2"}]}));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod mapping;
pub mod rules;
pub mod types;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use error::{Error, Result, Severity};
pub use mapping::{
    convert, convert_into, resolve, validate_rules,
    CoercionMode, IssueCode, Mapper, MapperOptions, RuleIssue, SourcePath,
};
pub use types::{Document, FieldType, MappingRule, Object};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Mapper>();
        assert_send_sync::<MappingRule>();
        assert_send_sync::<SourcePath>();
    }
}
