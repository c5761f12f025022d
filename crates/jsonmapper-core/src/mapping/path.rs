//! Source path expressions and their resolution against a document
//!
//! A source path is a `.`-separated list of segments. Each segment is either
//! a plain key (`name`) or a key followed by an array selector
//! (`name[condition]`):
//!
//! | condition        | result                                               |
//! |------------------|------------------------------------------------------|
//! | blank            | first element of the array                           |
//! | digits           | element at that 0-based index                        |
//! | `k1=v1&k2=v2`    | first object element whose fields all match          |
//! | anything else    | the value under `name`, as if no selector were given |
//!
//! Resolution is total: missing keys, empty arrays, out-of-range indexes and
//! values of the wrong shape all resolve to `None`.
//!
//! Copyright (c) 2025 jsonmapper contributors
//! Licensed under the Apache-2.0 license

use super::filter::{self, Clause};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A compiled source path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SourcePath {
    raw: String,
    segments: Vec<Segment>,
}

/// One `.`-separated step of a source path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Key looked up in the current object
    pub name: String,
    /// Array selector, when the segment carries a `[...]` suffix
    pub selector: Option<Selector>,
}

/// Array selector carried by a segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `name[]`
    First,
    /// `name[3]`
    Index(usize),
    /// `name[type=home&primary=true]`
    Filter(Vec<Clause>),
    /// Unrecognised condition; yields the whole array when it is non-empty
    Fallback,
}

impl SourcePath {
    /// Compile a path expression. Never fails: malformed selectors degrade to
    /// lookups that resolve to `None` or ignore the selector.
    pub fn parse(path: &str) -> Self {
        let segments = split_dropping_trailing_empty(path, '.')
            .into_iter()
            .map(Segment::parse)
            .collect();

        Self {
            raw: path.to_string(),
            segments,
        }
    }

    /// Resolve the path against `source`
    pub fn resolve<'a>(&self, source: &'a Value) -> Option<&'a Value> {
        if self.segments.is_empty() {
            return None;
        }

        let resolved = self
            .segments
            .iter()
            .try_fold(source, |current, segment| segment.lookup(current));

        tracing::trace!(
            path = %self.raw,
            found = resolved.is_some(),
            "Resolved source path"
        );

        resolved
    }

    /// The expression this path was compiled from
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Compiled segments, in walk order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the expression contains no usable segment
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl Segment {
    fn parse(raw: &str) -> Self {
        if raw.ends_with(']') {
            if let Some(open) = raw.find('[') {
                let rest = &raw[open + 1..];
                // `rest` ends with ']', so a closing bracket is always found
                let condition = rest.find(']').map_or(rest, |close| &rest[..close]);
                return Self {
                    name: raw[..open].to_string(),
                    selector: Some(Selector::parse(condition)),
                };
            }
        }

        Self {
            name: raw.to_string(),
            selector: None,
        }
    }

    /// Apply this segment to the current value, which must be an object
    fn lookup<'a>(&self, current: &'a Value) -> Option<&'a Value> {
        let object = current.as_object()?;

        match &self.selector {
            None => object.get(&self.name),
            // Unrecognised selectors still require a non-empty array
            Some(Selector::Fallback) => match self.elements(object)? {
                elements if elements.is_empty() => None,
                _ => object.get(&self.name),
            },
            Some(Selector::First) => self.elements(object)?.first(),
            Some(Selector::Index(index)) => self.elements(object)?.get(*index),
            Some(Selector::Filter(clauses)) => self
                .elements(object)?
                .iter()
                .find(|element| filter::matches(element, clauses)),
        }
    }

    fn elements<'a>(&self, object: &'a Map<String, Value>) -> Option<&'a Vec<Value>> {
        object.get(&self.name)?.as_array()
    }
}

impl Selector {
    fn parse(condition: &str) -> Self {
        if condition.trim().is_empty() {
            Selector::First
        } else if condition.bytes().all(|b| b.is_ascii_digit()) {
            // An index too large for usize is out of range for any array
            Selector::Index(condition.parse().unwrap_or(usize::MAX))
        } else if condition.contains('=') {
            Selector::Filter(Clause::parse_all(condition))
        } else {
            Selector::Fallback
        }
    }
}

/// Split on `separator`, dropping trailing empty pieces.
///
/// Input without any separator is returned whole, so `""` yields `[""]`
/// while `"..."` yields nothing.
pub(crate) fn split_dropping_trailing_empty(input: &str, separator: char) -> Vec<&str> {
    if !input.contains(separator) {
        return vec![input];
    }

    let mut pieces: Vec<&str> = input.split(separator).collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces
}

impl From<String> for SourcePath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&str> for SourcePath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<SourcePath> for String {
    fn from(path: SourcePath) -> Self {
        path.raw
    }
}

impl FromStr for SourcePath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
        SourcePath::parse(path).resolve(data)
    }

    #[test]
    fn test_simple_dot_notation() {
        let data = json!({"a": {"b": {"c": 42}}});

        assert_eq!(resolve(&data, "a.b.c"), Some(&json!(42)));
        assert_eq!(resolve(&data, "a.b"), Some(&json!({"c": 42})));
        assert_eq!(resolve(&data, "a.x"), None);
    }

    #[test]
    fn test_index_brackets() {
        let data = json!({"items": ["x", "y", "z"]});

        assert_eq!(resolve(&data, "items[1]"), Some(&json!("y")));
        assert_eq!(resolve(&data, "items[]"), Some(&json!("x")));
        assert_eq!(resolve(&data, "items[  ]"), Some(&json!("x")));
        assert_eq!(resolve(&data, "items[5]"), None);
        assert_eq!(resolve(&data, "items[99999999999999999999999]"), None);
    }

    #[test]
    fn test_empty_array_is_absent() {
        let data = json!({"items": []});

        assert_eq!(resolve(&data, "items[]"), None);
        assert_eq!(resolve(&data, "items[0]"), None);
        assert_eq!(resolve(&data, "items"), Some(&json!([])));
    }

    #[test]
    fn test_selector_on_non_array_is_absent() {
        let data = json!({"items": {"a": 1}, "name": "x"});

        assert_eq!(resolve(&data, "items[]"), None);
        assert_eq!(resolve(&data, "name[0]"), None);
        assert_eq!(resolve(&data, "missing[]"), None);
    }

    #[test]
    fn test_filter_first_match_case_insensitive() {
        let data = json!({"list": [{"k": "a", "n": 1}, {"k": "A", "n": 2}, {"k": "b", "n": 3}]});

        assert_eq!(resolve(&data, "list[k=a]"), Some(&json!({"k": "a", "n": 1})));
        assert_eq!(resolve(&data, "list[k=B].n"), Some(&json!(3)));
        assert_eq!(resolve(&data, "list[k=c]"), None);
    }

    #[test]
    fn test_filter_multiple_clauses() {
        let data = json!({"files": [
            {"cls": "071", "kind": "img", "name": "first"},
            {"cls": "071", "kind": "pdf", "name": "second"},
        ]});

        assert_eq!(resolve(&data, "files[cls=071&kind=PDF].name"), Some(&json!("second")));
        assert_eq!(resolve(&data, "files[cls=072&kind=pdf]"), None);
    }

    #[test]
    fn test_filter_compares_string_rendering() {
        let data = json!({"list": [{"id": 7, "on": true}, {"id": 8, "on": false}]});

        assert_eq!(resolve(&data, "list[id=8]"), Some(&json!({"id": 8, "on": false})));
        assert_eq!(resolve(&data, "list[on=TRUE].id"), Some(&json!(7)));
    }

    #[test]
    fn test_malformed_clause_never_matches() {
        let data = json!({"list": [{"k": "a"}]});

        assert_eq!(resolve(&data, "list[k=a&bogus]"), None);
        assert_eq!(resolve(&data, "list[=a]"), None);
        assert_eq!(resolve(&data, "list[k=]"), None);
    }

    #[test]
    fn test_invalid_condition_returns_whole_array() {
        let data = json!({"list": [{"k": "a"}], "scalar": "s", "empty": [], "obj": {"a": 1}});

        assert_eq!(resolve(&data, "list[abc]"), Some(&json!([{"k": "a"}])));
        assert_eq!(resolve(&data, "scalar[-1]"), None);
        assert_eq!(resolve(&data, "empty[abc]"), None);
        assert_eq!(resolve(&data, "obj[abc]"), None);
        assert_eq!(resolve(&data, "missing[abc]"), None);
    }

    #[test]
    fn test_walking_through_scalar_is_absent() {
        let data = json!({"a": "text", "b": [1, 2]});

        assert_eq!(resolve(&data, "a.b"), None);
        assert_eq!(resolve(&data, "b.c"), None);
        assert_eq!(resolve(&json!("root"), "a"), None);
    }

    #[test]
    fn test_present_null_is_not_absent() {
        let data = json!({"a": null});

        assert_eq!(resolve(&data, "a"), Some(&Value::Null));
        assert_eq!(resolve(&data, "a.b"), None);
    }

    #[test]
    fn test_trailing_dots_and_empty_paths() {
        let data = json!({"a": 1, "": 2});

        assert_eq!(resolve(&data, "a."), Some(&json!(1)));
        assert_eq!(resolve(&data, ""), Some(&json!(2)));
        assert_eq!(resolve(&data, "..."), None);
        assert!(SourcePath::parse("...").is_empty());
        assert!(!SourcePath::parse("").is_empty());
    }

    #[test]
    fn test_segment_parsing() {
        let path = SourcePath::parse("a.b[].c[2].d[x=1&y=2].e[?]");
        let selectors: Vec<_> = path.segments().iter().map(|s| s.selector.clone()).collect();

        assert_eq!(path.segments()[1].name, "b");
        assert_eq!(selectors[0], None);
        assert_eq!(selectors[1], Some(Selector::First));
        assert_eq!(selectors[2], Some(Selector::Index(2)));
        assert!(matches!(selectors[3], Some(Selector::Filter(ref c)) if c.len() == 2));
        assert_eq!(selectors[4], Some(Selector::Fallback));
    }

    #[test]
    fn test_serde_round_trips_raw_expression() {
        let path: SourcePath = serde_json::from_value(json!("a.b[0]")).unwrap();
        assert_eq!(path.as_str(), "a.b[0]");
        assert_eq!(serde_json::to_value(&path).unwrap(), json!("a.b[0]"));
    }
}
