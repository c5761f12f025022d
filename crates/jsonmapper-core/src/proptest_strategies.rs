//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random
//! documents, path expressions and rule trees.

#![cfg(test)]

use crate::types::MappingRule;
use proptest::collection::{hash_map, vec};
use proptest::option;
use proptest::prelude::*;
use serde_json::Value;

/// Strategy for generating keys that never contain path syntax
pub fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}"
}

/// Strategy for generating JSON values with controlled depth
pub fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ];

    leaf.prop_recursive(
        3,  // max depth
        24, // max size
        5,  // items per collection
        |inner| {
            prop_oneof![
                vec(inner.clone(), 0..5).prop_map(Value::Array),
                hash_map(key_strategy(), inner, 0..5)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        },
    )
}

/// Strategy for generating object-shaped source documents
pub fn object_strategy() -> impl Strategy<Value = Value> {
    hash_map(key_strategy(), json_value_strategy(), 0..6)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

/// Strategy for generating arbitrary path expressions, well-formed or not
pub fn path_strategy() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        key_strategy(),
        key_strategy().prop_map(|k| format!("{}[]", k)),
        (key_strategy(), 0usize..6).prop_map(|(k, i)| format!("{}[{}]", k, i)),
        (key_strategy(), key_strategy(), "[a-zA-Z0-9]{0,4}")
            .prop_map(|(k, f, v)| format!("{}[{}={}]", k, f, v)),
        "[a-zA-Z0-9\\[\\]=&]{0,10}",
    ];

    vec(segment, 1..4).prop_map(|segments| segments.join("."))
}

/// Strategy for generating declared type names
pub fn type_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("string".to_string()),
        Just("bool".to_string()),
        Just("array".to_string()),
        Just("object".to_string()),
        Just("json".to_string()),
        Just("anything".to_string()),
    ]
}

/// Strategy for generating rule trees that can never fail to coerce
pub fn rule_strategy() -> impl Strategy<Value = MappingRule> {
    let leaf = (
        path_strategy(),
        key_strategy(),
        type_name_strategy(),
        option::of(json_value_strategy()),
    )
        .prop_map(|(source, target, field_type, default)| {
            let rule = MappingRule::new(source, target).with_type(field_type.as_str());
            match default {
                Some(value) => rule.with_default(value),
                None => rule,
            }
        });

    leaf.prop_recursive(2, 12, 3, |inner| {
        (inner.clone(), vec(inner, 0..3))
            .prop_map(|(rule, sub_mappers)| rule.with_sub_mappers(sub_mappers))
    })
}
