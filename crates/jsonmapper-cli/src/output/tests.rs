// Tests for output formatting
//
// Writers are backed by an in-memory buffer so each test can read back
// exactly what was produced.

use super::*;
use super::capture::writer;
use jsonmapper_core::IssueCode;
use serde_json::json;

fn sample_issues() -> Vec<RuleIssue> {
    vec![
        RuleIssue {
            code: IssueCode::EmptyTargetKey,
            severity: Severity::Warning,
            location: "rules[0]".to_string(),
            message: "targetKey is empty".to_string(),
        },
        RuleIssue {
            code: IssueCode::CoercionSkipped,
            severity: Severity::Info,
            location: "rules[1].subMappers[0]".to_string(),
            message: "type is not applied".to_string(),
        },
    ]
}

#[test]
fn test_data_compact_json() {
    let (mut output, buffer) = writer(OutputFormat::Json, false);
    output.data(&json!({"b": 1, "a": [true, null]})).unwrap();
    assert_eq!(buffer.contents(), "{\"b\":1,\"a\":[true,null]}\n");
}

#[test]
fn test_data_yaml() {
    let (mut output, buffer) = writer(OutputFormat::Yaml, false);
    output.data(&json!({"name": "x"})).unwrap();
    assert_eq!(buffer.contents(), "name: x\n");
}

#[test]
fn test_data_is_written_even_when_quiet() {
    let (mut output, buffer) = writer(OutputFormat::Human, true);
    output.info("hidden").unwrap();
    output.section("hidden").unwrap();
    output.data(&json!(1)).unwrap();
    assert_eq!(buffer.contents(), "1\n");
}

#[test]
fn test_messages_only_in_human_format() {
    let (mut output, buffer) = writer(OutputFormat::Json, false);
    output.info("a").unwrap();
    output.success("b").unwrap();
    output.warning("c").unwrap();
    assert_eq!(buffer.contents(), "");

    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output.info("a").unwrap();
    output.warning("c").unwrap();
    assert_eq!(buffer.contents(), "INFO: a\nWARNING: c\n");
}

#[test]
fn test_rule_issues_human() {
    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output.rule_issues(&sample_issues()).unwrap();

    let text = buffer.contents();
    assert!(text.contains("=== 2 issue(s) ==="));
    assert!(text.contains("warning [empty_target_key] rules[0]: targetKey is empty"));
    assert!(text.contains("info    [coercion_skipped] rules[1].subMappers[0]: type is not applied"));
}

#[test]
fn test_rule_issues_empty_human() {
    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output.rule_issues(&[]).unwrap();
    assert_eq!(buffer.contents(), "No issues found\n");
}

#[test]
fn test_rule_issues_json() {
    let (mut output, buffer) = writer(OutputFormat::Json, false);
    output.rule_issues(&sample_issues()[..1]).unwrap();

    let parsed: Value = serde_json::from_str(buffer.contents().trim()).unwrap();
    assert_eq!(
        parsed,
        json!([{
            "code": "empty_target_key",
            "severity": "warning",
            "location": "rules[0]",
            "message": "targetKey is empty"
        }])
    );
}

#[test]
fn test_table_alignment() {
    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output
        .table(
            &["segment", "selector"],
            vec![
                vec!["items".to_string(), "index 2".to_string()],
                vec!["id".to_string(), "-".to_string()],
            ],
        )
        .unwrap();

    let lines: Vec<String> = buffer.contents().lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "segment │ selector");
    assert_eq!(lines[2], "items   │ index 2 ");
}

#[test]
fn test_format_value_compact() {
    assert_eq!(format_value_compact(&json!("s")), "\"s\"");
    assert_eq!(format_value_compact(&json!([1, 2])), "[1, 2]");
    assert_eq!(format_value_compact(&json!([1, 2, 3, 4])), "[4 items]");
    assert_eq!(format_value_compact(&json!({"a": 1})), "{a: 1}");
    assert_eq!(format_value_compact(&json!({"a": 1, "b": 2, "c": 3})), "{3 fields}");
}
