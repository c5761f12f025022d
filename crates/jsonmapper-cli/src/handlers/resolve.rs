//! Resolve command handler

use super::utils::load_document;
use crate::cli::ResolveArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{format_value_compact, OutputWriter};
use jsonmapper_core::mapping::{Clause, Selector};
use jsonmapper_core::SourcePath;

/// Handle the resolve command
pub fn handle_resolve(args: ResolveArgs, _config: &Config, output: &mut OutputWriter) -> Result<()> {
    let document = load_document(&args.source)?;
    let path = SourcePath::parse(&args.path);
    if path.is_empty() {
        output.warning("The path has no segments and never resolves")?;
    }

    if args.explain {
        output.section(&format!("Path {}", path))?;
        let rows = path
            .segments()
            .iter()
            .map(|segment| vec![segment.name.clone(), describe_selector(segment.selector.as_ref())])
            .collect();
        output.table(&["segment", "selector"], rows)?;
        output.writeln("")?;
    }

    match path.resolve(&document) {
        Some(value) => {
            tracing::debug!(path = %path, value = %format_value_compact(value), "Path resolved");
            output.data(value)
        }
        None => {
            tracing::debug!(path = %path, "Path is absent");
            Err(Error::PathAbsent {
                path: args.path.clone(),
            })
        }
    }
}

fn describe_selector(selector: Option<&Selector>) -> String {
    match selector {
        None => "-".to_string(),
        Some(Selector::First) => "first element".to_string(),
        Some(Selector::Index(index)) => format!("index {}", index),
        Some(Selector::Fallback) => "whole array if non-empty".to_string(),
        Some(Selector::Filter(clauses)) => {
            let described: Vec<String> = clauses
                .iter()
                .map(|clause| match clause {
                    Clause::Equals { key, value } => format!("{}={}", key, value),
                    Clause::Malformed(text) => format!("never matches ({})", text),
                })
                .collect();
            format!("first where {}", described.join(" and "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::output::capture::writer;
    use std::fs;
    use tempfile::TempDir;

    fn resolve_args(dir: &TempDir, path: &str) -> ResolveArgs {
        let source = dir.path().join("doc.yaml");
        fs::write(
            &source,
            "phones:\n  - type: work\n    number: '1'\n  - type: Home\n    number: '2'\n",
        )
        .unwrap();
        ResolveArgs {
            source,
            path: path.to_string(),
            explain: false,
        }
    }

    #[test]
    fn test_resolve_filter() {
        let dir = TempDir::new().unwrap();
        let (mut output, buffer) = writer(OutputFormat::Json, false);

        handle_resolve(resolve_args(&dir, "phones[type=home].number"), &Config::default(), &mut output)
            .unwrap();

        assert_eq!(buffer.contents(), "\"2\"\n");
    }

    #[test]
    fn test_resolve_absent() {
        let dir = TempDir::new().unwrap();
        let (mut output, _buffer) = writer(OutputFormat::Json, false);

        let err = handle_resolve(resolve_args(&dir, "phones[7]"), &Config::default(), &mut output)
            .unwrap_err();

        assert!(matches!(err, Error::PathAbsent { ref path } if path == "phones[7]"));
    }

    #[test]
    fn test_explain_lists_segments() {
        let dir = TempDir::new().unwrap();
        let mut args = resolve_args(&dir, "phones[type=work&number=1].number");
        args.explain = true;
        let (mut output, buffer) = writer(OutputFormat::Human, false);

        handle_resolve(args, &Config::default(), &mut output).unwrap();

        let text = buffer.contents();
        assert!(text.contains("first where type=work and number=1"));
        assert!(text.trim_end().ends_with("\"1\""));
    }

    #[test]
    fn test_describe_selector() {
        assert_eq!(describe_selector(None), "-");
        assert_eq!(describe_selector(Some(&Selector::Index(3))), "index 3");
        assert_eq!(
            describe_selector(Some(&Selector::Filter(vec![Clause::Malformed("x".to_string())]))),
            "first where never matches (x)"
        );
    }
}
