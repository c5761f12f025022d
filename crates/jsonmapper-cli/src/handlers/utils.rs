//! Shared utilities for command handlers

use crate::config::is_yaml;
use crate::error::{Error, ErrorContext, Result};
use jsonmapper_core::{rules, MappingRule};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a JSON or YAML document, choosing the parser by extension
pub fn load_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let parsed = if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| invalid_format(path, "YAML", e))
    } else {
        serde_json::from_str(&content).map_err(|e| invalid_format(path, "JSON", e))
    };

    let document = parsed?;
    tracing::debug!(path = %path.display(), "Loaded document");
    Ok(document)
}

/// Load a rule file: an array of rule objects
pub fn load_rules(path: &Path) -> Result<Vec<MappingRule>> {
    let document = load_document(path)?;
    let loaded = rules::from_value(document)?;
    tracing::info!(path = %path.display(), rules = loaded.len(), "Loaded rules");
    Ok(loaded)
}

/// Write a document, as YAML or pretty JSON by extension
pub fn save_document(path: &Path, document: &Value) -> Result<()> {
    let content = if is_yaml(path) {
        serde_yaml::to_string(document)?
    } else {
        let mut text = serde_json::to_string_pretty(document)?;
        text.push('\n');
        text
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn invalid_format(path: &Path, expected: &str, error: impl std::fmt::Display) -> Error {
    Error::InvalidFormat {
        path: path.to_path_buf(),
        expected: expected.to_string(),
        message: error.to_string(),
    }
}
