//! Error types for the jsonmapper core library
//!
//! Soft resolution failures never surface here: a path that does not apply
//! to a document resolves to absent. Only hard failures, such as a numeric
//! coercion on a non-numeric value, become an [`Error`].

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Main error type for jsonmapper operations
#[derive(Error, Debug)]
pub enum Error {
    /// A resolved value could not be coerced to the rule's declared type
    #[error("Coercion failed for rule '{source_key}' -> '{target_key}': cannot convert {value} to {field_type}: {reason}")]
    Coercion {
        source_key: String,
        target_key: String,
        field_type: String,
        value: String,
        reason: String,
    },

    /// Rule definitions have the wrong shape
    #[error("Invalid rule definition: {message}")]
    RuleDefinition {
        message: String,
        location: Option<String>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Severity levels for rule validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, the rule behaves as written
    Info,
    /// The rule probably does not do what its author intended
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
