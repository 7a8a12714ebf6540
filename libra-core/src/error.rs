//! Error types for Libra Core

use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias using LibraError
pub type Result<T> = std::result::Result<T, LibraError>;

/// Top-level error type for all Libra operations
#[derive(Debug, Error)]
pub enum LibraError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the strict decoders (JSON lines, XML)
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON on line {line}: {source}")]
    InvalidJsonLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    #[error("Unexpected root element <{found}>, expected <{expected}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    #[error("Document has no root element")]
    MissingRoot,

    #[error("Book #{record} is missing required field `{field}`")]
    MissingField { record: usize, field: &'static str },

    #[error("Book #{record} has invalid `{field}` value {value:?}")]
    InvalidField {
        record: usize,
        field: &'static str,
        value: String,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Errors that occur while encoding a collection
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML encoding failed: {0}")]
    Xml(String),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("No encoder for format: {0}")]
    UnsupportedFormat(String),
}

/// Why a lenient decoder dropped a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("invalid page count {value:?}: {source}")]
    InvalidPages {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("expected at least {expected} columns, found {found}")]
    MissingColumns { expected: usize, found: usize },

    #[error("malformed record: {0}")]
    Malformed(String),
}

/// A record dropped by a lenient decoder (CSV, free text).
///
/// The decode as a whole still succeeds; these are returned alongside the
/// books so callers can report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line in the source
    pub line: u64,
    /// Source text of the record
    pub raw: String,
    pub reason: SkipReason,
}

impl SkippedRecord {
    pub fn new(line: u64, raw: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            line,
            raw: raw.into(),
            reason,
        }
    }
}

impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line, self.reason, self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_record_display() {
        let source = "abc".parse::<u32>().unwrap_err();
        let skipped = SkippedRecord::new(
            3,
            "Go Basics,Jane Doe,abc",
            SkipReason::InvalidPages {
                value: "abc".to_string(),
                source,
            },
        );
        let message = skipped.to_string();
        assert!(message.starts_with("line 3: invalid page count \"abc\""));
        assert!(message.contains("Go Basics,Jane Doe,abc"));
    }

    #[test]
    fn test_parse_error_converts_to_libra_error() {
        let err: LibraError = ParseError::MissingRoot.into();
        assert!(matches!(err, LibraError::Parse(ParseError::MissingRoot)));
        assert_eq!(err.to_string(), "Parse error: Document has no root element");
    }
}
