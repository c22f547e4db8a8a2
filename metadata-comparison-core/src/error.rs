//! Custom error types for metadata comparison.
//!
//! All failures are explicit enum variants. Every variant that concerns an
//! input or output file carries its path so the top level can report it.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for loading, comparing and writing.
#[derive(Debug, Error)]
pub enum ComparisonError {
    // =========================================================================
    // Input Errors - Fail-Fast, No Partial Result
    // =========================================================================
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read input file {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path}: {source}")]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON data at {path} is not an object")]
    NotAnObject { path: PathBuf },

    // =========================================================================
    // Column Errors
    // =========================================================================
    #[error(
        "JSON data at {path} doesn't have matching subset of columns. Expected: {expected:?} but got {actual:?}"
    )]
    ColumnMismatch {
        path: PathBuf,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("JSON data at {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    #[error("JSON data at {path} has more than one value flattening to key '{key}'")]
    DuplicateKey { path: PathBuf, key: String },

    // =========================================================================
    // Output Errors
    // =========================================================================
    #[error("Failed to encode CSV: {0}")]
    CsvEncode(#[from] csv::Error),

    #[error("Failed to write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration errors. Raised before any input file is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration parse error: {message}")]
    Parse { message: String },

    #[error("Invalid field value: {field} = {value:?} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Two object paths joined to the same flattened key.
#[derive(Debug, Error)]
#[error("Duplicate flattened key: {key}")]
pub struct DuplicateKeyError {
    pub key: String,
}

/// Result type alias using ComparisonError.
pub type ComparisonResult<T> = Result<T, ComparisonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_mismatch_display() {
        let err = ComparisonError::ColumnMismatch {
            path: PathBuf::from("b.json"),
            expected: vec![
                "version".to_string(),
                "stageA.overallRuntimeSeconds".to_string(),
            ],
            actual: vec![
                "version".to_string(),
                "stageB.overallRuntimeSeconds".to_string(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("b.json"));
        assert!(msg.contains("stageA.overallRuntimeSeconds"));
        assert!(msg.contains("stageB.overallRuntimeSeconds"));
    }

    #[test]
    fn test_error_chain() {
        let config_err = ConfigError::InvalidFieldValue {
            field: "index_label",
            value: String::new(),
            reason: "Must not be empty".to_string(),
        };
        let err: ComparisonError = config_err.into();
        assert!(matches!(err, ComparisonError::Config(_)));
        assert!(err.to_string().contains("index_label"));
    }

    #[test]
    fn test_input_read_keeps_source() {
        use std::error::Error as _;

        let err = ComparisonError::InputRead {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.json"));
    }
}
