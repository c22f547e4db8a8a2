// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Reads performance metadata files from disk.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ComparisonError, ComparisonResult};

/// A parsed metadata document and the path it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub path: PathBuf,
    pub document: Value,
}

impl SourceDocument {
    pub fn new(path: impl Into<PathBuf>, document: Value) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }

    /// Row label used in the comparison table.
    pub fn label(&self) -> String {
        self.path.display().to_string()
    }
}

/// Load every path as JSON, preserving input order.
///
/// Stops at the first file that cannot be opened or parsed.
pub fn load_documents<P: AsRef<Path>>(paths: &[P]) -> ComparisonResult<Vec<SourceDocument>> {
    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        documents.push(load_document(path.as_ref())?);
    }
    Ok(documents)
}

/// Load a single JSON file.
pub fn load_document(path: &Path) -> ComparisonResult<SourceDocument> {
    tracing::debug!(path = %path.display(), "Loading metadata file");

    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ComparisonError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ComparisonError::InputRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let document =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| ComparisonError::InputParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(SourceDocument::new(path, document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let b = temp_dir.path().join("b.json");
        let a = temp_dir.path().join("a.json");
        std::fs::write(&b, r#"{"version": "2"}"#).unwrap();
        std::fs::write(&a, r#"{"version": "1"}"#).unwrap();

        let docs = load_documents(&[&b, &a]).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].path, b);
        assert_eq!(docs[0].document, json!({"version": "2"}));
        assert_eq!(docs[1].path, a);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");

        let err = load_documents(&[&missing]).unwrap_err();
        match err {
            ComparisonError::InputNotFound { path } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_json_fails_whole_load() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.json");
        let bad = temp_dir.path().join("bad.json");
        std::fs::write(&good, r#"{"version": "1"}"#).unwrap();
        std::fs::write(&bad, "{not json").unwrap();

        let err = load_documents(&[&good, &bad]).unwrap_err();
        assert!(matches!(err, ComparisonError::InputParse { ref path, .. } if *path == bad));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_empty_path_list() {
        let paths: [PathBuf; 0] = [];
        assert!(load_documents(&paths).unwrap().is_empty());
    }
}
