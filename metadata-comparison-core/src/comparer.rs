// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Builds the comparison table from loaded metadata documents.
//!
//! Each document is flattened, its runtime-seconds columns are selected and
//! sorted with the version column first, and the result is checked against
//! the column set of the first document. Any mismatch aborts the whole
//! comparison; no partial table is returned.

use serde_json::Value;

use crate::config::ComparisonConfig;
use crate::error::{ComparisonError, ComparisonResult};
use crate::flatten::{flatten, FlatRecord};
use crate::loader::SourceDocument;
use crate::table::ComparisonTable;

/// Compares flattened metadata documents column by column.
#[derive(Debug, Clone, Default)]
pub struct Comparer {
    config: ComparisonConfig,
}

impl Comparer {
    pub fn new(config: ComparisonConfig) -> Self {
        Self { config }
    }

    /// Column set of a flattened record: the sorted runtime-seconds keys,
    /// preceded by the version column.
    ///
    /// Matching is on the full dot-joined path.
    pub fn select_columns(&self, record: &FlatRecord) -> Vec<String> {
        let mut columns: Vec<String> = record
            .keys()
            .filter(|key| key.ends_with(&self.config.runtime_column_suffix))
            .cloned()
            .collect();
        columns.sort();
        columns.insert(0, self.config.version_column.clone());
        columns
    }

    /// Assemble one table with a row per document, in input order.
    pub fn compare(&self, documents: &[SourceDocument]) -> ComparisonResult<ComparisonTable> {
        let mut table = ComparisonTable::new(self.config.index_label.clone());
        let mut expected: Option<Vec<String>> = None;

        for source in documents {
            if !source.document.is_object() {
                return Err(ComparisonError::NotAnObject {
                    path: source.path.clone(),
                });
            }

            let record =
                flatten(&source.document).map_err(|e| ComparisonError::DuplicateKey {
                    path: source.path.clone(),
                    key: e.key,
                })?;
            let columns = self.select_columns(&record);

            match &expected {
                Some(expected) if *expected != columns => {
                    return Err(ComparisonError::ColumnMismatch {
                        path: source.path.clone(),
                        expected: expected.clone(),
                        actual: columns,
                    });
                }
                Some(_) => {}
                None => {
                    tracing::debug!(
                        path = %source.path.display(),
                        columns = ?columns,
                        "Expected column set"
                    );
                    table.set_columns(columns.clone());
                    expected = Some(columns);
                }
            }

            let cells = Self::select_cells(source, &record, table.columns())?;
            tracing::trace!(path = %source.path.display(), "Appending row");
            table.push_row(source.label(), cells);
        }

        table.rename_column(
            &self.config.version_column,
            self.config.version_column_label.clone(),
        );
        table.set_index_label(self.config.index_label.clone());

        Ok(table)
    }

    fn select_cells(
        source: &SourceDocument,
        record: &FlatRecord,
        columns: &[String],
    ) -> ComparisonResult<Vec<Value>> {
        columns
            .iter()
            .map(|column| {
                record
                    .get(column)
                    .cloned()
                    .ok_or_else(|| ComparisonError::MissingColumn {
                        path: source.path.clone(),
                        column: column.clone(),
                    })
            })
            .collect()
    }
}

/// Compare documents with the default Digester conventions.
pub fn compare_documents(documents: &[SourceDocument]) -> ComparisonResult<ComparisonTable> {
    Comparer::default().compare(documents)
}
