// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! In-memory comparison table.
//!
//! Columns are an ordered list of names; each row carries a label (the input
//! file name) and one cell per column, in column order.

use serde_json::Value;

/// One labelled row of the comparison table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub label: String,
    pub cells: Vec<Value>,
}

/// Comparison table with an index label, ordered columns and ordered rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    index_label: String,
    columns: Vec<String>,
    rows: Vec<TableRow>,
}

impl ComparisonTable {
    /// Create an empty table with no columns.
    pub fn new(index_label: impl Into<String>) -> Self {
        Self {
            index_label: index_label.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Create an empty table with a fixed column list.
    #[cfg(test)]
    pub(crate) fn with_columns(index_label: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            index_label: index_label.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn index_label(&self) -> &str {
        &self.index_label
    }

    pub fn set_index_label(&mut self, label: impl Into<String>) {
        self.index_label = label.into();
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace the column list. Only meaningful before any row is added.
    pub fn set_columns(&mut self, columns: Vec<String>) {
        debug_assert!(self.rows.is_empty(), "columns fixed once rows exist");
        self.columns = columns;
    }

    /// Append a row whose cells follow [`Self::columns`] order.
    pub fn push_row(&mut self, label: impl Into<String>, cells: Vec<Value>) {
        debug_assert_eq!(self.columns.len(), cells.len(), "one cell per column");
        self.rows.push(TableRow {
            label: label.into(),
            cells,
        });
    }

    /// Rename a column. Returns false when no column has the old name.
    pub fn rename_column(&mut self, from: &str, to: impl Into<String>) -> bool {
        match self.columns.iter_mut().find(|c| c.as_str() == from) {
            Some(column) => {
                *column = to.into();
                true
            }
            None => false,
        }
    }

    /// Look up a cell by row label and column name.
    pub fn cell(&self, label: &str, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows
            .iter()
            .find(|row| row.label == label)
            .and_then(|row| row.cells.get(index))
    }
}
