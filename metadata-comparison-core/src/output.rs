// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CSV output for comparison tables.
//!
//! The header row is the index label followed by the column names. Records
//! end with `\n` and fields are quoted only when they need it.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;

use crate::error::{ComparisonError, ComparisonResult};
use crate::table::ComparisonTable;

fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary);
    builder
}

/// Write a table as CSV to any writer.
pub fn write_csv<W: Write>(table: &ComparisonTable, writer: W) -> ComparisonResult<()> {
    let mut csv_writer = writer_builder().from_writer(writer);

    let header = std::iter::once(table.index_label())
        .chain(table.columns().iter().map(String::as_str));
    csv_writer.write_record(header)?;

    for row in table.rows() {
        let cells: Vec<String> = row.cells.iter().map(render_cell).collect();
        let fields = std::iter::once(row.label.as_str()).chain(cells.iter().map(String::as_str));
        csv_writer.write_record(fields)?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Render a table as a CSV string.
pub fn to_csv_string(table: &ComparisonTable) -> ComparisonResult<String> {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write a table to a CSV file.
///
/// The whole document is rendered before the file is created, so a failure
/// never leaves a partially written file behind. Missing parent directories
/// are created.
pub fn write_csv_file(table: &ComparisonTable, path: impl AsRef<Path>) -> ComparisonResult<()> {
    let path = path.as_ref();
    let contents = to_csv_string(table)?;

    let to_error = |source: std::io::Error| ComparisonError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, contents).map_err(to_error)?;

    tracing::debug!(path = %path.display(), rows = table.len(), "Wrote comparison CSV");
    Ok(())
}

/// Text form of a single cell.
pub fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
