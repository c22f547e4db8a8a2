// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Load, compare and write in a single batch.
//!
//! The output file is only created once every input has been loaded and the
//! whole table has been built.

use std::path::{Path, PathBuf};

use metadata_comparison_core::{
    load_documents, write_csv_file, ComparisonConfig, Comparer, ConfigLoader,
};

pub fn execute(
    json_paths: &[PathBuf],
    output_path: &Path,
    config_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting Comparer operation.");

    let config = match config_path {
        Some(path) => {
            tracing::debug!(config = %path.display(), "Loading comparison config");
            ConfigLoader::load_file(path)?
        }
        None => ComparisonConfig::default(),
    };

    let documents = load_documents(json_paths)?;
    tracing::debug!(count = documents.len(), "Loaded metadata files");

    let table = Comparer::new(config).compare(&documents)?;
    write_csv_file(&table, output_path)?;

    tracing::info!(
        output = %output_path.display(),
        rows = table.len(),
        "Comparer operation completed successfully."
    );
    Ok(())
}
