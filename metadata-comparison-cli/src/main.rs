// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Metadata Comparison CLI
//!
//! Compares Digester performance metadata JSON files and writes a CSV table.

use std::path::PathBuf;

use clap::Parser;

mod compare;

/// Compare performance metadata JSONs and produce CSV result
#[derive(Parser)]
#[command(name = "metadata-comparison")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Paths to JSON files
    #[arg(
        long,
        alias = "json_paths",
        value_name = "JSONPATH",
        num_args = 1..,
        required = true
    )]
    pub json_paths: Vec<PathBuf>,

    /// Path to output CSV file
    #[arg(long, alias = "output_path", value_name = "OUTPUTPATH")]
    pub output_path: PathBuf,

    /// Optional YAML file overriding column conventions
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    compare::execute(&cli.json_paths, &cli.output_path, cli.config.as_deref()).map_err(|e| {
        tracing::error!(error = %e, "Comparer operation failed");
        e
    })
}
