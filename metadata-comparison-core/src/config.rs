// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML configuration for the comparer.
//!
//! The configuration file is optional. Every field has a default matching the
//! Digester metadata conventions, and any invalid field is rejected before a
//! single input file is read.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Suffix identifying runtime-seconds measurements after flattening.
pub const DEFAULT_RUNTIME_COLUMN_SUFFIX: &str = ".overallRuntimeSeconds";
/// Column carrying the Digester format version.
pub const DEFAULT_VERSION_COLUMN: &str = "version";
/// Output header for the version column.
pub const DEFAULT_VERSION_COLUMN_LABEL: &str = "digester format version";
/// Output header for the row index.
pub const DEFAULT_INDEX_LABEL: &str = "input file name";

/// Raw configuration as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default = "default_runtime_column_suffix")]
    runtime_column_suffix: String,
    #[serde(default = "default_version_column")]
    version_column: String,
    #[serde(default = "default_version_column_label")]
    version_column_label: String,
    #[serde(default = "default_index_label")]
    index_label: String,
}

fn default_runtime_column_suffix() -> String {
    DEFAULT_RUNTIME_COLUMN_SUFFIX.to_string()
}

fn default_version_column() -> String {
    DEFAULT_VERSION_COLUMN.to_string()
}

fn default_version_column_label() -> String {
    DEFAULT_VERSION_COLUMN_LABEL.to_string()
}

fn default_index_label() -> String {
    DEFAULT_INDEX_LABEL.to_string()
}

/// Validated comparer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonConfig {
    /// Flattened keys ending with this suffix become comparison columns.
    pub runtime_column_suffix: String,
    /// Key of the version field, always placed first.
    pub version_column: String,
    /// Header the version column is renamed to in the output.
    pub version_column_label: String,
    /// Header of the row index (input file names).
    pub index_label: String,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            runtime_column_suffix: default_runtime_column_suffix(),
            version_column: default_version_column(),
            version_column_label: default_version_column_label(),
            index_label: default_index_label(),
        }
    }
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<ComparisonConfig, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> Result<ComparisonConfig, ConfigError> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(ComparisonConfig::default());
        }

        let raw: RawConfig = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            message: format!("YAML parse error: {}", e),
        })?;

        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> Result<ComparisonConfig, ConfigError> {
        Self::require_non_empty("runtime_column_suffix", &raw.runtime_column_suffix)?;
        Self::require_non_empty("version_column", &raw.version_column)?;
        Self::require_non_empty("version_column_label", &raw.version_column_label)?;
        Self::require_non_empty("index_label", &raw.index_label)?;

        // The version key would otherwise be selected twice
        if raw.version_column.ends_with(&raw.runtime_column_suffix) {
            return Err(ConfigError::InvalidFieldValue {
                field: "version_column",
                value: raw.version_column,
                reason: format!(
                    "Must not end with the runtime column suffix '{}'",
                    raw.runtime_column_suffix
                ),
            });
        }

        if raw.index_label == raw.version_column_label {
            return Err(ConfigError::InvalidFieldValue {
                field: "index_label",
                value: raw.index_label,
                reason: "Must differ from version_column_label".to_string(),
            });
        }

        Ok(ComparisonConfig {
            runtime_column_suffix: raw.runtime_column_suffix,
            version_column: raw.version_column,
            version_column_label: raw.version_column_label,
            index_label: raw.index_label,
        })
    }

    fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
        if value.is_empty() {
            return Err(ConfigError::InvalidFieldValue {
                field,
                value: value.to_string(),
                reason: "Must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
