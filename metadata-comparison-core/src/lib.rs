//! Metadata Comparison Core Library
//!
//! Loads Digester performance metadata JSON files, flattens them into
//! dot-joined records, and assembles a comparison table of the
//! `.overallRuntimeSeconds` measurements that can be written as CSV.

pub mod comparer;
pub mod config;
pub mod error;
pub mod flatten;
pub mod loader;
pub mod output;
pub mod table;

// Re-export commonly used types
pub use comparer::{compare_documents, Comparer};
pub use config::{ComparisonConfig, ConfigLoader};
pub use error::{ComparisonError, ComparisonResult, ConfigError, DuplicateKeyError};
pub use flatten::{flatten, FlatRecord};
pub use loader::{load_documents, SourceDocument};
pub use output::{to_csv_string, write_csv, write_csv_file};
pub use table::{ComparisonTable, TableRow};
