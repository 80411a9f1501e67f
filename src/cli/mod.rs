//! CLI support for subset-query
//!
//! Provides programmatic access to the `subset` command's functionality for
//! embedding in other tools.

mod convert;
mod docs;
mod select;

pub use convert::{json_to_value, value_to_json};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};
pub use select::{execute_select, SelectOptions, SelectResult};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Query failed to parse or evaluate
    #[error("{0}")]
    Query(#[from] crate::SubsetError),

    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No input provided. Use --input or pipe JSON to stdin.")]
    NoInput,

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'subset docs' to see available categories.")]
    UnknownCategory(String),
}
