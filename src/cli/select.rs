//! Execute subset queries against JSON input

use super::{json_to_value, value_to_json, CliError};
use crate::{DuplicatePolicy, MismatchPolicy, Options};

/// Options for the select command
#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    /// The subset query to execute
    pub query: String,
    /// JSON input string
    pub input: Option<String>,
    /// Only validate syntax, don't execute
    pub syntax_only: bool,
    /// Fail when a path descends into a non-object value
    pub strict_paths: bool,
    /// Fail when two specifications share an alias
    pub reject_duplicates: bool,
}

impl SelectOptions {
    fn evaluation_options(&self) -> Options {
        Options {
            on_mismatch: if self.strict_paths {
                MismatchPolicy::Error
            } else {
                MismatchPolicy::Skip
            },
            on_duplicate: if self.reject_duplicates {
                DuplicatePolicy::Reject
            } else {
                DuplicatePolicy::Overwrite
            },
        }
    }
}

/// Result of a select operation
#[derive(Debug)]
pub enum SelectResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Query executed successfully with JSON output
    Success(serde_json::Value),
}

/// Execute a select operation
pub fn execute_select(options: &SelectOptions) -> Result<SelectResult, CliError> {
    if options.syntax_only {
        if !options.query.is_empty() {
            crate::compile(&options.query)?;
        }
        return Ok(SelectResult::SyntaxValid);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str)?;
    let root = json_to_value(json_value);

    let output = crate::parse_with(&options.query, &root, &options.evaluation_options())?;
    Ok(SelectResult::Success(value_to_json(output)))
}
