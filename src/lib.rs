//! Select and rename fields of a nested document with a compact query string.
//!
//! ```
//! use subset_query::{parse, cli::json_to_value};
//! use serde_json::json;
//!
//! let root = json_to_value(json!({"user": {"id": "u1", "address": {"city": "town"}}}));
//! let output = parse("user.id=id,user.address.city=town", &root).unwrap();
//!
//! assert_eq!(output, json_to_value(json!({"id": "u1", "town": "town"})));
//! ```

pub mod ast;
pub mod cli;
pub mod escape;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod value;

pub use ast::{Selection, SubsetSpec};
pub use evaluator::{DuplicatePolicy, EvalError, Evaluator, MismatchPolicy, Options};
pub use lexer::{LexError, Token, TokenKind, Tokenizer};
pub use parser::{ParseError, Parser};
pub use value::Value;

/// Any failure of a query, from scanning to evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubsetError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Parses `query` without evaluating anything. Escaped field names come
/// back decoded.
pub fn compile(query: &str) -> Result<Selection, SubsetError> {
    Ok(Parser::for_query(query)?.parse()?)
}

/// Applies `query` to `root` with the default [`Options`].
///
/// An empty query selects everything and returns a copy of `root`. Any other
/// query returns a [`Value::Object`] holding one entry per resolved
/// specification, keyed by its alias.
pub fn parse(query: &str, root: &Value) -> Result<Value, SubsetError> {
    parse_with(query, root, &Options::default())
}

/// Like [`parse`], with explicit evaluation options.
pub fn parse_with(query: &str, root: &Value, options: &Options) -> Result<Value, SubsetError> {
    if query.is_empty() {
        return Ok(root.clone());
    }

    let selection = compile(query)?;
    log::debug!("query {:?} parsed into {} specs", query, selection.len());

    let output = Evaluator::new(*options).evaluate(&selection, root)?;
    Ok(Value::Object(output))
}
