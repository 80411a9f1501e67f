use std::collections::{HashMap, HashSet};

use crate::{
    ast::{Selection, SubsetSpec},
    value::{Lookup, Value},
};

/// What to do when a path tries to descend into a value that has no fields,
/// such as `name.first` where `name` is a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Drop the specification, exactly like a missing key
    #[default]
    Skip,
    /// Fail the whole query with [`EvalError::PathTypeMismatch`]
    Error,
}

/// What to do when two specifications write the same output key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later specification wins
    #[default]
    Overwrite,
    /// Fail the whole query with [`EvalError::DuplicateAlias`]
    Reject,
}

/// Evaluation settings. The default is the lenient behaviour: type
/// mismatches are skipped and duplicate aliases overwrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub on_mismatch: MismatchPolicy,
    pub on_duplicate: DuplicatePolicy,
}

impl Options {
    /// Both policies set to fail.
    pub fn strict() -> Self {
        Options {
            on_mismatch: MismatchPolicy::Error,
            on_duplicate: DuplicatePolicy::Reject,
        }
    }
}

/// Errors that can occur during evaluation. Missing paths are not errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// A path segment was applied to a value that is not an object
    #[error("Cannot look up '{segment}' in {found} while resolving '{path}'")]
    PathTypeMismatch {
        path: String,
        segment: String,
        found: &'static str,
    },

    /// Two specifications use the same alias
    #[error("Duplicate alias '{0}'")]
    DuplicateAlias(String),
}

/// Resolves parsed selections against a document.
#[derive(Debug, Default)]
pub struct Evaluator {
    options: Options,
}

impl Evaluator {
    pub fn new(options: Options) -> Self {
        Evaluator { options }
    }

    /// Builds the output mapping for `selection`.
    ///
    /// Every specification starts again from `root`. Resolved values are
    /// cloned, so the result shares nothing with `root`.
    ///
    /// # Examples
    ///
    /// ```
    /// use subset_query::{ast::{Selection, SubsetSpec}, Evaluator, Value};
    /// use std::collections::HashMap;
    ///
    /// let mut root = HashMap::new();
    /// root.insert("id".to_string(), Value::Integer(7));
    ///
    /// let selection = Selection { specs: vec![SubsetSpec::new(["id"], "key")] };
    /// let output = Evaluator::default().evaluate(&selection, &Value::Object(root)).unwrap();
    /// assert_eq!(output.get("key"), Some(&Value::Integer(7)));
    /// ```
    pub fn evaluate(
        &self,
        selection: &Selection,
        root: &Value,
    ) -> Result<HashMap<String, Value>, EvalError> {
        let mut output = HashMap::new();
        let mut seen = HashSet::new();

        for spec in &selection.specs {
            if !seen.insert(spec.alias.as_str())
                && self.options.on_duplicate == DuplicatePolicy::Reject
            {
                return Err(EvalError::DuplicateAlias(spec.alias.clone()));
            }

            match self.resolve(spec, root)? {
                Some(value) => {
                    log::debug!("{} resolved to {}", spec, value.type_name());
                    output.insert(spec.alias.clone(), value.clone());
                }
                None => log::debug!("{} did not resolve, skipped", spec),
            }
        }

        Ok(output)
    }

    /// Walks the path of `spec` from `root`. `None` means the path does not exist.
    pub fn resolve<'a>(
        &self,
        spec: &SubsetSpec,
        root: &'a Value,
    ) -> Result<Option<&'a Value>, EvalError> {
        let mut current = root;

        for segment in &spec.path {
            current = match current.lookup(segment) {
                Lookup::Found(value) => value,
                Lookup::Missing => return Ok(None),
                Lookup::Mismatch(found) => match self.options.on_mismatch {
                    MismatchPolicy::Skip => return Ok(None),
                    MismatchPolicy::Error => {
                        return Err(EvalError::PathTypeMismatch {
                            path: spec.path.join("."),
                            segment: segment.clone(),
                            found,
                        });
                    }
                },
            };
        }

        Ok(Some(current))
    }
}
