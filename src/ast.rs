//! # Subset Query Language - Syntax Tree
//!
//! A query is a comma separated list of subset specifications, each of which
//! selects one value by its dotted path and names it in the output:
//!
//! ```text
//! user.address.city=town,user.id=id
//! ```
//!
//! parses into two [`SubsetSpec`]s, `["user", "address", "city"] -> "town"` and
//! `["user", "id"] -> "id"`.

use std::fmt;

/// One `field.path=alias` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSpec {
    /// Path segments, outermost first. Never empty.
    pub path: Vec<String>,
    /// Key the resolved value is written under.
    pub alias: String,
}

impl SubsetSpec {
    pub fn new<P, S>(path: P, alias: &str) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SubsetSpec {
            path: path.into_iter().map(Into::into).collect(),
            alias: alias.to_string(),
        }
    }
}

impl fmt::Display for SubsetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.path.join("."), self.alias)
    }
}

/// A parsed query: every subset specification in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub specs: Vec<SubsetSpec>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Output keys in source order, duplicates included.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|spec| spec.alias.as_str())
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let specs: Vec<String> = self.specs.iter().map(ToString::to_string).collect();
        f.write_str(&specs.join(","))
    }
}
