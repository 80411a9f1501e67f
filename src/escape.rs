//! Escaping of reserved characters inside field names.
//!
//! The query language reserves `,` `=` and whitespace for its own structure.
//! Callers that need one of those characters inside a field name write its
//! escaped form instead. None of the escaped forms contain a reserved
//! character, so the query tokenizes with every escaped name intact and the
//! parser runs [`decode`] on each field name it reads.
//!
//! ```
//! use subset_query::escape::{decode, encode};
//!
//! assert_eq!(encode("a,b"), "a%5C%2Cb");
//! assert_eq!(decode("a%5C%2Cb=x"), "a,b=x");
//! ```

/// The fixed escape table as `(literal, escaped)` pairs.
pub const ESCAPES: [(&str, &str); 3] = [(",", "%5C%2C"), (" ", "%20"), ("=", "%5C%3D")];

/// Replaces every escaped form in `query` with its literal character.
///
/// This is plain substring replacement, there is no way to escape an
/// escape sequence.
pub fn decode(query: &str) -> String {
    ESCAPES
        .iter()
        .fold(query.to_string(), |acc, &(literal, escaped)| {
            acc.replace(escaped, literal)
        })
}

/// Escapes the reserved characters of a single field name.
pub fn encode(field: &str) -> String {
    ESCAPES
        .iter()
        .fold(field.to_string(), |acc, &(literal, escaped)| {
            acc.replace(literal, escaped)
        })
}
