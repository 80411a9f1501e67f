//! Documentation content for the subset CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Escaping,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "grammar" => Some(Self::Syntax),
            "escaping" | "escape" | "escapes" => Some(Self::Escaping),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"SUBSET DOCUMENTATION

A subset query picks fields out of a JSON document by their dotted path and
renames them in a new, flat object.

DOCUMENTATION CATEGORIES

  syntax            Paths, aliases, and joining several selections
  escaping          Writing field names that contain ',', '=' or spaces
  errors            Grammar errors and how missing fields are handled

QUICK REFERENCE

  a=b               Select field a, output it as b
  a.b.c=x           Select a nested field
  a=x,b.c=y         Several selections, each from the document root
  (empty query)     The whole document, unchanged

Run 'subset doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Escaping) => Ok(ESCAPING_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Paths and Aliases

GRAMMAR
  expression := subset_spec ( ',' expression )?
  subset_spec := field '=' alias
               | field '.' subset_spec

SELECTION
  path=alias
    Resolve the dotted path from the document root and write the value
    under alias in the output object.

    Example:
      Input:  {"user": {"id": "u1", "address": {"city": "Oslo"}}}
      Query:  user.id=id,user.address.city=town
      Output: {"id": "u1", "town": "Oslo"}

FIELD NAMES
  A field name is everything up to the next '.', ',' or '='. Leading
  whitespace is ignored; whitespace inside or after a name is kept.
  An empty name (as in 'a..b=c') is legal and matches no field.

DUPLICATE ALIASES
  When two selections share an alias the later one wins.
  Use --reject-duplicates to make this an error.
"#;

const ESCAPING_DOC: &str = r#"ESCAPING - Reserved Characters in Field Names

  ','   is written as   %5C%2C
  ' '   is written as   %20
  '='   is written as   %5C%3D

    Example:
      Input:  {"a,b": 1}
      Query:  a%5C%2Cb=x
      Output: {"x": 1}

  'subset encode <field>' prints the escaped form of a field name.
"#;

const ERRORS_DOC: &str = r#"ERRORS - Failures and Missing Fields

GRAMMAR ERRORS
  Unexpected end of input, expected FieldName     'a=' or 'a=b,'
  Unexpected end of input, expected Assignment    'a' or 'a.b'
  Unexpected token ..., expected Join             'a=b=c'

  A grammar error fails the whole query; no partial output is returned.

MISSING FIELDS
  A selection whose path does not exist is dropped without an error.

    Example:
      Input:  {"user": {"id": "u1"}}
      Query:  user.missing.x=x,user.id=id
      Output: {"id": "u1"}

  Descending into a value that is not an object (a string, a number, an
  array) is dropped the same way. Use --strict-paths to make it an error.
"#;
