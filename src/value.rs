use std::collections::HashMap;

/// A dynamically typed document value.
///
/// Queries only ever read values: field lookups walk [`Value::Object`]s and
/// every other shape is a leaf that can be selected but not descended into.
///
/// # Examples
///
/// ```
/// use subset_query::Value;
/// use std::collections::HashMap;
///
/// let mut user = HashMap::new();
/// user.insert("id".to_string(), Value::String("u1".to_string()));
///
/// let mut root = HashMap::new();
/// root.insert("user".to_string(), Value::Object(user));
/// let root = Value::Object(root);
///
/// assert_eq!(root.get("user").and_then(|u| u.get("id")), Some(&Value::String("u1".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Floating-point number
    Float(f64),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// UTF-8 string
    String(String),

    /// Array of values
    Array(Vec<Value>),

    /// Object with string keys
    Object(HashMap<String, Value>),
}

/// Outcome of looking up one field in a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// The value is an object holding the field
    Found(&'a Value),
    /// The value is null, or an object without the field
    Missing,
    /// The value has no fields at all; carries its type name
    Mismatch(&'static str),
}

impl Value {
    /// Looks up `field` by exact key match.
    pub fn lookup(&self, field: &str) -> Lookup<'_> {
        match self {
            Value::Object(obj) => obj.get(field).map_or(Lookup::Missing, Lookup::Found),
            Value::Null => Lookup::Missing,
            other => Lookup::Mismatch(other.type_name()),
        }
    }

    /// The field value, if this is an object containing `field`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        match self.lookup(field) {
            Lookup::Found(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Human-readable type name, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(obj: HashMap<String, Value>) -> Self {
        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(pairs: Vec<(&str, Value)>) -> Value {
        Value::Object(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    #[test]
    fn test_lookup_found() {
        let v = object(vec![("a", Value::Integer(1))]);
        assert_eq!(v.lookup("a"), Lookup::Found(&Value::Integer(1)));
    }

    #[test]
    fn test_lookup_missing() {
        let v = object(vec![("a", Value::Integer(1))]);
        assert_eq!(v.lookup("b"), Lookup::Missing);
        assert_eq!(v.lookup(""), Lookup::Missing);
        assert_eq!(Value::Null.lookup("a"), Lookup::Missing);
    }

    #[test]
    fn test_lookup_mismatch() {
        assert_eq!(Value::Integer(3).lookup("a"), Lookup::Mismatch("integer"));
        assert_eq!(
            Value::Array(vec![Value::Null]).lookup("0"),
            Lookup::Mismatch("array")
        );
        assert_eq!(
            Value::String("abc".into()).lookup("len"),
            Lookup::Mismatch("string")
        );
    }

    #[test]
    fn test_null_field_is_found() {
        let v = object(vec![("a", Value::Null)]);
        assert_eq!(v.lookup("a"), Lookup::Found(&Value::Null));
        assert_eq!(v.get("a"), Some(&Value::Null));
    }
}
