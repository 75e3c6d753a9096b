use std::fmt;

/// A typed value, either bound to an operation parameter or produced by an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Value {
    /// Coerces a raw argument token into a typed value.
    ///
    /// Rules are applied in order :
    /// - `True` / `False` become booleans
    /// - values starting with a single quote lose their surrounding single quotes
    /// - values starting with a double quote lose their surrounding double quotes
    /// - ASCII digits only become integers (when they fit in an `i64`)
    /// - anything else is kept as is
    ///
    /// # Examples
    ///
    /// ```
    /// use texttools::value::Value;
    ///
    /// assert_eq!(Value::from_token("True"), Value::Bool(true));
    /// assert_eq!(Value::from_token("'!'"), Value::Str("!".to_string()));
    /// assert_eq!(Value::from_token("42"), Value::Int(42));
    /// assert_eq!(Value::from_token("w"), Value::Str("w".to_string()));
    /// ```
    pub fn from_token(token: &str) -> Value {
        match token {
            "True" => Value::Bool(true),
            "False" => Value::Bool(false),
            t if t.starts_with('\'') => Value::Str(t.trim_matches('\'').to_string()),
            t if t.starts_with('"') => Value::Str(t.trim_matches('"').to_string()),
            t if !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()) => t
                .parse::<i64>()
                .map_or_else(|_| Value::Str(t.to_string()), Value::Int),
            t => Value::Str(t.to_string()),
        }
    }

    /// Truthiness of the value: `false`, `0` and the empty string are false
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Str(s) => !s.is_empty(),
        }
    }

    /// The textual form of the value, borrowing when it already is a string
    pub fn as_text(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Value::Str(s) => std::borrow::Cow::Borrowed(s.as_str()),
            other => std::borrow::Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}
