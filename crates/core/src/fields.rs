//! Decoded request fields and their presence semantics.

use serde_json::Value;

/// Flat field mapping produced by request decoding.
///
/// JSON bodies keep their value types; URL-encoded bodies only ever produce
/// strings.
pub type FieldMap = serde_json::Map<String, Value>;

/// A single submitted field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Key missing from the mapping, or JSON `null`.
    Absent,
    Text(String),
    /// Any non-string JSON value (number, boolean, array, object).
    Other(Value),
}

impl FieldValue {
    /// Look up `key` in a decoded mapping.
    pub fn from_fields(fields: &FieldMap, key: &str) -> Self {
        match fields.get(key) {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::String(s)) => Self::Text(s.clone()),
            Some(other) => Self::Other(other.clone()),
        }
    }

    /// Whether the value counts as provided.
    ///
    /// Absent, empty strings, `false` and numeric zero are all "not provided";
    /// whitespace-only strings are provided.
    pub fn is_provided(&self) -> bool {
        match self {
            Self::Absent => false,
            Self::Text(s) => !s.is_empty(),
            Self::Other(Value::Bool(b)) => *b,
            Self::Other(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Self::Other(_) => true,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Length in characters, for text values only.
    pub fn char_len(&self) -> Option<usize> {
        self.as_text().map(|s| s.chars().count())
    }

    /// Column value for persistence: `None` unless provided.
    ///
    /// Non-text values are stored as their JSON text.
    pub fn into_column(self) -> Option<String> {
        if !self.is_provided() {
            return None;
        }
        match self {
            Self::Text(s) => Some(s),
            Self::Other(v) => Some(v.to_string()),
            Self::Absent => None,
        }
    }
}
