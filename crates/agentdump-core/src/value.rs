//! Generic tagged value tree produced by the parser.
//!
//! Every parsed dump becomes a tree of [`Value`] nodes. The tree is immutable
//! after construction and carries no identity beyond the call that produced
//! it. Objects and mappings keep their entries in `Vec<(String, Value)>` to
//! preserve insertion order without depending on `IndexMap`.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// One node in the parsed dump tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The `None` keyword.
    Null,
    /// The `True` / `False` keywords.
    Bool(bool),
    /// Any numeric literal. The grammar does not distinguish integers from
    /// floats; the JSON projection re-introduces the distinction for whole
    /// numbers.
    Number(f64),
    /// A quoted string literal, escapes already resolved.
    String(String),
    /// A bare unquoted token that is not a reserved keyword.
    Ident(String),
    /// A `[a, b, c]` sequence literal.
    Sequence(Vec<Value>),
    /// A `{key: value}` mapping literal. Keys are string literals or bare
    /// identifiers in the source; both denote text.
    Mapping(Vec<(String, Value)>),
    /// A `Name(key=value, ...)` constructor call: one typed record instance.
    Object {
        name: String,
        fields: Vec<(String, Value)>,
    },
}

impl Value {
    /// Looks up a field of an [`Value::Object`] or an entry of a
    /// [`Value::Mapping`] by key. Returns `None` for other variants.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let entries = match self {
            Value::Object { fields, .. } => fields,
            Value::Mapping(entries) => entries,
            _ => return None,
        };
        entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Serializes this value to a compact JSON string.
    pub fn to_json(&self) -> String {
        // Serialization of Value cannot fail: keys are strings and serde_json
        // writes non-finite floats as null.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Serializes this value to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Field name under which a constructor call's type name appears in the JSON
/// projection of records the canonical model does not cover.
pub const TYPE_KEY: &str = "__type__";

impl Serialize for Value {
    /// JSON projection of the dump tree.
    ///
    /// Identifiers become strings, whole numbers become JSON integers, and
    /// unrecognized constructor calls become objects with a leading
    /// `"__type__"` entry so downstream rendering can still show what kind of
    /// record it was looking at.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && *n >= i64::MIN as f64 && *n <= i64::MAX as f64 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::String(s) | Value::Ident(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Object { name, fields } => {
                let mut map = serializer.serialize_map(Some(fields.len() + 1))?;
                map.serialize_entry(TYPE_KEY, name)?;
                for (k, v) in fields {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
