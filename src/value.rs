use base64::Engine as _;
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

use crate::types::FieldType;

/// Ordered document: keys keep their insertion order.
pub type Document = IndexMap<String, MockValue>;

/// A value inside a generated document.
///
/// Richer than [`serde_json::Value`]: dates, binaries and object ids keep
/// their own variants so that type checks stay exact. Serialises to plain
/// JSON (RFC 3339 dates, base64 binaries, hex object ids).
#[derive(Debug, Clone, PartialEq)]
pub enum MockValue {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Date(DateTime<Utc>),
    Binary(Vec<u8>),
    ObjectId(String),
    Array(Vec<MockValue>),
    Document(Document),
}

impl MockValue {
    /// Short type name used in messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            MockValue::Null => "null",
            MockValue::Bool(_) => "boolean",
            MockValue::Int(_) => "integer",
            MockValue::Double(_) => "double",
            MockValue::String(_) => "string",
            MockValue::Date(_) => "date",
            MockValue::Binary(_) => "binary",
            MockValue::ObjectId(_) => "objectId",
            MockValue::Array(_) => "array",
            MockValue::Document(_) => "document",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, MockValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MockValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            MockValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of ints, doubles and dates (epoch milliseconds).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MockValue::Int(i) => Some(*i as f64),
            MockValue::Double(d) => Some(*d),
            MockValue::Date(d) => Some(d.timestamp_millis() as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MockValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<MockValue>> {
        match self {
            MockValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            MockValue::Document(d) => Some(d),
            _ => None,
        }
    }

    /// Look up a value by key inside a document.
    pub fn get(&self, key: &str) -> Option<&MockValue> {
        self.as_document().and_then(|d| d.get(key))
    }

    /// Look up a value by dotted path (`"address.city"`).
    pub fn get_path(&self, path: &str) -> Option<&MockValue> {
        path.split('.')
            .try_fold(self, |current, segment| current.get(segment))
    }

    /// Sorted list of every key path in the tree. Array elements are
    /// described with `[]`.
    ///
    /// Two documents generated from the same schema share this shape.
    pub fn key_paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_key_paths(self, String::new(), &mut out);
        out.sort();
        out
    }

    /// Loose equality used for enum checks: numbers compare by value
    /// regardless of int/double representation, object ids compare with
    /// their hex text case-insensitively.
    pub fn loosely_equals(&self, other: &MockValue) -> bool {
        match (self, other) {
            (MockValue::Int(_) | MockValue::Double(_), MockValue::Int(_) | MockValue::Double(_)) => {
                self.as_f64() == other.as_f64()
            }
            (
                MockValue::ObjectId(a) | MockValue::String(a),
                MockValue::ObjectId(b) | MockValue::String(b),
            ) if matches!(self, MockValue::ObjectId(_)) || matches!(other, MockValue::ObjectId(_)) => {
                a.eq_ignore_ascii_case(b)
            }
            _ => self == other,
        }
    }

    /// Read a JSON literal (an enum candidate) as a value of `field_type`.
    ///
    /// Dates accept RFC 3339 text or epoch milliseconds, numeric types accept
    /// numeric text, buffers take the UTF-8 bytes of a string or an array of
    /// byte values. `Mixed` and unknown types keep the literal as is.
    /// Returns `None` when the literal cannot represent the type.
    ///
    /// ```
    /// use docmock::prelude::*;
    /// use serde_json::json;
    ///
    /// let v = MockValue::from_literal(&json!("42"), &FieldType::Number);
    /// assert_eq!(v, Some(MockValue::Int(42)));
    /// assert!(MockValue::from_literal(&json!("soon"), &FieldType::Date).is_none());
    /// ```
    pub fn from_literal(literal: &Value, field_type: &FieldType) -> Option<MockValue> {
        match (field_type, literal) {
            (FieldType::Mixed | FieldType::Other { .. }, v) => Some(MockValue::from(v)),
            (FieldType::Embedded { .. } | FieldType::Array { .. }, _) => None,

            (FieldType::String, Value::String(s)) => Some(MockValue::String(s.clone())),
            (FieldType::String, Value::Number(n)) => Some(MockValue::String(n.to_string())),
            (FieldType::String, Value::Bool(b)) => Some(MockValue::String(b.to_string())),

            (FieldType::Number | FieldType::Decimal128, Value::Number(n)) => Some(number_value(n)),
            (FieldType::Number | FieldType::Decimal128, Value::String(s)) => {
                let s = s.trim();
                s.parse::<i64>()
                    .map(MockValue::Int)
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(MockValue::Double))
            }

            (FieldType::BigInt, Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(integral))
                .map(MockValue::Int),
            (FieldType::BigInt, Value::String(s)) => s.trim().parse::<i64>().ok().map(MockValue::Int),

            (FieldType::Date, Value::String(s)) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|d| MockValue::Date(d.with_timezone(&Utc))),
            (FieldType::Date, Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(integral))
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
                .map(MockValue::Date),

            (FieldType::Boolean, Value::Bool(b)) => Some(MockValue::Bool(*b)),
            (FieldType::Boolean, Value::String(s)) => match s.as_str() {
                "true" => Some(MockValue::Bool(true)),
                "false" => Some(MockValue::Bool(false)),
                _ => None,
            },

            (FieldType::ObjectId, Value::String(s))
                if s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit()) =>
            {
                Some(MockValue::ObjectId(s.clone()))
            }

            (FieldType::Buffer, Value::String(s)) => Some(MockValue::Binary(s.as_bytes().to_vec())),
            (FieldType::Buffer, Value::Array(items)) => items
                .iter()
                .map(|v| v.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect::<Option<Vec<u8>>>()
                .map(MockValue::Binary),

            _ => None,
        }
    }

    /// Convert to a plain JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            MockValue::Null => Value::Null,
            MockValue::Bool(b) => Value::Bool(*b),
            MockValue::Int(i) => Value::from(*i),
            MockValue::Double(d) => serde_json::Number::from_f64(*d)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            MockValue::String(s) => Value::String(s.clone()),
            MockValue::Date(d) => Value::String(d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            MockValue::Binary(b) => Value::String(base64::engine::general_purpose::STANDARD.encode(b)),
            MockValue::ObjectId(id) => Value::String(id.clone()),
            MockValue::Array(items) => Value::Array(items.iter().map(MockValue::to_json).collect()),
            MockValue::Document(doc) => Value::Object(
                doc.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

fn number_value(n: &Number) -> MockValue {
    match n.as_i64() {
        Some(i) => MockValue::Int(i),
        None => MockValue::Double(n.as_f64().unwrap_or(f64::NAN)),
    }
}

/// Whole floats inside the `i64` range.
fn integral(f: f64) -> Option<i64> {
    (f.fract() == 0.0 && f.abs() < 9.0e18).then_some(f as i64)
}

fn collect_key_paths(value: &MockValue, prefix: String, out: &mut Vec<String>) {
    match value {
        MockValue::Document(doc) => {
            for (key, child) in doc {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                out.push(path.clone());
                collect_key_paths(child, path, out);
            }
        }
        MockValue::Array(items) => {
            for item in items {
                collect_key_paths(item, format!("{prefix}[]"), out);
            }
        }
        _ => {}
    }
}

impl From<&Value> for MockValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => MockValue::Null,
            Value::Bool(b) => MockValue::Bool(*b),
            Value::Number(n) => number_value(n),
            Value::String(s) => MockValue::String(s.clone()),
            Value::Array(items) => MockValue::Array(items.iter().map(MockValue::from).collect()),
            Value::Object(map) => MockValue::Document(
                map.iter()
                    .map(|(k, v)| (k.clone(), MockValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for MockValue {
    fn from(value: Value) -> Self {
        MockValue::from(&value)
    }
}

impl Serialize for MockValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MockValue::Null => serializer.serialize_unit(),
            MockValue::Bool(b) => serializer.serialize_bool(*b),
            MockValue::Int(i) => serializer.serialize_i64(*i),
            MockValue::Double(d) => serializer.serialize_f64(*d),
            MockValue::String(s) | MockValue::ObjectId(s) => serializer.serialize_str(s),
            MockValue::Date(d) => {
                serializer.serialize_str(&d.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            MockValue::Binary(b) => {
                serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(b))
            }
            MockValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            MockValue::Document(doc) => {
                let mut map = serializer.serialize_map(Some(doc.len()))?;
                for (k, v) in doc {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}
