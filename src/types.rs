use serde::{Deserialize, Serialize};

use crate::schema::{FieldDescriptor, Schema};

/// Closed set of field types a schema can declare.
///
/// Structural types carry their nested shape. Type names the definition
/// compiler does not recognise are kept as [`FieldType::Other`] so generators
/// can apply their fallback policy instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldType {
    String,
    Number,
    Decimal128,
    BigInt,
    ObjectId,
    Date,
    Boolean,
    Buffer,
    Mixed,
    /// A sub-document with its own schema.
    Embedded { schema: Schema },
    /// An array of sub-documents or of a single element type.
    Array { items: Box<ArrayItems> },
    /// Unrecognised type name.
    Other { name: String },
}

/// Element type of an array field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayItems {
    Schema(Schema),
    Element(FieldDescriptor),
}

impl FieldType {
    /// Resolve a type name as written in a definition document.
    ///
    /// Matching is case-insensitive. Unknown names become [`FieldType::Other`].
    pub fn from_name(name: &str) -> FieldType {
        match name.to_ascii_lowercase().as_str() {
            "string" | "str" | "text" => FieldType::String,
            "number" | "int" | "integer" | "float" | "double" => FieldType::Number,
            "decimal128" | "decimal" => FieldType::Decimal128,
            "bigint" => FieldType::BigInt,
            "objectid" | "oid" => FieldType::ObjectId,
            "date" | "datetime" | "timestamp" => FieldType::Date,
            "boolean" | "bool" => FieldType::Boolean,
            "buffer" | "binary" | "bytes" => FieldType::Buffer,
            "mixed" | "any" => FieldType::Mixed,
            _ => FieldType::Other {
                name: name.to_string(),
            },
        }
    }

    /// Canonical type name.
    pub fn name(&self) -> &str {
        match self {
            FieldType::String => "String",
            FieldType::Number => "Number",
            FieldType::Decimal128 => "Decimal128",
            FieldType::BigInt => "BigInt",
            FieldType::ObjectId => "ObjectId",
            FieldType::Date => "Date",
            FieldType::Boolean => "Boolean",
            FieldType::Buffer => "Buffer",
            FieldType::Mixed => "Mixed",
            FieldType::Embedded { .. } => "Embedded",
            FieldType::Array { .. } => "Array",
            FieldType::Other { name } => name,
        }
    }

    /// Types whose values can be checked against `min` / `max`.
    pub fn accepts_numeric_bounds(&self) -> bool {
        matches!(
            self,
            FieldType::Number | FieldType::Decimal128 | FieldType::BigInt | FieldType::Date
        )
    }

    /// Types whose values can be checked against `minLength` / `maxLength`.
    pub fn accepts_length_bounds(&self) -> bool {
        matches!(self, FieldType::String)
    }

    /// Types that can hold free text.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            FieldType::String | FieldType::Mixed | FieldType::Other { .. }
        )
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, FieldType::Embedded { .. } | FieldType::Array { .. })
    }
}

/// A validator bound, declared either bare or together with an error message.
///
/// ```
/// use docmock::types::Bound;
///
/// let bare: Bound = serde_json::from_str("18").unwrap();
/// let pair: Bound = serde_json::from_str(r#"[18, "Too young"]"#).unwrap();
/// assert_eq!(bare.value(), pair.value());
/// assert_eq!(pair.message(), Some("Too young"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Bare(f64),
    WithMessage(f64, String),
}

impl Bound {
    pub fn value(&self) -> f64 {
        match self {
            Bound::Bare(v) | Bound::WithMessage(v, _) => *v,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Bound::Bare(_) => None,
            Bound::WithMessage(_, msg) => Some(msg),
        }
    }
}

impl From<f64> for Bound {
    fn from(v: f64) -> Self {
        Bound::Bare(v)
    }
}

impl From<i64> for Bound {
    fn from(v: i64) -> Self {
        Bound::Bare(v as f64)
    }
}

impl From<i32> for Bound {
    fn from(v: i32) -> Self {
        Bound::Bare(v as f64)
    }
}

impl From<usize> for Bound {
    fn from(v: usize) -> Self {
        Bound::Bare(v as f64)
    }
}
