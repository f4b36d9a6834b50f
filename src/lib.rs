//! # docmock: document schemas for mock data
//!
//! `docmock` describes document-oriented data models: named fields, their
//! types, how they nest, and the validators declared on them (`required`,
//! `enum`, `min`/`max`, `minLength`/`maxLength`). The sibling crate
//! `docmock-fake` walks these schemas to synthesize fixture documents.
//!
//! ## Quick Start
//!
//! ```rust
//! use docmock::prelude::*;
//!
//! let address = Schema::builder()
//!     .field("street", docmock::string())
//!     .field("city", docmock::string().required());
//!
//! let user = Schema::builder()
//!     .field("email", docmock::string().required())
//!     .field("age", docmock::number().min_with_message(18.0, "Too young").max(99))
//!     .field("role", docmock::string().enumeration(["admin", "user"]))
//!     .field("address", docmock::embedded(address))
//!     .field("tags", docmock::array(docmock::string()));
//!
//! assert_eq!(user.len(), 5);
//! ```
//!
//! ## Definition documents
//!
//! Schemas can also be compiled from mongoose-style definitions, where plain
//! nested objects become dotted paths:
//!
//! ```rust
//! use docmock::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::from_definition(&json!({
//!     "firstName": { "type": "String", "required": true },
//!     "age": { "type": "Number", "min": [10, "Become an adult"], "max": 100 },
//!     "field1": { "field2": { "field3": "Date" } },
//!     "hobbies": [{ "name": "String" }],
//! }))
//! .unwrap();
//!
//! assert!(schema.path("field1.field2.field3").is_some());
//! ```

pub mod definition;
pub mod error;
pub mod input;
pub mod schema;
pub mod types;
pub mod validate;
pub mod value;

// Re-export serde_json for callers building definitions
#[doc(hidden)]
pub use serde_json;

use schema::{FieldDescriptor, Schema};
use types::{ArrayItems, FieldType};

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Create a text field.
pub fn string() -> FieldDescriptor {
    FieldDescriptor::new(FieldType::String)
}

/// Create a numeric field.
pub fn number() -> FieldDescriptor {
    FieldDescriptor::new(FieldType::Number)
}

/// Create a 128-bit decimal field.
pub fn decimal128() -> FieldDescriptor {
    FieldDescriptor::new(FieldType::Decimal128)
}

/// Create an arbitrary-precision integer field.
pub fn big_int() -> FieldDescriptor {
    FieldDescriptor::new(FieldType::BigInt)
}

/// Create an object id field.
pub fn object_id() -> FieldDescriptor {
    FieldDescriptor::new(FieldType::ObjectId)
}

/// Create a date field.
pub fn date() -> FieldDescriptor {
    FieldDescriptor::new(FieldType::Date)
}

/// Create a boolean field.
pub fn boolean() -> FieldDescriptor {
    FieldDescriptor::new(FieldType::Boolean)
}

/// Create a binary field.
pub fn buffer() -> FieldDescriptor {
    FieldDescriptor::new(FieldType::Buffer)
}

/// Create an untyped field.
pub fn mixed() -> FieldDescriptor {
    FieldDescriptor::new(FieldType::Mixed)
}

/// Create a sub-document field with its own schema.
pub fn embedded(schema: Schema) -> FieldDescriptor {
    FieldDescriptor::new(FieldType::Embedded { schema })
}

/// Create an array of sub-documents.
pub fn array_of(schema: Schema) -> FieldDescriptor {
    FieldDescriptor::new(FieldType::Array {
        items: Box::new(ArrayItems::Schema(schema)),
    })
}

/// Create an array whose elements follow `element`.
///
/// ```
/// let tags = docmock::array(docmock::string().enumeration(["a", "b"]));
/// assert!(tags.array_items().is_some());
/// ```
pub fn array(element: FieldDescriptor) -> FieldDescriptor {
    FieldDescriptor::new(FieldType::Array {
        items: Box::new(ArrayItems::Element(element)),
    })
}

/// Prelude: import everything commonly needed.
pub mod prelude {
    pub use crate::error::{IssueCode, PathSegment, SchemaError, ValidationError, ValidationIssue};
    pub use crate::input::SchemaInput;
    pub use crate::schema::{FieldDescriptor, Schema};
    pub use crate::types::{ArrayItems, Bound, FieldType};
    pub use crate::value::{Document, MockValue};
}
