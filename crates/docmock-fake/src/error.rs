use docmock::error::{SchemaError, ValidationError};

/// Error type for mock generation.
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    /// The root input is not a schema; nothing was generated.
    #[error(transparent)]
    InvalidSchema(#[from] SchemaError),

    /// Two fields imply incompatible shapes at the same path.
    #[error("path conflict at `{path}`: already holds a value or a nested document")]
    PathConflict { path: String },

    /// A field name with an empty path segment.
    #[error("invalid field path `{0}`")]
    InvalidPath(String),

    /// Schema nesting deeper than the configured limit.
    #[error("schema nesting exceeds the maximum depth of {limit} at `{path}`")]
    DepthExceeded { path: String, limit: usize },

    /// `min` is greater than `max`.
    #[error("no value satisfies {min} <= x <= {max} for `{path}`")]
    UnsatisfiableBounds { path: String, min: f64, max: f64 },

    /// A constraint was declared on a type with no generator for it.
    #[error("`{constraint}` is not supported on {field_type} field `{path}`")]
    UnsupportedConstraint {
        path: String,
        field_type: String,
        constraint: &'static str,
    },

    /// An enum candidate that cannot be read as the field's type.
    #[error("enum value `{value}` is not a valid {field_type} for `{path}`")]
    InvalidEnumValue {
        path: String,
        field_type: String,
        value: String,
    },

    /// A generated document failed validation against its own schema.
    #[error("generated document failed validation:\n{0}")]
    Validation(ValidationError),

    /// Options could not be loaded.
    #[error("config error: {0}")]
    Config(String),

    /// Conversion to JSON or a typed value failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
