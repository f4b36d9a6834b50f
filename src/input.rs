use std::borrow::Cow;

use serde_json::Value;

use crate::error::SchemaError;
use crate::schema::Schema;

/// Trait for types that can be resolved into a compiled [`Schema`].
///
/// Implemented for [`Schema`] itself, for `serde_json::Value` and JSON text
/// (`&str`, `String`) holding a *serialised* schema (`{"paths": {...}}`), and
/// for file paths to such JSON.
///
/// Anything else, notably a plain definition mapping such as
/// `{"firstName": "String"}`, is rejected with [`SchemaError::NotASchema`];
/// compile those explicitly with [`Schema::from_definition`].
pub trait SchemaInput {
    /// Resolve this input into a schema.
    fn to_schema(&self) -> Result<Cow<'_, Schema>, SchemaError>;
}

impl SchemaInput for Schema {
    fn to_schema(&self) -> Result<Cow<'_, Schema>, SchemaError> {
        Ok(Cow::Borrowed(self))
    }
}

impl SchemaInput for Value {
    fn to_schema(&self) -> Result<Cow<'_, Schema>, SchemaError> {
        if !self.as_object().is_some_and(|o| o.contains_key("paths")) {
            return Err(SchemaError::NotASchema(format!(
                "expected a compiled schema object with `paths`, received {}",
                json_type_name(self)
            )));
        }
        serde_json::from_value(self.clone())
            .map(Cow::Owned)
            .map_err(|e| SchemaError::NotASchema(e.to_string()))
    }
}

impl SchemaInput for str {
    fn to_schema(&self) -> Result<Cow<'_, Schema>, SchemaError> {
        let value: Value = serde_json::from_str(self)?;
        let schema = value.to_schema()?.into_owned();
        Ok(Cow::Owned(schema))
    }
}

impl SchemaInput for String {
    fn to_schema(&self) -> Result<Cow<'_, Schema>, SchemaError> {
        self.as_str().to_schema()
    }
}

impl SchemaInput for std::path::Path {
    fn to_schema(&self) -> Result<Cow<'_, Schema>, SchemaError> {
        let content = std::fs::read_to_string(self)?;
        let schema = content.as_str().to_schema()?.into_owned();
        Ok(Cow::Owned(schema))
    }
}

impl SchemaInput for std::path::PathBuf {
    fn to_schema(&self) -> Result<Cow<'_, Schema>, SchemaError> {
        self.as_path().to_schema()
    }
}

impl<T: SchemaInput + ?Sized> SchemaInput for &T {
    fn to_schema(&self) -> Result<Cow<'_, Schema>, SchemaError> {
        (**self).to_schema()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "a plain object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn schema_resolves_borrowed() {
        let schema = Schema::builder().field("a", crate::string());
        assert!(matches!(schema.to_schema().unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn serialised_schema_resolves() {
        let schema = Schema::builder().field("a", crate::number().min(1));
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value.to_schema().unwrap().into_owned(), schema);
        let text = value.to_string();
        assert_eq!(text.to_schema().unwrap().into_owned(), schema);
    }

    #[test]
    fn plain_mapping_is_rejected() {
        let plain = json!({ "firstName": "String", "age": "Number" });
        let err = plain.to_schema().unwrap_err();
        assert!(matches!(err, SchemaError::NotASchema(_)));
        assert!(err.to_string().contains("a valid schema is required"));
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(matches!(json!(42).to_schema(), Err(SchemaError::NotASchema(_))));
        assert!(matches!("[1, 2]".to_schema(), Err(SchemaError::NotASchema(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::path::PathBuf::from("/definitely/not/here.json");
        assert!(matches!(path.to_schema(), Err(SchemaError::Io(_))));
    }
}
