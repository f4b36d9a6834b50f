//! Compile mongoose-style definition documents into a [`Schema`].
//!
//! | Definition                                   | Compiles to                         |
//! |----------------------------------------------|-------------------------------------|
//! | `"String"`                                   | bare type                           |
//! | `{ "type": "Number", "min": [10, "msg"] }`   | type with validators                |
//! | `{ "type": { ...definition... } }`           | embedded sub-document               |
//! | `[ "String" ]`, `{ "type": ["String"] }`     | array of a primitive                |
//! | `[ { ...definition... } ]`                   | array of sub-documents              |
//! | `{ "field2": { ... } }` (no `type` key)      | nested path, flattened with dots    |
//! | `{}`, `[]`                                   | `Mixed`, array of `Mixed`           |

use chrono::DateTime;
use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::schema::{FieldDescriptor, Schema};
use crate::types::{ArrayItems, Bound, FieldType};
use crate::value::MockValue;

/// Options accepted but not used for generation.
const IGNORED_OPTIONS: &[&str] = &[
    "default",
    "trim",
    "lowercase",
    "uppercase",
    "index",
    "unique",
    "sparse",
    "select",
    "immutable",
    "alias",
    "validate",
    "match",
    "get",
    "set",
    "ref",
    "description",
];

impl Schema {
    /// Compile a definition document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidDefinition`] for malformed entries and
    /// validators declared on types that cannot honor them, and
    /// [`SchemaError::UnknownValidator`] for unrecognised option keys.
    pub fn from_definition(definition: &Value) -> Result<Schema, SchemaError> {
        let map = definition
            .as_object()
            .ok_or_else(|| SchemaError::definition("", "definition must be an object"))?;
        let mut schema = Schema::new();
        compile_fields(map, "", &mut schema)?;
        Ok(schema)
    }

    /// Compile a definition document given as JSON text.
    pub fn from_definition_str(json: &str) -> Result<Schema, SchemaError> {
        let value: Value = serde_json::from_str(json)?;
        Schema::from_definition(&value)
    }

    /// Compile a definition document given as YAML text.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> Result<Schema, SchemaError> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Schema::from_definition(&value)
    }
}

fn compile_fields(map: &Map<String, Value>, prefix: &str, schema: &mut Schema) -> Result<(), SchemaError> {
    for (key, entry) in map {
        if key.split('.').any(str::is_empty) {
            return Err(SchemaError::definition(
                &format!("{prefix}{key}"),
                "field names must not be empty",
            ));
        }
        let path = format!("{prefix}{key}");
        match entry {
            Value::Object(obj) if !obj.is_empty() && !obj.contains_key("type") => {
                compile_fields(obj, &format!("{path}."), schema)?;
            }
            _ => {
                let descriptor = compile_descriptor(entry, &path)?;
                schema.insert(path, descriptor);
            }
        }
    }
    Ok(())
}

fn compile_descriptor(entry: &Value, path: &str) -> Result<FieldDescriptor, SchemaError> {
    match entry {
        Value::String(name) => Ok(FieldDescriptor::new(FieldType::from_name(name))),
        Value::Array(items) => Ok(FieldDescriptor::new(compile_array(items, path)?)),
        Value::Object(obj) if obj.is_empty() => Ok(FieldDescriptor::new(FieldType::Mixed)),
        Value::Object(obj) => {
            let field_type = match obj.get("type") {
                Some(Value::String(name)) => FieldType::from_name(name),
                Some(Value::Object(sub)) => FieldType::Embedded {
                    schema: compile_sub_schema(sub, path)?,
                },
                Some(Value::Array(items)) => compile_array(items, path)?,
                _ => {
                    return Err(SchemaError::definition(
                        path,
                        "`type` must be a type name, a definition object or an array",
                    ))
                }
            };
            let mut descriptor = FieldDescriptor::new(field_type);
            for (option, value) in obj {
                apply_option(&mut descriptor, option, value, path)?;
            }
            Ok(descriptor)
        }
        other => Err(SchemaError::definition(
            path,
            format!("unsupported definition value `{other}`"),
        )),
    }
}

fn compile_sub_schema(map: &Map<String, Value>, path: &str) -> Result<Schema, SchemaError> {
    let mut schema = Schema::new();
    compile_fields(map, "", &mut schema).map_err(|e| match e {
        SchemaError::InvalidDefinition { path: inner, reason } => SchemaError::InvalidDefinition {
            path: format!("{path}.{inner}"),
            reason,
        },
        other => other,
    })?;
    Ok(schema)
}

fn compile_array(items: &[Value], path: &str) -> Result<FieldType, SchemaError> {
    let items = match items {
        [] => ArrayItems::Element(FieldDescriptor::new(FieldType::Mixed)),
        [Value::Object(obj)] if !obj.is_empty() && !obj.contains_key("type") => {
            ArrayItems::Schema(compile_sub_schema(obj, path)?)
        }
        [element] => ArrayItems::Element(compile_descriptor(element, path)?),
        _ => {
            return Err(SchemaError::definition(
                path,
                "array definitions take exactly one element type",
            ))
        }
    };
    Ok(FieldType::Array {
        items: Box::new(items),
    })
}

fn apply_option(
    descriptor: &mut FieldDescriptor,
    option: &str,
    value: &Value,
    path: &str,
) -> Result<(), SchemaError> {
    match option {
        "type" => {}
        "required" => descriptor.required = parse_required(value, path)?,
        "enum" => {
            if descriptor.field_type.is_structural() {
                return Err(SchemaError::definition(path, "`enum` on a structural type"));
            }
            descriptor.enum_values = Some(parse_enum(value, path, &descriptor.field_type)?);
        }
        "min" | "max" => {
            if !descriptor.field_type.accepts_numeric_bounds() {
                return Err(SchemaError::definition(
                    path,
                    format!("`{option}` is not supported on {}", descriptor.field_type.name()),
                ));
            }
            let bound = parse_bound(value, option, path, &descriptor.field_type)?;
            if option == "min" {
                descriptor.min = Some(bound);
            } else {
                descriptor.max = Some(bound);
            }
        }
        "minLength" | "minlength" | "maxLength" | "maxlength" => {
            if !descriptor.field_type.accepts_length_bounds() {
                return Err(SchemaError::definition(
                    path,
                    format!("`{option}` is not supported on {}", descriptor.field_type.name()),
                ));
            }
            let bound = parse_bound(value, option, path, &descriptor.field_type)?;
            if bound.value() < 0.0 {
                return Err(SchemaError::definition(path, format!("`{option}` must not be negative")));
            }
            if option.starts_with("min") {
                descriptor.min_length = Some(bound);
            } else {
                descriptor.max_length = Some(bound);
            }
        }
        ignored if IGNORED_OPTIONS.contains(&ignored) => {}
        unknown => {
            return Err(SchemaError::UnknownValidator {
                path: path.to_string(),
                validator: unknown.to_string(),
            })
        }
    }
    Ok(())
}

fn parse_required(value: &Value, path: &str) -> Result<bool, SchemaError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Array(pair) => match pair.as_slice() {
            [Value::Bool(b), Value::String(_)] => Ok(*b),
            _ => Err(SchemaError::definition(path, "`required` must be a bool or [bool, message]")),
        },
        _ => Err(SchemaError::definition(path, "`required` must be a bool or [bool, message]")),
    }
}

fn parse_enum(value: &Value, path: &str, field_type: &FieldType) -> Result<Vec<Value>, SchemaError> {
    let values = match value {
        Value::Array(values) => values,
        Value::Object(obj) => obj
            .get("values")
            .and_then(Value::as_array)
            .ok_or_else(|| SchemaError::definition(path, "`enum` object needs a `values` array"))?,
        _ => return Err(SchemaError::definition(path, "`enum` must be an array")),
    };
    if values.is_empty() {
        return Err(SchemaError::definition(path, "`enum` must list at least one value"));
    }
    if let Some(bad) = values
        .iter()
        .find(|v| MockValue::from_literal(v, field_type).is_none())
    {
        return Err(SchemaError::definition(
            path,
            format!("enum value `{bad}` is not a valid {}", field_type.name()),
        ));
    }
    Ok(values.clone())
}

fn parse_bound(value: &Value, option: &str, path: &str, field_type: &FieldType) -> Result<Bound, SchemaError> {
    let number = |v: &Value| -> Option<f64> {
        match (v, field_type) {
            (Value::String(s), FieldType::Date) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|d| d.timestamp_millis() as f64),
            _ => v.as_f64(),
        }
    };
    let invalid = || SchemaError::definition(path, format!("`{option}` must be a number or [number, message]"));
    match value {
        Value::Array(pair) => match pair.as_slice() {
            [v, Value::String(msg)] => Ok(Bound::WithMessage(number(v).ok_or_else(invalid)?, msg.clone())),
            _ => Err(invalid()),
        },
        v => number(v).map(Bound::Bare).ok_or_else(invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_objects_flatten_into_dotted_paths() {
        let schema = Schema::from_definition(&json!({
            "field1": {
                "field2": { "field4": "Date", "field6": { "field7": { "type": "String", "enum": ["a"] } } },
                "field3": "Number",
            }
        }))
        .unwrap();
        let names: Vec<&str> = schema.paths().map(|(n, _)| n).collect();
        assert_eq!(names, ["field1.field2.field4", "field1.field2.field6.field7", "field1.field3"]);
    }

    #[test]
    fn type_object_becomes_embedded() {
        let schema = Schema::from_definition(&json!({
            "address": { "type": { "city": { "type": "String", "required": true } }, "required": true }
        }))
        .unwrap();
        let address = schema.path("address").unwrap();
        assert!(address.required);
        let inner = address.embedded_schema().unwrap();
        assert!(inner.path("city").unwrap().required);
    }

    #[test]
    fn arrays_of_primitives_and_sub_documents() {
        let schema = Schema::from_definition(&json!({
            "tags": ["String"],
            "hobbies": [{ "name": "String", "years": { "type": "Number", "enum": [1995, 2000] } }],
            "codes": [{ "type": "String", "enum": ["x", "y"] }],
            "anything": [],
        }))
        .unwrap();
        assert!(matches!(schema.path("tags").unwrap().array_items(), Some(ArrayItems::Element(d)) if d.field_type == FieldType::String));
        assert!(matches!(schema.path("hobbies").unwrap().array_items(), Some(ArrayItems::Schema(s)) if s.len() == 2));
        assert!(matches!(schema.path("codes").unwrap().array_items(), Some(ArrayItems::Element(d)) if d.enum_values.is_some()));
        assert!(matches!(schema.path("anything").unwrap().array_items(), Some(ArrayItems::Element(d)) if d.field_type == FieldType::Mixed));
    }

    #[test]
    fn bounds_with_messages() {
        let schema = Schema::from_definition(&json!({
            "age": { "type": "Number", "min": [10, "Become an adult"], "max": 100 },
            "bio": { "type": "String", "minlength": 5, "maxLength": [15, "Too long"] },
        }))
        .unwrap();
        let age = schema.path("age").unwrap();
        assert_eq!(age.min, Some(Bound::WithMessage(10.0, "Become an adult".into())));
        assert_eq!(age.max, Some(Bound::Bare(100.0)));
        let bio = schema.path("bio").unwrap();
        assert_eq!(bio.min_length.as_ref().map(Bound::value), Some(5.0));
        assert_eq!(bio.max_length.as_ref().and_then(Bound::message), Some("Too long"));
    }

    #[test]
    fn date_bounds_accept_rfc3339() {
        let schema = Schema::from_definition(&json!({
            "born": { "type": "Date", "min": "1970-01-01T00:00:01Z" }
        }))
        .unwrap();
        assert_eq!(schema.path("born").unwrap().min, Some(Bound::Bare(1000.0)));
    }

    #[test]
    fn rejects_bounds_on_wrong_types() {
        let err = Schema::from_definition(&json!({ "active": { "type": "Boolean", "min": 1 } })).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDefinition { ref path, .. } if path == "active"));
        let err = Schema::from_definition(&json!({ "n": { "type": "Number", "maxLength": 3 } })).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDefinition { .. }));
    }

    #[test]
    fn rejects_unknown_validators_and_empty_enums() {
        let err = Schema::from_definition(&json!({ "a": { "type": "String", "minimum": 3 } })).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownValidator { ref validator, .. } if validator == "minimum"));
        let err = Schema::from_definition(&json!({ "a": { "type": "String", "enum": [] } })).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDefinition { .. }));
    }

    #[test]
    fn ignores_harmless_mongoose_options() {
        let schema = Schema::from_definition(&json!({
            "email": { "type": "String", "trim": true, "lowercase": true, "unique": true }
        }))
        .unwrap();
        assert_eq!(schema.path("email").unwrap().field_type, FieldType::String);
    }

    #[test]
    fn nested_errors_carry_full_path() {
        let err = Schema::from_definition(&json!({
            "address": { "type": { "zip": { "type": "String", "min": 1 } } }
        }))
        .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDefinition { ref path, .. } if path == "address.zip"));
    }

    #[test]
    fn root_must_be_an_object() {
        assert!(Schema::from_definition(&json!(["String"])).is_err());
        assert!(Schema::from_definition(&json!({ "a": 42 })).is_err());
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn compiles_yaml() {
        let schema = Schema::from_yaml(
            r#"
email:
  type: String
  required: true
tags: [String]
"#,
        )
        .unwrap();
        assert!(schema.path("email").unwrap().required);
        assert!(schema.path("tags").unwrap().array_items().is_some());
    }
}
