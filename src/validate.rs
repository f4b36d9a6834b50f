use crate::error::{IssueCode, PathSegment, ValidationError};
use crate::schema::{FieldDescriptor, Schema};
use crate::types::{ArrayItems, FieldType};
use crate::value::MockValue;

impl Schema {
    /// Validate a document against this schema.
    ///
    /// Every declared path is looked up by its dotted name; missing or `null`
    /// values only fail when the field is `required`. Present values are
    /// checked for type, enum membership, numeric bounds and length bounds.
    /// Embedded documents and array elements are validated recursively.
    ///
    /// All issues are collected before returning.
    ///
    /// # Example
    /// ```
    /// use docmock::prelude::*;
    /// use serde_json::json;
    ///
    /// let schema = Schema::builder()
    ///     .field("name", docmock::string().required())
    ///     .field("age", docmock::number().min(18));
    ///
    /// assert!(schema.validate(&MockValue::from(json!({"name": "Ada", "age": 36}))).is_ok());
    /// let err = schema.validate(&MockValue::from(json!({"age": 3}))).unwrap_err();
    /// assert_eq!(err.issues.len(), 2);
    /// ```
    pub fn validate(&self, document: &MockValue) -> Result<(), ValidationError> {
        if !matches!(document, MockValue::Document(_)) {
            return Err(invalid_type("document", document));
        }

        let mut errors = ValidationError::new();
        for (name, descriptor) in self.paths() {
            let result = match document.get_path(name) {
                None | Some(MockValue::Null) => {
                    if descriptor.required {
                        Err(ValidationError::single(
                            IssueCode::MissingField,
                            format!("Path `{name}` is required"),
                        ))
                    } else {
                        Ok(())
                    }
                }
                Some(value) => validate_field(descriptor, value),
            };
            if let Err(e) = result {
                errors = errors.merge(prefix_dotted(e, name));
            }
        }
        errors.into_result()
    }

    /// Shorthand for `validate(..).is_ok()`.
    pub fn is_valid(&self, document: &MockValue) -> bool {
        self.validate(document).is_ok()
    }
}

fn prefix_dotted(err: ValidationError, name: &str) -> ValidationError {
    name.rsplit('.')
        .fold(err, |e, segment| e.with_prefix(PathSegment::Field(segment.to_string())))
}

fn validate_field(descriptor: &FieldDescriptor, value: &MockValue) -> Result<(), ValidationError> {
    match &descriptor.field_type {
        FieldType::Embedded { schema } => return schema.validate(value),
        FieldType::Array { items } => return validate_array(items, value),
        field_type => check_type(field_type, value)?,
    }

    let mut errors = ValidationError::new();

    if let Some(candidates) = &descriptor.enum_values {
        let field_type = &descriptor.field_type;
        if !candidates.iter().any(|c| {
            MockValue::from_literal(c, field_type).is_some_and(|c| c.loosely_equals(value))
        }) {
            errors.push(
                IssueCode::InvalidEnumValue,
                format!("`{}` is not a valid enum value", value.to_json()),
            );
        }
    }

    if let Some(n) = value.as_f64() {
        if let Some(min) = &descriptor.min {
            if n < min.value() {
                errors.push(
                    IssueCode::TooSmall { minimum: min.value() },
                    min.message()
                        .map(String::from)
                        .unwrap_or_else(|| format!("Value {n} is less than minimum allowed value ({})", min.value())),
                );
            }
        }
        if let Some(max) = &descriptor.max {
            if n > max.value() {
                errors.push(
                    IssueCode::TooBig { maximum: max.value() },
                    max.message()
                        .map(String::from)
                        .unwrap_or_else(|| format!("Value {n} is more than maximum allowed value ({})", max.value())),
                );
            }
        }
    }

    if let Some(s) = value.as_str() {
        let len = s.chars().count() as f64;
        if let Some(min) = &descriptor.min_length {
            if len < min.value() {
                errors.push(
                    IssueCode::TooSmall { minimum: min.value() },
                    min.message()
                        .map(String::from)
                        .unwrap_or_else(|| format!("String is shorter than the minimum allowed length ({})", min.value())),
                );
            }
        }
        if let Some(max) = &descriptor.max_length {
            if len > max.value() {
                errors.push(
                    IssueCode::TooBig { maximum: max.value() },
                    max.message()
                        .map(String::from)
                        .unwrap_or_else(|| format!("String is longer than the maximum allowed length ({})", max.value())),
                );
            }
        }
    }

    errors.into_result()
}

fn validate_array(items: &ArrayItems, value: &MockValue) -> Result<(), ValidationError> {
    let elements = value
        .as_array()
        .ok_or_else(|| invalid_type("array", value))?;

    let mut errors = ValidationError::new();
    for (i, element) in elements.iter().enumerate() {
        let result = match items {
            ArrayItems::Schema(schema) => schema.validate(element),
            ArrayItems::Element(_) if element.is_null() => Ok(()),
            ArrayItems::Element(descriptor) => validate_field(descriptor, element),
        };
        if let Err(e) = result {
            errors = errors.merge(e.with_prefix(PathSegment::Index(i)));
        }
    }
    errors.into_result()
}

fn check_type(field_type: &FieldType, value: &MockValue) -> Result<(), ValidationError> {
    let ok = match field_type {
        FieldType::String => matches!(value, MockValue::String(_)),
        FieldType::Number | FieldType::Decimal128 => {
            matches!(value, MockValue::Int(_) | MockValue::Double(_))
        }
        FieldType::BigInt => matches!(value, MockValue::Int(_)),
        FieldType::ObjectId => match value {
            MockValue::ObjectId(_) => true,
            MockValue::String(s) => is_object_id_hex(s),
            _ => false,
        },
        FieldType::Date => matches!(value, MockValue::Date(_)),
        FieldType::Boolean => matches!(value, MockValue::Bool(_)),
        FieldType::Buffer => matches!(value, MockValue::Binary(_)),
        FieldType::Mixed | FieldType::Other { .. } => true,
        FieldType::Embedded { .. } => matches!(value, MockValue::Document(_)),
        FieldType::Array { .. } => matches!(value, MockValue::Array(_)),
    };
    if ok {
        Ok(())
    } else {
        Err(invalid_type(field_type.name(), value))
    }
}

fn is_object_id_hex(s: &str) -> bool {
    s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn invalid_type(expected: &str, value: &MockValue) -> ValidationError {
    ValidationError::single(
        IssueCode::InvalidType {
            expected: expected.to_string(),
            received: value.type_name().to_string(),
        },
        format!("Expected {expected}, received {}", value.type_name()),
    )
}
