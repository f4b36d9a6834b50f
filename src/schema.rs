use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{ArrayItems, Bound, FieldType};

/// Ordered mapping from field name to [`FieldDescriptor`].
///
/// Field names may be dotted paths (`"address.city"`); they are kept flat here
/// and only split into nesting levels when a document is assembled or
/// validated. Declaration order is preserved.
///
/// # Example
/// ```
/// use docmock::prelude::*;
///
/// let schema = Schema::builder()
///     .field("email", docmock::string().required())
///     .field("age", docmock::number().min(18).max(99));
/// assert_eq!(schema.len(), 2);
/// assert!(schema.path("email").unwrap().required);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    paths: IndexMap<String, FieldDescriptor>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias for [`Schema::new`], reads better at the start of a builder chain.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Add (or replace) a field.
    pub fn field(mut self, name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        self.insert(name, descriptor);
        self
    }

    /// Add (or replace) a field in place.
    pub fn insert(&mut self, name: impl Into<String>, descriptor: FieldDescriptor) {
        self.paths.insert(name.into(), descriptor);
    }

    /// A copy of this schema with the fields of `other` appended.
    pub fn extend(&self, other: Schema) -> Schema {
        let mut merged = self.clone();
        merged.paths.extend(other.paths);
        merged
    }

    /// Iterate `(name, descriptor)` pairs in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.paths.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a field by its (possibly dotted) name.
    pub fn path(&self, name: &str) -> Option<&FieldDescriptor> {
        self.paths.get(name)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Names of all fields declared `required`.
    pub fn required_paths(&self) -> Vec<&str> {
        self.paths
            .iter()
            .filter(|(_, d)| d.required)
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Deepest nesting of embedded / array sub-schemas below this one.
    pub fn depth(&self) -> usize {
        self.paths
            .values()
            .map(|d| d.field_type.nested_depth())
            .max()
            .unwrap_or(0)
    }
}

impl FieldType {
    fn nested_depth(&self) -> usize {
        match self {
            FieldType::Embedded { schema } => 1 + schema.depth(),
            FieldType::Array { items } => match items.as_ref() {
                ArrayItems::Schema(schema) => 1 + schema.depth(),
                ArrayItems::Element(element) => element.field_type.nested_depth(),
            },
            _ => 0,
        }
    }
}

/// Per-field metadata: type, required flag and declared validators.
///
/// Created via the constructors in the crate root ([`crate::string()`],
/// [`crate::number()`], ...) and refined with the chainable setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(flatten)]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Bound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Bound>,
    #[serde(default, rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<Bound>,
    #[serde(default, rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<Bound>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl FieldDescriptor {
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            enum_values: None,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict the field to a fixed set of candidate values.
    pub fn enumeration<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.enum_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Lower numeric bound (inclusive).
    pub fn min(mut self, v: impl Into<Bound>) -> Self {
        self.min = Some(v.into());
        self
    }

    /// Upper numeric bound (inclusive).
    pub fn max(mut self, v: impl Into<Bound>) -> Self {
        self.max = Some(v.into());
        self
    }

    /// Lower numeric bound with a custom validation message.
    pub fn min_with_message(mut self, v: f64, message: impl Into<String>) -> Self {
        self.min = Some(Bound::WithMessage(v, message.into()));
        self
    }

    /// Upper numeric bound with a custom validation message.
    pub fn max_with_message(mut self, v: f64, message: impl Into<String>) -> Self {
        self.max = Some(Bound::WithMessage(v, message.into()));
        self
    }

    /// Minimum length in characters.
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len.into());
        self
    }

    /// Maximum length in characters.
    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len.into());
        self
    }

    pub fn min_length_with_message(mut self, len: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(Bound::WithMessage(len as f64, message.into()));
        self
    }

    pub fn max_length_with_message(mut self, len: usize, message: impl Into<String>) -> Self {
        self.max_length = Some(Bound::WithMessage(len as f64, message.into()));
        self
    }

    /// Nested schema of an embedded field, if any.
    pub fn embedded_schema(&self) -> Option<&Schema> {
        match &self.field_type {
            FieldType::Embedded { schema } => Some(schema),
            _ => None,
        }
    }

    /// Element type of an array field, if any.
    pub fn array_items(&self) -> Option<&ArrayItems> {
        match &self.field_type {
            FieldType::Array { items } => Some(items),
            _ => None,
        }
    }
}
