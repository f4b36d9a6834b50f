use docmock::schema::FieldDescriptor;
use docmock::types::Bound;
use serde_json::Value;

/// Generator parameters derived from a field's declared validators.
///
/// Unset validators stay `None`; `Some(0.0)` is a real bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintSet {
    pub enum_values: Option<Vec<Value>>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<f64>,
    pub max_length: Option<f64>,
}

impl ConstraintSet {
    /// Read the validators of `descriptor`, keeping only bound values and
    /// dropping any attached messages.
    pub fn from_descriptor(descriptor: &FieldDescriptor) -> Self {
        Self {
            enum_values: descriptor.enum_values.clone(),
            min: descriptor.min.as_ref().map(Bound::value),
            max: descriptor.max.as_ref().map(Bound::value),
            min_length: descriptor.min_length.as_ref().map(Bound::value),
            max_length: descriptor.max_length.as_ref().map(Bound::value),
        }
    }

    pub fn has_numeric_bounds(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn has_length_bounds(&self) -> bool {
        self.min_length.is_some() || self.max_length.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.enum_values.is_none() && !self.has_numeric_bounds() && !self.has_length_bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_messages() {
        let field = docmock::number()
            .min_with_message(10.0, "Become an adult")
            .max(100);
        let c = ConstraintSet::from_descriptor(&field);
        assert_eq!(c.min, Some(10.0));
        assert_eq!(c.max, Some(100.0));
        assert!(c.has_numeric_bounds());
        assert!(!c.has_length_bounds());
    }

    #[test]
    fn zero_is_not_unset() {
        let c = ConstraintSet::from_descriptor(&docmock::number().min(0));
        assert_eq!(c.min, Some(0.0));
        assert!(c.has_numeric_bounds());
    }

    #[test]
    fn absent_validators_stay_unset() {
        let c = ConstraintSet::from_descriptor(&docmock::string());
        assert!(c.is_empty());
        assert_eq!(c, ConstraintSet::default());
    }

    #[test]
    fn copies_enum_candidates() {
        let c = ConstraintSet::from_descriptor(
            &docmock::string().enumeration(["Hey", "there"]).min_length(50),
        );
        assert_eq!(c.enum_values, Some(vec![json!("Hey"), json!("there")]));
        assert_eq!(c.min_length, Some(50.0));
    }
}
