//! Per-field value dispatch.
//!
//! Rules are tried in a fixed order and the first one that applies wins:
//! enum, numeric bounds, length bounds, name heuristic, type default,
//! fallback policy. Structural types recurse into the generator.

use docmock::schema::FieldDescriptor;
use docmock::types::{ArrayItems, FieldType};
use docmock::value::MockValue;
use rand::Rng;
use tracing::{error, trace, warn};

use crate::constraints::ConstraintSet;
use crate::error::MockError;
use crate::heuristics::match_name;
use crate::options::FallbackPolicy;
use crate::synth::{Synthesizer, MAX_DATE_MILLIS, MAX_SAFE_INTEGER};
use crate::MockGen;

/// Extra characters allowed above `minLength` when `maxLength` is absent or
/// far away.
const LENGTH_SPAN: f64 = 32.0;

/// Longest string the generator builds, in characters.
const MAX_TEXT_LEN: usize = 1 << 20;

impl<R: Rng, S: Synthesizer> MockGen<R, S> {
    /// Generate the value of one field. `path` is the full dotted path of the
    /// field inside the document being built.
    pub(crate) fn field_value(
        &mut self,
        path: &str,
        descriptor: &FieldDescriptor,
    ) -> Result<MockValue, MockError> {
        let constraints = ConstraintSet::from_descriptor(descriptor);
        self.dispatch(path, &descriptor.field_type, &constraints)
    }

    fn dispatch(
        &mut self,
        path: &str,
        field_type: &FieldType,
        constraints: &ConstraintSet,
    ) -> Result<MockValue, MockError> {
        match field_type {
            FieldType::Embedded { schema } => {
                reject_constraints(path, field_type, constraints)?;
                trace!(path, "embedded document");
                return self.generate_schema(schema, path);
            }
            FieldType::Array { items } => {
                reject_constraints(path, field_type, constraints)?;
                return self.array_value(path, items);
            }
            _ => {}
        }

        if let Some(candidates) = &constraints.enum_values {
            if !candidates.is_empty() {
                let picked = &candidates[self.rng.gen_range(0..candidates.len())];
                trace!(path, rule = "enum", candidates = candidates.len(), "picked enum candidate");
                return MockValue::from_literal(picked, field_type).ok_or_else(|| {
                    error!(path, field_type = field_type.name(), value = %picked, "enum value does not fit the field type");
                    MockError::InvalidEnumValue {
                        path: path.to_string(),
                        field_type: field_type.name().to_string(),
                        value: picked.to_string(),
                    }
                });
            }
            warn!(path, "empty enum ignored");
        }

        if constraints.has_numeric_bounds() {
            trace!(path, rule = "numeric", min = ?constraints.min, max = ?constraints.max, "bounded number");
            return self.bounded_value(path, field_type, constraints);
        }

        if constraints.has_length_bounds() {
            trace!(path, rule = "length", min = ?constraints.min_length, max = ?constraints.max_length, "bounded text");
            return self.bounded_text(path, field_type, constraints);
        }

        if field_type.is_text_like() {
            if let Some(category) = match_name(path) {
                trace!(path, rule = "heuristic", ?category, "matched field name");
                return Ok(MockValue::String(self.synth.category(&mut self.rng, category)));
            }
        }

        if let Some(value) = self.synth.for_type(&mut self.rng, field_type, self.now) {
            trace!(path, rule = "type", field_type = field_type.name(), "type default");
            return Ok(value);
        }

        if let FieldType::Other { name } = field_type {
            warn!(path, type_name = %name, policy = ?self.options.fallback, "no generator for type, using fallback");
        } else {
            trace!(path, rule = "fallback", policy = ?self.options.fallback, "no generator for type");
        }
        Ok(match self.options.fallback {
            FallbackPolicy::Sample => MockValue::String(self.synth.sample(&mut self.rng)),
            FallbackPolicy::Null => MockValue::Null,
        })
    }

    fn array_value(&mut self, path: &str, items: &ArrayItems) -> Result<MockValue, MockError> {
        let element = match items {
            ArrayItems::Schema(schema) => self.generate_schema(schema, &format!("{path}[0]"))?,
            // The element path keeps the array's name, so heuristics still match it.
            ArrayItems::Element(descriptor) => {
                let constraints = ConstraintSet::from_descriptor(descriptor);
                self.dispatch(&format!("{path}[0]"), &descriptor.field_type, &constraints)?
            }
        };
        Ok(MockValue::Array(vec![element]))
    }

    fn bounded_value(
        &mut self,
        path: &str,
        field_type: &FieldType,
        constraints: &ConstraintSet,
    ) -> Result<MockValue, MockError> {
        if !field_type.accepts_numeric_bounds() {
            let constraint = if constraints.min.is_some() { "min" } else { "max" };
            return Err(unsupported(path, field_type, constraint));
        }

        let unsatisfiable = |min: f64, max: f64| MockError::UnsatisfiableBounds {
            path: path.to_string(),
            min,
            max,
        };
        let (min, max) = resolve_bounds(constraints.min, constraints.max, default_upper(field_type));
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(unsatisfiable(min, max));
        }

        match field_type {
            FieldType::Date => {
                let (lo, hi) = (min.ceil(), max.floor());
                if lo > hi {
                    return Err(unsatisfiable(min, max));
                }
                self.synth
                    .date_between(&mut self.rng, lo as i64, hi as i64)
                    .map(MockValue::Date)
                    .ok_or_else(|| unsatisfiable(min, max))
            }
            FieldType::BigInt => match self.synth.bounded_number(&mut self.rng, min, max) {
                value @ MockValue::Int(_) => Ok(value),
                _ => Err(unsatisfiable(min, max)),
            },
            _ => Ok(self.synth.bounded_number(&mut self.rng, min, max)),
        }
    }

    fn bounded_text(
        &mut self,
        path: &str,
        field_type: &FieldType,
        constraints: &ConstraintSet,
    ) -> Result<MockValue, MockError> {
        if !field_type.accepts_length_bounds() {
            let constraint = if constraints.min_length.is_some() {
                "minLength"
            } else {
                "maxLength"
            };
            return Err(unsupported(path, field_type, constraint));
        }

        let min = constraints.min_length.unwrap_or(0.0).max(0.0).ceil();
        let max = constraints.max_length.unwrap_or(min + LENGTH_SPAN).floor();
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(MockError::UnsatisfiableBounds {
                path: path.to_string(),
                min,
                max,
            });
        }
        if min > MAX_TEXT_LEN as f64 {
            error!(path, min, limit = MAX_TEXT_LEN, "minLength above the generated text limit");
            return Err(MockError::UnsatisfiableBounds {
                path: path.to_string(),
                min,
                max: MAX_TEXT_LEN as f64,
            });
        }
        let max = max.min(min + LENGTH_SPAN).min(MAX_TEXT_LEN as f64);
        Ok(MockValue::String(self.synth.bounded_text(
            &mut self.rng,
            min as usize,
            max as usize,
        )))
    }
}

/// Structural fields carry no value of their own, so any declared
/// validator on them is an invariant violation.
fn reject_constraints(
    path: &str,
    field_type: &FieldType,
    constraints: &ConstraintSet,
) -> Result<(), MockError> {
    let constraint = if constraints.enum_values.is_some() {
        "enum"
    } else if constraints.min.is_some() {
        "min"
    } else if constraints.max.is_some() {
        "max"
    } else if constraints.min_length.is_some() {
        "minLength"
    } else if constraints.max_length.is_some() {
        "maxLength"
    } else {
        return Ok(());
    };
    Err(unsupported(path, field_type, constraint))
}

fn default_upper(field_type: &FieldType) -> f64 {
    match field_type {
        FieldType::Date => MAX_DATE_MILLIS as f64,
        _ => MAX_SAFE_INTEGER,
    }
}

/// Fill in a missing edge from the default range `[0, upper]`. A lone bound
/// outside that range pulls the missing edge along so the window stays
/// non-empty.
fn resolve_bounds(min: Option<f64>, max: Option<f64>, upper: f64) -> (f64, f64) {
    match (min, max) {
        (Some(min), Some(max)) => (min, max),
        (Some(min), None) => (min, upper.max(min)),
        (None, Some(max)) => (max.min(0.0), max),
        (None, None) => (0.0, upper),
    }
}

fn unsupported(path: &str, field_type: &FieldType, constraint: &'static str) -> MockError {
    error!(path, field_type = field_type.name(), constraint, "constraint has no generator for this type");
    MockError::UnsupportedConstraint {
        path: path.to_string(),
        field_type: field_type.name().to_string(),
        constraint,
    }
}
