//! Record generator.

use super::ValueGenerator;
use rand::Rng;
use shape_core::{FieldSpec, Record, RecordConfig, Value};

/// Generate a record with one value per configured field.
///
/// Returns `None` when no fields are configured. Each field is filled from its
/// generator; a value that does not fit the declared field shape is converted
/// when possible and otherwise replaced by the zero value. Fields without a
/// generator keep their zero value.
pub fn generate_record<R: Rng>(rng: &mut R, config: &RecordConfig) -> Option<Value> {
    if config.fields.is_empty() {
        tracing::debug!("record has no fields");
        return None;
    }

    let record: Record = config
        .fields
        .iter()
        .map(|(name, spec)| (name.as_str(), generate_field(rng, name, spec)))
        .collect();

    Some(Value::Record(record))
}

fn generate_field<R: Rng>(rng: &mut R, name: &str, spec: &FieldSpec) -> Value {
    let shape = spec.shape();
    let Some(generator) = spec.generator() else {
        return Value::zero_of(&shape);
    };

    let Some(value) = generator.generate(rng) else {
        return Value::zero_of(&shape);
    };

    match value.convert_to(&shape) {
        Some(converted) => converted,
        None => {
            tracing::debug!(
                field = name,
                shape = %shape,
                "generated value does not fit field, using zero"
            );
            Value::zero_of(&shape)
        }
    }
}
