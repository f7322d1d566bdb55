//! Boolean value generator.

use rand::Rng;
use shape_core::{BoolConfig, Value};

/// Generate a boolean, honoring the force flags (`force_true` wins).
pub fn generate_bool<R: Rng>(rng: &mut R, config: &BoolConfig) -> Value {
    if config.force_true {
        return Value::Bool(true);
    }
    if config.force_false {
        return Value::Bool(false);
    }
    Value::Bool(rng.gen())
}
