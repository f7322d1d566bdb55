//! Pointer chain generator.

use super::ValueGenerator;
use rand::Rng;
use shape_core::{PointerConfig, Value};

/// Generate a chain of `depth` pointers around one referent.
///
/// Returns `None` when no target generator is configured. With `allow_nil`,
/// half of all draws are a nil pointer at the outer level. A referent the
/// target cannot produce is replaced by its zero value.
pub fn generate_pointer<R: Rng>(rng: &mut R, config: &PointerConfig) -> Option<Value> {
    let Some(target) = config.target.as_deref() else {
        tracing::debug!("pointer has no target generator");
        return None;
    };

    if config.allow_nil && rng.gen_bool(0.5) {
        return Some(Value::Pointer(None));
    }

    let mut value = target.generate_or_zero(rng);
    for _ in 0..config.levels() {
        value = Value::Pointer(Some(Box::new(value)));
    }
    Some(value)
}
