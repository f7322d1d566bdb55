//! Individual value generators for each generator family.
//!
//! This module provides the generation logic for each kind of value based on
//! the generator configuration. Leaf generators always produce a value
//! (possibly the zero value); composite generators produce `None` when a
//! required sub-generator is missing or their size is degenerate.

pub mod boolean;
pub mod mapping;
pub mod numeric;
pub mod pointer;
pub mod record;
pub mod sequence;
pub mod string;

use rand::Rng;
use shape_core::{GeneratorConfig, Shape, Value};

/// Trait for generating values.
pub trait ValueGenerator {
    /// Generate one value using the given RNG, or `None` when the configuration
    /// cannot produce one.
    fn generate<R: Rng>(&self, rng: &mut R) -> Option<Value>;

    /// Shape of the values this generator produces.
    fn shape(&self) -> Shape;

    /// Generate one value, substituting the zero value of [`ValueGenerator::shape`]
    /// when the generator produces nothing.
    fn generate_or_zero<R: Rng>(&self, rng: &mut R) -> Value {
        self.generate(rng)
            .unwrap_or_else(|| Value::zero_of(&self.shape()))
    }
}

impl ValueGenerator for GeneratorConfig {
    fn generate<R: Rng>(&self, rng: &mut R) -> Option<Value> {
        match self {
            GeneratorConfig::Int(config) => Some(numeric::generate_int(rng, config)),

            GeneratorConfig::Uint(config) => Some(numeric::generate_uint(rng, config)),

            GeneratorConfig::Float(config) => Some(numeric::generate_float(rng, config)),

            GeneratorConfig::Complex(config) => Some(numeric::generate_complex(rng, config)),

            GeneratorConfig::String(config) => Some(string::generate_string(rng, config)),

            GeneratorConfig::Bool(config) => Some(boolean::generate_bool(rng, config)),

            GeneratorConfig::Sequence(config) => sequence::generate_sequence(rng, config),

            GeneratorConfig::Array(config) => sequence::generate_array(rng, config),

            GeneratorConfig::Map(config) => mapping::generate_map(rng, config),

            GeneratorConfig::Pointer(config) => pointer::generate_pointer(rng, config),

            GeneratorConfig::Record(config) => record::generate_record(rng, config),
        }
    }

    fn shape(&self) -> Shape {
        GeneratorConfig::shape(self)
    }
}

/// Pick a length uniformly from `[min, max]` after clamping `min` into `[0, max]`.
///
/// `max` must not be negative.
pub(crate) fn pick_length<R: Rng>(rng: &mut R, min: i64, max: i64) -> usize {
    let max = max.max(0);
    let min = min.clamp(0, max);
    usize::try_from(rng.gen_range(min..=max)).unwrap_or(0)
}
