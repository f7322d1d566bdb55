//! Generation integration tests.
//!
//! These tests drive the engine through its public facade the way fuzz and
//! property drivers do:
//! 1. Build a catalog (defaults, code overrides or a YAML fixture)
//! 2. Generate values for shape descriptors with a fixed seed
//! 3. Check the values against the declared constraints

mod composite;
mod dispatch;
mod leaf;

use shapegen::{Shape, Value};

pub const SEED: u64 = 42;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

pub fn assert_conforms(value: &Value, shape: &Shape) {
    assert!(
        value.conforms_to(shape),
        "value {} does not conform to {shape}",
        serde_json::to_string(value).unwrap()
    );
}
