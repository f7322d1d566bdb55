//! Leaf generator properties.

use crate::{init_tracing, SEED};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shapegen::{
    BoolConfig, Catalog, ComplexConfig, Engine, FloatConfig, IntConfig, Shape, ShapeKind,
    StringConfig, UintConfig, Value,
};

#[test]
fn test_int_range_containment() {
    init_tracing();
    let engine = Engine::new(Catalog::new().with(ShapeKind::Int64, IntConfig::new(-50, 50)));
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..10_000 {
        let value = engine.generate(&Shape::Int64, &mut rng).unwrap().unwrap();
        let v = value.as_i64().unwrap();
        assert!((-50..=50).contains(&v), "{v} out of range");
    }
}

#[test]
fn test_inverted_int_range_yields_zero() {
    init_tracing();
    let engine = Engine::new(Catalog::new().with(ShapeKind::Int32, IntConfig::new(10, 5)));
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..1_000 {
        assert_eq!(
            engine.generate(&Shape::Int32, &mut rng),
            Ok(Some(Value::Int32(0)))
        );
    }
}

#[test]
fn test_default_widths_are_respected() {
    init_tracing();
    let engine = Engine::with_defaults();
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..1_000 {
        let v = engine.generate(&Shape::Uint8, &mut rng).unwrap().unwrap();
        assert!(matches!(v, Value::Uint8(_)));

        let v = engine.generate(&Shape::Int64, &mut rng).unwrap().unwrap();
        let v = v.as_i64().unwrap();
        assert!((-1_000_000..=1_000_000).contains(&v));

        let v = engine.generate(&Shape::Float64, &mut rng).unwrap().unwrap();
        let v = v.as_f64().unwrap();
        assert!((-1000.0..1000.0).contains(&v));
    }
}

#[test]
fn test_uint_and_float_overrides() {
    init_tracing();
    let catalog = Catalog::new()
        .with(ShapeKind::Uint16, UintConfig::new(100, 200))
        .with(ShapeKind::Float32, FloatConfig::new(0.5, 0.75));
    let engine = Engine::new(catalog);
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..1_000 {
        let v = engine.generate(&Shape::Uint16, &mut rng).unwrap().unwrap();
        assert!(matches!(v, Value::Uint16(100..=200)));

        let Some(Value::Float32(f)) = engine.generate(&Shape::Float32, &mut rng).unwrap() else {
            panic!("Expected Float32 value");
        };
        assert!((0.5..=0.75).contains(&f));
    }
}

#[test]
fn test_complex_axes() {
    init_tracing();
    let catalog = Catalog::new().with(
        ShapeKind::Complex128,
        ComplexConfig::new((0.0, 1.0), (7.0, 7.0)),
    );
    let engine = Engine::new(catalog);
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..1_000 {
        let value = engine.generate(&Shape::Complex128, &mut rng).unwrap().unwrap();
        let c = value.as_complex().unwrap();
        assert!((0.0..1.0).contains(&c.re));
        // Degenerate imaginary axis falls back to [-10, 10)
        assert!((-10.0..10.0).contains(&c.im));
    }
}

#[test]
fn test_fixed_alphabet_strings() {
    init_tracing();
    let catalog = Catalog::new().with(
        ShapeKind::String,
        StringConfig::new(4, 4).with_charset("abc"),
    );
    let engine = Engine::new(catalog);
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..1_000 {
        let value = engine.generate(&Shape::String, &mut rng).unwrap().unwrap();
        let s = value.as_str().unwrap();
        assert_eq!(s.chars().count(), 4);
        assert!(s.chars().all(|c| "abc".contains(c)), "{s}");
    }
}

#[test]
fn test_default_strings_are_printable_ascii() {
    init_tracing();
    let engine = Engine::with_defaults();
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..1_000 {
        let value = engine.generate(&Shape::String, &mut rng).unwrap().unwrap();
        let s = value.as_str().unwrap();
        assert!(s.len() <= 10);
        assert!(s.chars().all(|c| (' '..='~').contains(&c)));
    }
}

#[test]
fn test_forced_bool() {
    init_tracing();
    let catalog = Catalog::new().with(
        ShapeKind::Bool,
        BoolConfig {
            force_true: true,
            force_false: true,
        },
    );
    let engine = Engine::new(catalog);
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..100 {
        assert_eq!(
            engine.generate(&Shape::Bool, &mut rng),
            Ok(Some(Value::Bool(true)))
        );
    }
}
