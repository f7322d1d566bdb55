//! Dispatch behaviour through the engine.

use crate::{assert_conforms, init_tracing, SEED};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shapegen::{
    Catalog, DispatchError, Dispatcher, Engine, GeneratorConfig, IntConfig, Shape, ShapeKind,
    Value,
};

#[test]
fn test_select_is_idempotent() {
    init_tracing();
    let engine = Engine::from_catalog_file("tests/fixtures/catalog.yaml").unwrap();
    let shape = Shape::map(Shape::String, Shape::sequence(Shape::pointer(Shape::Int64, 2)));

    let first = engine.select(&shape).unwrap();
    let second = engine.select(&shape).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.shape(), shape);
}

#[test]
fn test_nil_descriptor() {
    let dispatcher = Dispatcher::default();
    assert_eq!(dispatcher.select(None), Err(DispatchError::NilDescriptor));
}

#[test]
fn test_unsupported_kind() {
    init_tracing();
    let engine = Engine::with_defaults();
    let mut rng = StdRng::seed_from_u64(SEED);

    assert_eq!(
        engine.generate(&Shape::Chan, &mut rng),
        Err(DispatchError::UnsupportedKind(ShapeKind::Chan))
    );
    assert_eq!(
        engine.generate(&Shape::array(2, Shape::Interface), &mut rng),
        Err(DispatchError::UnsupportedKind(ShapeKind::Interface))
    );
    assert_eq!(
        DispatchError::UnsupportedKind(ShapeKind::UnsafePointer).to_string(),
        "Unsupported kind: unsafe_pointer"
    );
}

#[test]
fn test_unset_entry_falls_back_to_default() {
    init_tracing();
    let catalog = Catalog::new().with(ShapeKind::Int16, IntConfig::default());
    let engine = Engine::new(catalog);

    let Ok(GeneratorConfig::Int(config)) = engine.select(&Shape::Int16) else {
        panic!("Expected int config");
    };
    assert_eq!((config.min, config.max), (-32_768, 32_767));
}

#[test]
fn test_fixture_catalog_applies_to_nested_shapes() {
    init_tracing();
    let engine = Engine::from_catalog_file("tests/fixtures/catalog.yaml").unwrap();
    let shape = Shape::sequence(Shape::record([("n", Shape::Int64), ("s", Shape::String)]));
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..200 {
        let value = engine.generate(&shape, &mut rng).unwrap().unwrap();
        assert_conforms(&value, &shape);

        let items = value.as_slice().unwrap();
        assert!((1..=3).contains(&items.len()));
        for item in items {
            let record = item.as_record().unwrap();
            assert!(matches!(record.get("n"), Some(Value::Int64(1..=100))));
            let s = record.get("s").and_then(Value::as_str).unwrap();
            assert!(s.starts_with("id-"));
        }
    }
}

#[test]
fn test_deterministic_with_same_seed() {
    let engine = Engine::with_defaults();
    let shape = Shape::record([
        ("a", Shape::sequence(Shape::String)),
        ("b", Shape::map(Shape::Int8, Shape::Float64)),
    ]);

    let mut rng1 = StdRng::seed_from_u64(SEED);
    let mut rng2 = StdRng::seed_from_u64(SEED);
    for _ in 0..50 {
        assert_eq!(
            engine.generate(&shape, &mut rng1),
            engine.generate(&shape, &mut rng2)
        );
    }
}
