//! Composite generator properties.

use crate::{assert_conforms, init_tracing, SEED};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shapegen::{
    ArrayConfig, Catalog, Engine, GeneratorConfig, IntConfig, MapConfig, PointerConfig,
    RecordConfig, SequenceConfig, Shape, ShapeKind, StringConfig, Value,
};

#[test]
fn test_zero_length_array_has_no_value() {
    init_tracing();
    let engine = Engine::with_defaults();
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..100 {
        assert_eq!(
            engine.generate(&Shape::array(0, Shape::Int8), &mut rng),
            Ok(None)
        );
    }
}

#[test]
fn test_empty_sequence_is_a_value() {
    init_tracing();
    let catalog = Catalog::new().with(
        ShapeKind::Sequence,
        SequenceConfig::new(0, 0, StringConfig::new(1, 3).into()),
    );
    let engine = Engine::new(catalog);
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..100 {
        assert_eq!(
            engine.generate(&Shape::sequence(Shape::String), &mut rng),
            Ok(Some(Value::Sequence(vec![])))
        );
    }
}

#[test]
fn test_pointer_depth_three_never_nil() {
    init_tracing();
    let catalog = Catalog::new().with(
        ShapeKind::Pointer,
        PointerConfig {
            allow_nil: false,
            depth: 3,
            target: None,
        },
    );
    let engine = Engine::new(catalog);
    let shape = Shape::pointer(Shape::Int16, 3);
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..1_000 {
        let value = engine.generate(&shape, &mut rng).unwrap().unwrap();
        assert!(!value.is_nil());
        assert_eq!(value.pointer_depth(), 3);
        assert_conforms(&value, &shape);
    }
}

#[test]
fn test_map_size_bounded() {
    init_tracing();
    let catalog = Catalog::new().with(
        ShapeKind::Map,
        MapConfig::new(
            5,
            5,
            StringConfig::new(5, 10).into(),
            IntConfig::new(0, 100).into(),
        ),
    );
    let engine = Engine::new(catalog);
    let shape = Shape::map(Shape::String, Shape::Int64);
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..1_000 {
        let value = engine.generate(&shape, &mut rng).unwrap().unwrap();
        let map = value.as_map().unwrap();
        assert!(map.len() <= 5);
        for (k, v) in map.iter() {
            assert!((5..=10).contains(&k.as_str().unwrap().len()));
            assert!((0..=100).contains(&v.as_i64().unwrap()));
        }
    }
}

#[test]
fn test_default_collection_sizes() {
    init_tracing();
    let engine = Engine::with_defaults();
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..1_000 {
        let value = engine
            .generate(&Shape::sequence(Shape::Bool), &mut rng)
            .unwrap()
            .unwrap();
        assert!(value.as_slice().unwrap().len() <= 5);

        let value = engine
            .generate(&Shape::map(Shape::Uint64, Shape::Bool), &mut rng)
            .unwrap()
            .unwrap();
        assert!((1..=5).contains(&value.as_map().unwrap().len()));
    }
}

#[test]
fn test_nested_shapes_conform() {
    init_tracing();
    let engine = Engine::with_defaults();
    let shape = Shape::record([
        ("id", Shape::Uint32),
        ("name", Shape::String),
        (
            "children",
            Shape::sequence(Shape::pointer(
                Shape::record([("weight", Shape::Float32), ("tag", Shape::Int8)]),
                1,
            )),
        ),
        ("lookup", Shape::map(Shape::Int16, Shape::array(3, Shape::Complex64))),
    ]);
    let mut rng = StdRng::seed_from_u64(SEED);

    for _ in 0..500 {
        let value = engine.generate(&shape, &mut rng).unwrap().unwrap();
        assert_conforms(&value, &shape);
    }
}

#[test]
fn test_record_fields_are_ordered_by_name() {
    init_tracing();
    let engine = Engine::with_defaults();
    let shape = Shape::record([("zeta", Shape::Bool), ("alpha", Shape::Bool), ("mid", Shape::Bool)]);
    let mut rng = StdRng::seed_from_u64(SEED);

    let value = engine.generate(&shape, &mut rng).unwrap().unwrap();
    let record = value.as_record().unwrap();
    assert_eq!(record.names().collect::<Vec<_>>(), vec!["alpha", "mid", "zeta"]);
}

#[test]
fn test_composite_catalog_entries_conform_to_differing_shapes() {
    init_tracing();
    // Every composite entry disagrees with the requested shapes in depth,
    // length or field set
    let catalog = Catalog::new()
        .with(
            ShapeKind::Pointer,
            PointerConfig {
                allow_nil: true,
                depth: 1,
                target: None,
            },
        )
        .with(
            ShapeKind::Array,
            ArrayConfig {
                length: 2,
                ..ArrayConfig::default()
            },
        )
        .with(
            ShapeKind::Record,
            RecordConfig::new()
                .field("extra", GeneratorConfig::from(StringConfig::new(1, 2)))
                .field("count", GeneratorConfig::from(IntConfig::new(1, 9))),
        )
        .with(
            ShapeKind::Sequence,
            SequenceConfig {
                min_len: 1,
                max_len: 3,
                ..SequenceConfig::default()
            },
        );
    let engine = Engine::new(catalog);
    let shapes = [
        Shape::pointer(Shape::Int64, 3),
        Shape::array(5, Shape::pointer(Shape::Uint16, 2)),
        Shape::record([("count", Shape::Uint32), ("name", Shape::String)]),
        Shape::sequence(Shape::record([(
            "inner",
            Shape::array(4, Shape::pointer(Shape::Bool, 4)),
        )])),
        Shape::map(Shape::String, Shape::pointer(Shape::array(1, Shape::Float64), 2)),
    ];
    let mut rng = StdRng::seed_from_u64(SEED);

    for shape in &shapes {
        for _ in 0..300 {
            let value = engine.generate(shape, &mut rng).unwrap().unwrap();
            assert_conforms(&value, shape);
        }
    }

    // Only the outermost pointer level may be nil
    for _ in 0..1_000 {
        let value = engine.generate(&shapes[0], &mut rng).unwrap().unwrap();
        assert!(value.is_nil() || value.pointer_depth() == 3, "{value:?}");
    }
}
