//! Built-in default configurations.
//!
//! The default catalog is the fallback consulted when a catalog has no usable
//! entry for a kind. Composite defaults only carry size constraints; their
//! parts are bound later from the child shapes.

use crate::config::{
    ArrayConfig, BoolConfig, ComplexConfig, FloatConfig, GeneratorConfig, IntConfig, IntWidth,
    MapConfig, PointerConfig, RecordConfig, SequenceConfig, StringConfig, UintConfig, UintWidth,
};
use crate::shape::{Shape, ShapeKind};

/// Default magnitude bound for integers, clamped to the target width.
pub const DEFAULT_INT_BOUND: i64 = 1_000_000;

/// Default float range `[-1000, 1000)`.
pub const DEFAULT_FLOAT_RANGE: (f64, f64) = (-1000.0, 1000.0);

/// Range a degenerate complex axis falls back to.
pub const DEFAULT_COMPLEX_RANGE: (f64, f64) = (-10.0, 10.0);

/// Core length used when a string configuration has no positive maximum.
pub const DEFAULT_STRING_MAX_LEN: i64 = 10;

/// Default sequence length range.
pub const DEFAULT_SEQUENCE_LEN: (i64, i64) = (0, 5);

/// Default map size range.
pub const DEFAULT_MAP_SIZE: (i64, i64) = (1, 5);

/// Default configuration for a kind, without shape information.
///
/// Arrays default to length zero and pointers to depth one; use
/// [`default_config`] when the full shape is known.
pub fn default_for_kind(kind: ShapeKind) -> Option<GeneratorConfig> {
    let config = match kind {
        ShapeKind::Int8 | ShapeKind::Int16 | ShapeKind::Int32 | ShapeKind::Int64 => {
            let width = IntWidth::for_kind(kind)?;
            let (lo, hi) = width.bounds();
            GeneratorConfig::Int(IntConfig {
                allow_negative: true,
                allow_zero: true,
                ..IntConfig::new(lo.max(-DEFAULT_INT_BOUND), hi.min(DEFAULT_INT_BOUND))
                    .with_width(width)
            })
        }
        ShapeKind::Uint8 | ShapeKind::Uint16 | ShapeKind::Uint32 | ShapeKind::Uint64 => {
            let width = UintWidth::for_kind(kind)?;
            GeneratorConfig::Uint(
                UintConfig::new(0, width.max_value().min(DEFAULT_INT_BOUND as u64))
                    .with_width(width),
            )
        }
        ShapeKind::Float32 | ShapeKind::Float64 => {
            let mut config = GeneratorConfig::Float(FloatConfig::new(
                DEFAULT_FLOAT_RANGE.0,
                DEFAULT_FLOAT_RANGE.1,
            ));
            config.set_width_for(kind);
            config
        }
        ShapeKind::Complex64 | ShapeKind::Complex128 => {
            let mut config = GeneratorConfig::Complex(ComplexConfig::new(
                DEFAULT_COMPLEX_RANGE,
                DEFAULT_COMPLEX_RANGE,
            ));
            config.set_width_for(kind);
            config
        }
        ShapeKind::String => GeneratorConfig::String(StringConfig::new(0, DEFAULT_STRING_MAX_LEN)),
        ShapeKind::Bool => GeneratorConfig::Bool(BoolConfig::default()),
        ShapeKind::Sequence => GeneratorConfig::Sequence(SequenceConfig {
            min_len: DEFAULT_SEQUENCE_LEN.0,
            max_len: DEFAULT_SEQUENCE_LEN.1,
            ..SequenceConfig::default()
        }),
        ShapeKind::Array => GeneratorConfig::Array(ArrayConfig::default()),
        ShapeKind::Map => GeneratorConfig::Map(MapConfig {
            min_size: DEFAULT_MAP_SIZE.0,
            max_size: DEFAULT_MAP_SIZE.1,
            ..MapConfig::default()
        }),
        ShapeKind::Pointer => GeneratorConfig::Pointer(PointerConfig {
            depth: 1,
            ..PointerConfig::default()
        }),
        ShapeKind::Record => GeneratorConfig::Record(RecordConfig::default()),
        ShapeKind::Func | ShapeKind::Chan | ShapeKind::Interface | ShapeKind::UnsafePointer => {
            return None
        }
    };
    Some(config)
}

/// Default configuration for a shape.
///
/// Array length and pointer depth are taken from the shape. Sub-generators are
/// left unset. Returns `None` for kinds the engine cannot generate.
pub fn default_config(shape: &Shape) -> Option<GeneratorConfig> {
    let mut config = default_for_kind(shape.kind())?;
    match (&mut config, shape) {
        (GeneratorConfig::Array(array), Shape::Array { length, .. }) => {
            array.length = i64::try_from(*length).unwrap_or(i64::MAX);
        }
        (GeneratorConfig::Pointer(pointer), Shape::Pointer { .. }) => {
            let (depth, _) = shape.pointer_depth();
            pointer.depth = i64::try_from(depth).unwrap_or(i64::MAX);
        }
        _ => {}
    }
    Some(config)
}
