//! shapegen
//!
//! Constraint-driven random value generation for fuzz and property testing.
//!
//! Describe the value you need as a [`Shape`], configure the generators per
//! kind in a [`Catalog`] and ask an [`Engine`] for values. Contradictory
//! constraints never fail: they degrade to a zero, empty or absent value.
//! The only errors are a missing descriptor and a kind that cannot be
//! generated.
//!
//! # Crates
//!
//! - `shape_core` - Shapes, configurations, values and the catalog
//! - `shape_generator` - Generators and the dispatcher
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use shapegen::{Catalog, Engine, Shape, ShapeKind, StringConfig};
//!
//! let catalog = Catalog::new().with(ShapeKind::String, StringConfig::new(3, 3).with_charset("ab"));
//! let engine = Engine::new(catalog);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let prepared = engine
//!     .prepare(&[Shape::String, Shape::map(Shape::String, Shape::Bool)])
//!     .unwrap();
//! for args in prepared.draws(&mut rng).take(3) {
//!     println!("{:?}", args);
//! }
//! ```
//!
//! # Catalog files
//!
//! ```yaml
//! int64:
//!   type: int
//!   min: 1
//!   max: 100
//! sequence:
//!   type: sequence
//!   min_len: 1
//!   max_len: 3
//! ```
//!
//! Set `SHAPEGEN_CATALOG` to a file like this and use [`Engine::from_env`].

pub mod config;
pub mod engine;

pub use config::{ParameterList, CATALOG_ENV_VAR};
pub use engine::{Engine, Prepared};

// Re-export the building blocks for convenience
pub use shape_core::{
    ArrayConfig, BoolConfig, Catalog, CatalogError, Complex, ComplexConfig, ComplexWidth,
    FieldSpec, FloatConfig, FloatWidth, GeneratorConfig, IntConfig, IntWidth, MapConfig, MapValue,
    Parity, PointerConfig, Record, RecordConfig, RecordField, SequenceConfig, Shape, ShapeKind,
    StringConfig, UintConfig, UintWidth, Value,
};
pub use shape_generator::{DispatchError, Dispatcher, ValueGenerator};
