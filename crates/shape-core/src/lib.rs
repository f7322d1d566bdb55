//! Core types for the shapegen value generation engine.
//!
//! This crate provides the pure data the engine works on:
//!
//! - [`Shape`] - Recursive descriptor of the value to generate
//! - [`GeneratorConfig`] - Constraints for one generator family
//! - [`Catalog`] - Kind to configuration mapping, loadable from YAML
//! - [`Value`] - Generated values
//!
//! # Architecture
//!
//! ```text
//! shape-core (this crate)
//!    │
//!    ├─── shape-generator  (generators and dispatcher over these types)
//!    │
//!    └─── shapegen         (facade used by fuzz and property drivers)
//! ```
//!
//! # Example
//!
//! ```rust
//! use shape_core::{Catalog, IntConfig, Shape, ShapeKind};
//!
//! let catalog = Catalog::new().with(ShapeKind::Int32, IntConfig::new(1, 6));
//! assert!(catalog.contains(ShapeKind::Int32));
//!
//! let shape: Shape = serde_yaml::from_str("type: sequence\nelement: int32").unwrap();
//! assert_eq!(shape, Shape::sequence(Shape::Int32));
//! ```

pub mod catalog;
pub mod config;
pub mod defaults;
pub mod shape;
pub mod value;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogError};
pub use config::{
    ArrayConfig, BoolConfig, ComplexConfig, ComplexWidth, FieldSpec, FloatConfig, FloatWidth,
    GeneratorConfig, IntConfig, IntWidth, MapConfig, Parity, PointerConfig, RecordConfig,
    SequenceConfig, StringConfig, UintConfig, UintWidth,
};
pub use shape::{RecordField, Shape, ShapeKind};
pub use value::{Complex, MapValue, Record, Value};
