//! Value generators for the shapegen engine.
//!
//! This crate turns a [`Shape`](shape_core::Shape) into a generator
//! configuration and draws values from it. The [`Dispatcher`] selects the
//! configuration for a shape from a [`Catalog`](shape_core::Catalog), falling
//! back to built-in defaults, and binds the generators of every child shape.
//!
//! # Architecture
//!
//! ```text
//!   Shape ──────────┐
//!                   ▼
//! ┌──────────────────────┐
//! │      Dispatcher      │
//! │                      │
//! │  - catalog           │
//! │  - default fallback  │
//! └──────────┬───────────┘
//!            │ GeneratorConfig (bound)
//!            ▼
//!   ValueGenerator::generate(&mut rng) -> Option<Value>
//! ```
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use shape_core::{Catalog, IntConfig, Shape, ShapeKind};
//! use shape_generator::Dispatcher;
//!
//! let catalog = Catalog::new().with(ShapeKind::Int64, IntConfig::new(1, 6));
//! let dispatcher = Dispatcher::new(catalog);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let shape = Shape::sequence(Shape::Int64);
//! let value = dispatcher.generate(&shape, &mut rng).unwrap();
//! println!("Generated: {:?}", value);
//! ```
//!
//! # Generators
//!
//! - `int` / `uint` - Integers in an inclusive range, clamped to the width
//! - `float` - Floats in a half-open range
//! - `complex` - Complex numbers with independent axes
//! - `string` - Strings over an alphabet with optional prefix and suffix
//! - `bool` - Booleans, optionally forced
//! - `sequence` / `array` - Variable and fixed length lists
//! - `map` - Key-value mappings
//! - `pointer` - Pointer chains, optionally nil
//! - `record` - Records with named fields

pub mod dispatcher;
pub mod generators;

// Re-exports for convenience
pub use dispatcher::{DispatchError, Dispatcher};
pub use generators::ValueGenerator;
