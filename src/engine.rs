//! Engine facade used by fuzz and property drivers.

use crate::config::{self, ParameterList};
use rand::Rng;
use shape_core::{Catalog, GeneratorConfig, Shape, Value};
use shape_generator::{DispatchError, Dispatcher, ValueGenerator};
use std::path::Path;

/// Value generation engine.
///
/// Wraps a [`Dispatcher`] over a fixed catalog. The engine is immutable and
/// can be shared between threads; every generating call takes its own random
/// source.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    dispatcher: Dispatcher,
}

impl Engine {
    /// Create an engine over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            dispatcher: Dispatcher::new(catalog),
        }
    }

    /// Create an engine over the default catalog.
    pub fn with_defaults() -> Self {
        Self::new(Catalog::new())
    }

    /// Create an engine from a YAML catalog file.
    pub fn from_catalog_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self::new(config::load_catalog(path)?))
    }

    /// Create an engine from the catalog file named by `SHAPEGEN_CATALOG`,
    /// or from the defaults when the variable is not set.
    pub fn from_env() -> anyhow::Result<Self> {
        let catalog = config::catalog_from_env()?.unwrap_or_default();
        Ok(Self::new(catalog))
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn catalog(&self) -> &Catalog {
        self.dispatcher.catalog()
    }

    /// Select the bound generator configuration for a shape.
    pub fn select(&self, shape: &Shape) -> Result<GeneratorConfig, DispatchError> {
        self.dispatcher.select(Some(shape))
    }

    /// Generate one value for `shape`.
    ///
    /// `Ok(None)` means the shape's generator produced no value, for example
    /// an array of length zero.
    pub fn generate<R: Rng>(
        &self,
        shape: &Shape,
        rng: &mut R,
    ) -> Result<Option<Value>, DispatchError> {
        self.dispatcher.generate(shape, rng)
    }

    /// Generate one value using the thread-local random source.
    pub fn generate_with_thread_rng(&self, shape: &Shape) -> Result<Option<Value>, DispatchError> {
        self.generate(shape, &mut rand::thread_rng())
    }

    /// Bind generators for a parameter list once, for repeated draws.
    pub fn prepare(&self, shapes: &[Shape]) -> Result<Prepared, DispatchError> {
        let generators = shapes
            .iter()
            .map(|shape| self.select(shape))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(parameters = generators.len(), "prepared parameter list");
        Ok(Prepared {
            shapes: shapes.to_vec(),
            generators,
        })
    }

    /// Bind generators for a parameter list loaded from YAML.
    pub fn prepare_list(&self, list: &ParameterList) -> Result<Prepared, DispatchError> {
        self.prepare(&list.parameters)
    }
}

/// Bound generators for a parameter list.
///
/// Each draw yields one value per parameter, in order.
#[derive(Debug, Clone)]
pub struct Prepared {
    shapes: Vec<Shape>,
    generators: Vec<GeneratorConfig>,
}

impl Prepared {
    /// Parameter shapes, in order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Draw one value per parameter.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Vec<Option<Value>> {
        self.generators
            .iter()
            .map(|generator| generator.generate(rng))
            .collect()
    }

    /// Draw one value per parameter, substituting zero values for parameters
    /// whose generator produced nothing.
    pub fn draw_or_zero<R: Rng>(&self, rng: &mut R) -> Vec<Value> {
        self.generators
            .iter()
            .map(|generator| generator.generate_or_zero(rng))
            .collect()
    }

    /// Endless iterator of draws.
    pub fn draws<'a, R: Rng>(
        &'a self,
        rng: &'a mut R,
    ) -> impl Iterator<Item = Vec<Option<Value>>> + 'a {
        std::iter::repeat_with(move || self.draw(&mut *rng))
    }
}
