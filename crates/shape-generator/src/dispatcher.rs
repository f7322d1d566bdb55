//! Shape to generator dispatch.

use crate::generators::ValueGenerator;
use rand::Rng;
use shape_core::defaults;
use shape_core::{
    ArrayConfig, Catalog, FieldSpec, GeneratorConfig, MapConfig, PointerConfig, RecordConfig,
    SequenceConfig, Shape, ShapeKind, Value,
};

/// Error type for dispatch operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// No shape descriptor was supplied
    #[error("No shape descriptor supplied")]
    NilDescriptor,

    /// The shape, or a child the generator depends on, cannot be generated
    #[error("Unsupported kind: {0}")]
    UnsupportedKind(ShapeKind),
}

/// Selects and binds generator configurations for shapes.
///
/// The dispatcher owns its catalog; it is immutable once built and can be
/// shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    catalog: Catalog,
}

impl Dispatcher {
    /// Create a dispatcher over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Get the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Select the generator configuration for a shape.
    ///
    /// The result is fully bound: every child generator the shape needs is
    /// present and leaf widths, array lengths, pointer depths and record
    /// field sets come from the shape.
    pub fn select(&self, shape: Option<&Shape>) -> Result<GeneratorConfig, DispatchError> {
        let shape = shape.ok_or(DispatchError::NilDescriptor)?;
        let config = self.resolve(shape)?;
        tracing::trace!(shape = %shape, family = config.family(), "selected generator");
        Ok(config)
    }

    /// Select a generator for `shape` and draw one value from it.
    ///
    /// `Ok(None)` means the bound configuration produced no value.
    pub fn generate<R: Rng>(
        &self,
        shape: &Shape,
        rng: &mut R,
    ) -> Result<Option<Value>, DispatchError> {
        let config = self.select(Some(shape))?;
        Ok(config.generate(rng))
    }

    /// Catalog entry usable for `kind`, if any.
    fn entry(&self, kind: ShapeKind) -> Option<&GeneratorConfig> {
        let config = self.catalog.get(kind)?;
        if !config.serves(kind) {
            tracing::warn!(
                kind = %kind,
                family = config.family(),
                "ignoring catalog entry of the wrong family"
            );
            return None;
        }
        if config.is_unset() {
            return None;
        }
        Some(config)
    }

    fn resolve(&self, shape: &Shape) -> Result<GeneratorConfig, DispatchError> {
        let kind = shape.kind();
        let mut config = match self.entry(kind) {
            Some(config) => config.clone(),
            None => {
                defaults::default_config(shape).ok_or(DispatchError::UnsupportedKind(kind))?
            }
        };
        config.set_width_for(kind);
        self.bind(&mut config, shape)?;
        Ok(config)
    }

    /// Fill unset children of a composite configuration from the shape.
    fn bind(&self, config: &mut GeneratorConfig, shape: &Shape) -> Result<(), DispatchError> {
        match (config, shape) {
            (GeneratorConfig::Sequence(sequence), Shape::Sequence { element }) => {
                self.bind_sequence(sequence, element)
            }
            (GeneratorConfig::Array(array), Shape::Array { length, element }) => {
                self.bind_array(array, *length, element)
            }
            (GeneratorConfig::Map(map), Shape::Map { key, value }) => {
                self.bind_map(map, key, value)
            }
            (GeneratorConfig::Pointer(pointer), Shape::Pointer { .. }) => {
                self.bind_pointer(pointer, shape)
            }
            (GeneratorConfig::Record(record), Shape::Record { fields }) => {
                record.fields.retain(|name, _| {
                    let declared = fields.iter().any(|field| field.name == *name);
                    if !declared {
                        tracing::debug!(field = %name, "dropping field missing from record shape");
                    }
                    declared
                });
                for field in fields {
                    self.bind_field(record, &field.name, &field.shape);
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn bind_sequence(
        &self,
        config: &mut SequenceConfig,
        element: &Shape,
    ) -> Result<(), DispatchError> {
        self.bind_child(&mut config.element, element)
    }

    fn bind_array(
        &self,
        config: &mut ArrayConfig,
        length: usize,
        element: &Shape,
    ) -> Result<(), DispatchError> {
        config.length = i64::try_from(length).unwrap_or(i64::MAX);
        self.bind_child(&mut config.element, element)
    }

    fn bind_map(&self, config: &mut MapConfig, key: &Shape, value: &Shape) -> Result<(), DispatchError> {
        self.bind_child(&mut config.key, key)?;
        self.bind_child(&mut config.value, value)
    }

    fn bind_pointer(&self, config: &mut PointerConfig, shape: &Shape) -> Result<(), DispatchError> {
        // One generator produces the whole chain, so only the outer level can be nil
        let (depth, target) = shape.pointer_depth();
        config.depth = i64::try_from(depth).unwrap_or(i64::MAX);
        self.bind_child(&mut config.target, target)
    }

    /// Bind one record field to its declared shape.
    ///
    /// Fields whose shape cannot be generated keep their zero value instead of
    /// failing the whole record.
    fn bind_field(&self, config: &mut RecordConfig, name: &str, shape: &Shape) {
        let spec = match config.fields.remove(name) {
            Some(FieldSpec::Generator(mut generator)) => {
                self.bind_explicit(&mut generator, shape);
                FieldSpec::Typed {
                    shape: shape.clone(),
                    generator,
                }
            }
            Some(FieldSpec::Typed { mut generator, .. }) => {
                self.bind_explicit(&mut generator, shape);
                FieldSpec::Typed {
                    shape: shape.clone(),
                    generator,
                }
            }
            Some(FieldSpec::Shape(_)) => FieldSpec::Shape(shape.clone()),
            None => match self.resolve(shape) {
                Ok(generator) => FieldSpec::Typed {
                    shape: shape.clone(),
                    generator,
                },
                Err(err) => {
                    tracing::debug!(field = name, error = %err, "record field left at zero value");
                    FieldSpec::Shape(shape.clone())
                }
            },
        };
        config.fields.insert(name.to_string(), spec);
    }

    /// Resolve an unset child from its shape, or bind an explicit one.
    fn bind_child(
        &self,
        child: &mut Option<Box<GeneratorConfig>>,
        shape: &Shape,
    ) -> Result<(), DispatchError> {
        match child {
            Some(config) if !config.is_unset() => {
                self.bind_explicit(config, shape);
                Ok(())
            }
            _ => {
                *child = Some(Box::new(self.resolve(shape)?));
                Ok(())
            }
        }
    }

    /// Fill the missing parts of an explicitly configured child.
    ///
    /// Explicit children of another family are used as given.
    fn bind_explicit(&self, config: &mut GeneratorConfig, shape: &Shape) {
        if !config.serves(shape.kind()) {
            return;
        }
        if let Err(err) = self.bind(config, shape) {
            tracing::debug!(shape = %shape, error = %err, "explicit generator left partially bound");
        }
    }
}
