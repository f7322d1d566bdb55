//! Generator configurations.
//!
//! Each configuration is an immutable value object carrying the constraints for
//! one generator family. Configurations are pure data: they are loaded from YAML,
//! cloned freely, and shared by reference across threads.
//!
//! Several fields are declarative only (sign and zero flags on integers, parity,
//! multiple-of and membership constraints, the float classification flags, the
//! complex magnitude bound, `sorted` and `unique`). They are carried and
//! serialized but the generation algorithms do not enforce them.

use crate::shape::{RecordField, Shape, ShapeKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Widths
// ============================================================================

/// Target width of a signed integer generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntWidth {
    I8,
    I16,
    I32,
    #[default]
    I64,
}

impl IntWidth {
    /// Inclusive representable range.
    pub fn bounds(self) -> (i64, i64) {
        match self {
            Self::I8 => (i8::MIN as i64, i8::MAX as i64),
            Self::I16 => (i16::MIN as i64, i16::MAX as i64),
            Self::I32 => (i32::MIN as i64, i32::MAX as i64),
            Self::I64 => (i64::MIN, i64::MAX),
        }
    }

    /// Width for a signed integer kind.
    pub fn for_kind(kind: ShapeKind) -> Option<Self> {
        match kind {
            ShapeKind::Int8 => Some(Self::I8),
            ShapeKind::Int16 => Some(Self::I16),
            ShapeKind::Int32 => Some(Self::I32),
            ShapeKind::Int64 => Some(Self::I64),
            _ => None,
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            Self::I8 => Shape::Int8,
            Self::I16 => Shape::Int16,
            Self::I32 => Shape::Int32,
            Self::I64 => Shape::Int64,
        }
    }
}

/// Target width of an unsigned integer generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UintWidth {
    U8,
    U16,
    U32,
    #[default]
    U64,
}

impl UintWidth {
    /// Largest representable value.
    pub fn max_value(self) -> u64 {
        match self {
            Self::U8 => u8::MAX as u64,
            Self::U16 => u16::MAX as u64,
            Self::U32 => u32::MAX as u64,
            Self::U64 => u64::MAX,
        }
    }

    /// Width for an unsigned integer kind.
    pub fn for_kind(kind: ShapeKind) -> Option<Self> {
        match kind {
            ShapeKind::Uint8 => Some(Self::U8),
            ShapeKind::Uint16 => Some(Self::U16),
            ShapeKind::Uint32 => Some(Self::U32),
            ShapeKind::Uint64 => Some(Self::U64),
            _ => None,
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            Self::U8 => Shape::Uint8,
            Self::U16 => Shape::Uint16,
            Self::U32 => Shape::Uint32,
            Self::U64 => Shape::Uint64,
        }
    }
}

/// Target width of a floating-point generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatWidth {
    F32,
    #[default]
    F64,
}

/// Target width of a complex generator (total bits of both parts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexWidth {
    C64,
    #[default]
    C128,
}

/// Parity constraint for integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    Even,
    Odd,
}

// ============================================================================
// Leaf Configurations
// ============================================================================

/// Signed integer constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntConfig {
    /// Target width
    pub width: IntWidth,
    /// Minimum value (inclusive)
    pub min: i64,
    /// Maximum value (inclusive)
    pub max: i64,
    /// Declarative: negative values intended
    pub allow_negative: bool,
    /// Declarative: zero intended
    pub allow_zero: bool,
    /// Declarative: parity
    pub parity: Option<Parity>,
    /// Declarative: values should be multiples of this
    pub multiple_of: Option<i64>,
    /// Declarative: values should come from this set
    pub one_of: Vec<i64>,
}

impl IntConfig {
    /// Create a 64-bit configuration over `[min, max]`.
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Set the target width.
    pub fn with_width(mut self, width: IntWidth) -> Self {
        self.width = width;
        self
    }

    pub fn shape(&self) -> Shape {
        self.width.shape()
    }

    /// True when every constraint field holds its empty value.
    pub fn is_unset(&self) -> bool {
        *self
            == Self {
                width: self.width,
                ..Self::default()
            }
    }
}

/// Unsigned integer constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UintConfig {
    /// Target width
    pub width: UintWidth,
    /// Minimum value (inclusive)
    pub min: u64,
    /// Maximum value (inclusive)
    pub max: u64,
    /// Report the shape as `int64` instead of the unsigned width.
    /// The generated value stays unsigned.
    pub signed: bool,
}

impl UintConfig {
    /// Create a 64-bit configuration over `[min, max]`.
    pub fn new(min: u64, max: u64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Set the target width.
    pub fn with_width(mut self, width: UintWidth) -> Self {
        self.width = width;
        self
    }

    /// Reported shape; `int64` when `signed` is set.
    pub fn shape(&self) -> Shape {
        if self.signed {
            Shape::Int64
        } else {
            self.width.shape()
        }
    }

    pub fn is_unset(&self) -> bool {
        *self
            == Self {
                width: self.width,
                ..Self::default()
            }
    }
}

/// Floating-point constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatConfig {
    /// Target width
    pub width: FloatWidth,
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (exclusive)
    pub max: f64,
    /// Declarative: exclude zero
    pub non_zero: bool,
    /// Declarative: exclude NaN and infinities
    pub finite_only: bool,
    /// Declarative: NaN may appear
    pub allow_nan: bool,
    /// Declarative: infinities may appear
    pub allow_inf: bool,
    /// Declarative: decimal places
    pub precision: Option<u32>,
}

impl FloatConfig {
    /// Create a 64-bit configuration over `[min, max)`.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    /// Set the target width.
    pub fn with_width(mut self, width: FloatWidth) -> Self {
        self.width = width;
        self
    }

    pub fn shape(&self) -> Shape {
        match self.width {
            FloatWidth::F32 => Shape::Float32,
            FloatWidth::F64 => Shape::Float64,
        }
    }

    pub fn is_unset(&self) -> bool {
        *self
            == Self {
                width: self.width,
                ..Self::default()
            }
    }
}

/// Complex number constraints, one range per axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexConfig {
    /// Target width
    pub width: ComplexWidth,
    pub real_min: f64,
    pub real_max: f64,
    pub imag_min: f64,
    pub imag_max: f64,
    /// Declarative: bound on the modulus
    pub max_magnitude: Option<f64>,
}

impl ComplexConfig {
    /// Create a 128-bit configuration with the given axis ranges.
    pub fn new(real: (f64, f64), imag: (f64, f64)) -> Self {
        Self {
            real_min: real.0,
            real_max: real.1,
            imag_min: imag.0,
            imag_max: imag.1,
            ..Self::default()
        }
    }

    /// Set the target width.
    pub fn with_width(mut self, width: ComplexWidth) -> Self {
        self.width = width;
        self
    }

    pub fn shape(&self) -> Shape {
        match self.width {
            ComplexWidth::C64 => Shape::Complex64,
            ComplexWidth::C128 => Shape::Complex128,
        }
    }

    pub fn is_unset(&self) -> bool {
        *self
            == Self {
                width: self.width,
                ..Self::default()
            }
    }
}

/// String constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringConfig {
    /// Minimum length of the random core
    pub min_len: i64,
    /// Maximum length of the random core; `<= 0` means 10
    pub max_len: i64,
    /// Characters to draw from; empty means printable ASCII
    pub charset: String,
    /// Prepended after generation
    pub prefix: String,
    /// Appended after generation
    pub suffix: String,
    /// Declarative: no repeated characters
    pub unique: bool,
}

impl StringConfig {
    /// Create a configuration for cores of `min_len..=max_len` characters.
    pub fn new(min_len: i64, max_len: i64) -> Self {
        Self {
            min_len,
            max_len,
            ..Self::default()
        }
    }

    /// Set the alphabet.
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    /// Set prefix and suffix.
    pub fn with_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.suffix = suffix.into();
        self
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// Boolean constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolConfig {
    /// Always produce `true`; wins over `force_false`
    pub force_true: bool,
    /// Always produce `false`
    pub force_false: bool,
}

impl BoolConfig {
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

// ============================================================================
// Composite Configurations
// ============================================================================

/// Variable-length sequence constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    pub min_len: i64,
    /// Negative means 5
    pub max_len: i64,
    /// Element generator
    pub element: Option<Box<GeneratorConfig>>,
    /// Declarative: no repeated elements
    pub unique: bool,
}

impl SequenceConfig {
    pub fn new(min_len: i64, max_len: i64, element: GeneratorConfig) -> Self {
        Self {
            min_len,
            max_len,
            element: Some(Box::new(element)),
            unique: false,
        }
    }

    pub fn shape(&self) -> Shape {
        Shape::sequence(child_shape(&self.element))
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// Fixed-length array constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    /// Exact number of elements; `<= 0` yields no value
    pub length: i64,
    /// Element generator
    pub element: Option<Box<GeneratorConfig>>,
    /// Declarative: elements in ascending order
    pub sorted: bool,
}

impl ArrayConfig {
    pub fn new(length: i64, element: GeneratorConfig) -> Self {
        Self {
            length,
            element: Some(Box::new(element)),
            sorted: false,
        }
    }

    pub fn shape(&self) -> Shape {
        Shape::array(
            usize::try_from(self.length).unwrap_or(0),
            child_shape(&self.element),
        )
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// Key-value mapping constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub min_size: i64,
    /// `<= 0` means the `[1, 5]` default
    pub max_size: i64,
    /// Key generator
    pub key: Option<Box<GeneratorConfig>>,
    /// Value generator
    pub value: Option<Box<GeneratorConfig>>,
}

impl MapConfig {
    pub fn new(min_size: i64, max_size: i64, key: GeneratorConfig, value: GeneratorConfig) -> Self {
        Self {
            min_size,
            max_size,
            key: Some(Box::new(key)),
            value: Some(Box::new(value)),
        }
    }

    pub fn shape(&self) -> Shape {
        Shape::map(child_shape(&self.key), child_shape(&self.value))
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// Pointer chain constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Half of all draws produce a nil pointer at the outer level
    pub allow_nil: bool,
    /// Levels of indirection; values below 1 mean 1
    pub depth: i64,
    /// Referent generator
    pub target: Option<Box<GeneratorConfig>>,
}

impl PointerConfig {
    pub fn new(depth: i64, target: GeneratorConfig) -> Self {
        Self {
            allow_nil: false,
            depth,
            target: Some(Box::new(target)),
        }
    }

    /// Allow a nil outer level.
    pub fn nullable(mut self) -> Self {
        self.allow_nil = true;
        self
    }

    /// Effective depth.
    pub fn levels(&self) -> usize {
        usize::try_from(self.depth).unwrap_or(0).max(1)
    }

    pub fn shape(&self) -> Shape {
        Shape::pointer(child_shape(&self.target), self.levels())
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }
}

/// How one record field is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSpec {
    /// Field shape is the generator's shape
    Generator(GeneratorConfig),
    /// Field is declared but never generated; it keeps its zero value
    Shape(Shape),
    /// Declared field shape filled from a generator, converting when needed
    Typed {
        shape: Shape,
        generator: GeneratorConfig,
    },
}

impl FieldSpec {
    /// Declared shape of the field.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Generator(generator) => generator.shape(),
            Self::Shape(shape) | Self::Typed { shape, .. } => shape.clone(),
        }
    }

    /// Generator that fills the field, if any.
    pub fn generator(&self) -> Option<&GeneratorConfig> {
        match self {
            Self::Generator(generator) | Self::Typed { generator, .. } => Some(generator),
            Self::Shape(_) => None,
        }
    }
}

impl From<GeneratorConfig> for FieldSpec {
    fn from(generator: GeneratorConfig) -> Self {
        Self::Generator(generator)
    }
}

impl From<Shape> for FieldSpec {
    fn from(shape: Shape) -> Self {
        Self::Shape(shape)
    }
}

/// Dynamic record constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordConfig {
    /// Field name -> field spec, ordered by name
    pub fields: BTreeMap<String, FieldSpec>,
}

impl RecordConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field.
    pub fn field(mut self, name: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        self.fields.insert(name.into(), spec.into());
        self
    }

    pub fn shape(&self) -> Shape {
        Shape::Record {
            fields: self
                .fields
                .iter()
                .map(|(name, spec)| RecordField::new(name.clone(), spec.shape()))
                .collect(),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.fields.is_empty()
    }
}

fn child_shape(child: &Option<Box<GeneratorConfig>>) -> Shape {
    child
        .as_deref()
        .map(GeneratorConfig::shape)
        .unwrap_or(Shape::Interface)
}

// ============================================================================
// Generator Configuration
// ============================================================================

/// Generator configuration for one kind.
///
/// This enum is the closed set of generator families the engine knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Signed integers in a range
    Int(IntConfig),
    /// Unsigned integers in a range
    Uint(UintConfig),
    /// Floats in a half-open range
    Float(FloatConfig),
    /// Complex numbers with independent axes
    Complex(ComplexConfig),
    /// Strings over an alphabet
    String(StringConfig),
    /// Booleans, optionally forced
    Bool(BoolConfig),
    /// Variable-length sequences
    Sequence(SequenceConfig),
    /// Fixed-length arrays
    Array(ArrayConfig),
    /// Key-value mappings
    Map(MapConfig),
    /// Pointer chains
    Pointer(PointerConfig),
    /// Records with named fields
    Record(RecordConfig),
}

impl GeneratorConfig {
    /// Name of the generator family, as used in the `type` tag.
    pub fn family(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Complex(_) => "complex",
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
            Self::Sequence(_) => "sequence",
            Self::Array(_) => "array",
            Self::Map(_) => "map",
            Self::Pointer(_) => "pointer",
            Self::Record(_) => "record",
        }
    }

    /// Shape of the values this configuration produces.
    ///
    /// Missing sub-generators are reported as `interface`.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Int(config) => config.shape(),
            Self::Uint(config) => config.shape(),
            Self::Float(config) => config.shape(),
            Self::Complex(config) => config.shape(),
            Self::String(_) => Shape::String,
            Self::Bool(_) => Shape::Bool,
            Self::Sequence(config) => config.shape(),
            Self::Array(config) => config.shape(),
            Self::Map(config) => config.shape(),
            Self::Pointer(config) => config.shape(),
            Self::Record(config) => config.shape(),
        }
    }

    /// True when the configuration equals the empty value of its type.
    ///
    /// Width tags are ignored: an all-zero `int` entry stored under `int8`
    /// is unset.
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Int(config) => config.is_unset(),
            Self::Uint(config) => config.is_unset(),
            Self::Float(config) => config.is_unset(),
            Self::Complex(config) => config.is_unset(),
            Self::String(config) => config.is_unset(),
            Self::Bool(config) => config.is_unset(),
            Self::Sequence(config) => config.is_unset(),
            Self::Array(config) => config.is_unset(),
            Self::Map(config) => config.is_unset(),
            Self::Pointer(config) => config.is_unset(),
            Self::Record(config) => config.is_unset(),
        }
    }

    /// Whether this configuration family can generate values of `kind`.
    pub fn serves(&self, kind: ShapeKind) -> bool {
        match self {
            Self::Int(_) => IntWidth::for_kind(kind).is_some(),
            Self::Uint(_) => UintWidth::for_kind(kind).is_some(),
            Self::Float(_) => matches!(kind, ShapeKind::Float32 | ShapeKind::Float64),
            Self::Complex(_) => matches!(kind, ShapeKind::Complex64 | ShapeKind::Complex128),
            Self::String(_) => kind == ShapeKind::String,
            Self::Bool(_) => kind == ShapeKind::Bool,
            Self::Sequence(_) => kind == ShapeKind::Sequence,
            Self::Array(_) => kind == ShapeKind::Array,
            Self::Map(_) => kind == ShapeKind::Map,
            Self::Pointer(_) => kind == ShapeKind::Pointer,
            Self::Record(_) => kind == ShapeKind::Record,
        }
    }

    /// Set the leaf width to match `kind`. Composite configurations are unchanged.
    pub fn set_width_for(&mut self, kind: ShapeKind) {
        match self {
            Self::Int(config) => {
                if let Some(width) = IntWidth::for_kind(kind) {
                    config.width = width;
                }
            }
            Self::Uint(config) => {
                if let Some(width) = UintWidth::for_kind(kind) {
                    config.width = width;
                }
            }
            Self::Float(config) => match kind {
                ShapeKind::Float32 => config.width = FloatWidth::F32,
                ShapeKind::Float64 => config.width = FloatWidth::F64,
                _ => {}
            },
            Self::Complex(config) => match kind {
                ShapeKind::Complex64 => config.width = ComplexWidth::C64,
                ShapeKind::Complex128 => config.width = ComplexWidth::C128,
                _ => {}
            },
            _ => {}
        }
    }

    /// The empty configuration for the family that serves `kind`.
    pub fn unset_for(kind: ShapeKind) -> Option<Self> {
        let mut config = match kind {
            ShapeKind::Int8 | ShapeKind::Int16 | ShapeKind::Int32 | ShapeKind::Int64 => {
                Self::Int(IntConfig::default())
            }
            ShapeKind::Uint8 | ShapeKind::Uint16 | ShapeKind::Uint32 | ShapeKind::Uint64 => {
                Self::Uint(UintConfig::default())
            }
            ShapeKind::Float32 | ShapeKind::Float64 => Self::Float(FloatConfig::default()),
            ShapeKind::Complex64 | ShapeKind::Complex128 => Self::Complex(ComplexConfig::default()),
            ShapeKind::String => Self::String(StringConfig::default()),
            ShapeKind::Bool => Self::Bool(BoolConfig::default()),
            ShapeKind::Sequence => Self::Sequence(SequenceConfig::default()),
            ShapeKind::Array => Self::Array(ArrayConfig::default()),
            ShapeKind::Map => Self::Map(MapConfig::default()),
            ShapeKind::Pointer => Self::Pointer(PointerConfig::default()),
            ShapeKind::Record => Self::Record(RecordConfig::default()),
            ShapeKind::Func | ShapeKind::Chan | ShapeKind::Interface | ShapeKind::UnsafePointer => {
                return None
            }
        };
        config.set_width_for(kind);
        Some(config)
    }
}

impl From<IntConfig> for GeneratorConfig {
    fn from(config: IntConfig) -> Self {
        Self::Int(config)
    }
}

impl From<UintConfig> for GeneratorConfig {
    fn from(config: UintConfig) -> Self {
        Self::Uint(config)
    }
}

impl From<FloatConfig> for GeneratorConfig {
    fn from(config: FloatConfig) -> Self {
        Self::Float(config)
    }
}

impl From<ComplexConfig> for GeneratorConfig {
    fn from(config: ComplexConfig) -> Self {
        Self::Complex(config)
    }
}

impl From<StringConfig> for GeneratorConfig {
    fn from(config: StringConfig) -> Self {
        Self::String(config)
    }
}

impl From<BoolConfig> for GeneratorConfig {
    fn from(config: BoolConfig) -> Self {
        Self::Bool(config)
    }
}

impl From<SequenceConfig> for GeneratorConfig {
    fn from(config: SequenceConfig) -> Self {
        Self::Sequence(config)
    }
}

impl From<ArrayConfig> for GeneratorConfig {
    fn from(config: ArrayConfig) -> Self {
        Self::Array(config)
    }
}

impl From<MapConfig> for GeneratorConfig {
    fn from(config: MapConfig) -> Self {
        Self::Map(config)
    }
}

impl From<PointerConfig> for GeneratorConfig {
    fn from(config: PointerConfig) -> Self {
        Self::Pointer(config)
    }
}

impl From<RecordConfig> for GeneratorConfig {
    fn from(config: RecordConfig) -> Self {
        Self::Record(config)
    }
}
