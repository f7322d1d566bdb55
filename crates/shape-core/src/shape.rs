//! Shape descriptors for the shapegen engine.
//!
//! This module defines `Shape`, the recursive description of "what kind of value
//! is wanted", and `ShapeKind`, the fieldless tag the catalog is keyed by.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Recursive shape descriptor.
///
/// Leaf shapes name a primitive type; composite shapes reference the shapes of
/// their parts. A pointer of depth N is N nested `Pointer` shapes.
///
/// # YAML Format
///
/// Leaf shapes can be specified as strings:
/// ```yaml
/// type: int64
/// type: string
/// ```
///
/// Composite shapes use object format:
/// ```yaml
/// type:
///   type: sequence
///   element: int32
/// type:
///   type: pointer
///   depth: 3
///   target: string
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Boolean value
    Bool,

    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,

    /// 8-bit unsigned integer
    Uint8,
    /// 16-bit unsigned integer
    Uint16,
    /// 32-bit unsigned integer
    Uint32,
    /// 64-bit unsigned integer
    Uint64,

    /// 32-bit IEEE 754 floating point
    Float32,
    /// 64-bit IEEE 754 floating point
    Float64,

    /// Complex number with 32-bit parts
    Complex64,
    /// Complex number with 64-bit parts
    Complex128,

    /// UTF-8 string
    String,

    /// Variable-length sequence
    Sequence {
        /// Element shape
        element: Box<Shape>,
    },

    /// Fixed-length array
    Array {
        /// Number of elements
        length: usize,
        /// Element shape
        element: Box<Shape>,
    },

    /// Key-value mapping
    Map {
        /// Key shape
        key: Box<Shape>,
        /// Value shape
        value: Box<Shape>,
    },

    /// One level of indirection
    Pointer {
        /// Referent shape
        target: Box<Shape>,
    },

    /// Record with named fields
    Record {
        /// Fields in declaration order
        fields: Vec<RecordField>,
    },

    // Describable but never generated
    /// Callable
    Func,
    /// Channel/queue
    Chan,
    /// Dynamically typed "any" value
    Interface,
    /// Raw, untyped pointer
    UnsafePointer,
}

/// A named field of a record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordField {
    /// Field name
    pub name: String,

    /// Field shape
    #[serde(rename = "type")]
    pub shape: Shape,
}

impl RecordField {
    /// Create a new record field.
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

/// Kind tag of a shape, without the shapes of its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    Sequence,
    Array,
    Map,
    Pointer,
    Record,
    Func,
    Chan,
    Interface,
    UnsafePointer,
}

impl ShapeKind {
    /// Every kind, in declaration order.
    pub const ALL: [ShapeKind; 23] = [
        ShapeKind::Bool,
        ShapeKind::Int8,
        ShapeKind::Int16,
        ShapeKind::Int32,
        ShapeKind::Int64,
        ShapeKind::Uint8,
        ShapeKind::Uint16,
        ShapeKind::Uint32,
        ShapeKind::Uint64,
        ShapeKind::Float32,
        ShapeKind::Float64,
        ShapeKind::Complex64,
        ShapeKind::Complex128,
        ShapeKind::String,
        ShapeKind::Sequence,
        ShapeKind::Array,
        ShapeKind::Map,
        ShapeKind::Pointer,
        ShapeKind::Record,
        ShapeKind::Func,
        ShapeKind::Chan,
        ShapeKind::Interface,
        ShapeKind::UnsafePointer,
    ];

    /// The snake_case name used in YAML and in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
            Self::Sequence => "sequence",
            Self::Array => "array",
            Self::Map => "map",
            Self::Pointer => "pointer",
            Self::Record => "record",
            Self::Func => "func",
            Self::Chan => "chan",
            Self::Interface => "interface",
            Self::UnsafePointer => "unsafe_pointer",
        }
    }

    /// Whether any generator exists for this kind.
    pub fn is_supported(self) -> bool {
        !matches!(
            self,
            Self::Func | Self::Chan | Self::Interface | Self::UnsafePointer
        )
    }

    /// Whether this kind references the shapes of other parts.
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            Self::Sequence | Self::Array | Self::Map | Self::Pointer | Self::Record
        )
    }

    /// Leaf shape for this kind, if it has no parts.
    pub fn leaf_shape(self) -> Option<Shape> {
        let shape = match self {
            Self::Bool => Shape::Bool,
            Self::Int8 => Shape::Int8,
            Self::Int16 => Shape::Int16,
            Self::Int32 => Shape::Int32,
            Self::Int64 => Shape::Int64,
            Self::Uint8 => Shape::Uint8,
            Self::Uint16 => Shape::Uint16,
            Self::Uint32 => Shape::Uint32,
            Self::Uint64 => Shape::Uint64,
            Self::Float32 => Shape::Float32,
            Self::Float64 => Shape::Float64,
            Self::Complex64 => Shape::Complex64,
            Self::Complex128 => Shape::Complex128,
            Self::String => Shape::String,
            Self::Func => Shape::Func,
            Self::Chan => Shape::Chan,
            Self::Interface => Shape::Interface,
            Self::UnsafePointer => Shape::UnsafePointer,
            Self::Sequence | Self::Array | Self::Map | Self::Pointer | Self::Record => {
                return None
            }
        };
        Some(shape)
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Shape {
    /// Create a sequence shape with the given element shape.
    pub fn sequence(element: Shape) -> Self {
        Self::Sequence {
            element: Box::new(element),
        }
    }

    /// Create a fixed-length array shape.
    pub fn array(length: usize, element: Shape) -> Self {
        Self::Array {
            length,
            element: Box::new(element),
        }
    }

    /// Create a mapping shape.
    pub fn map(key: Shape, value: Shape) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Create a pointer chain of `depth` levels around `target`.
    ///
    /// A depth of zero is treated as one.
    pub fn pointer(target: Shape, depth: usize) -> Self {
        (0..depth.max(1)).fold(target, |inner, _| Self::Pointer {
            target: Box::new(inner),
        })
    }

    /// Create a record shape from `(name, shape)` pairs.
    pub fn record<N: Into<String>>(fields: impl IntoIterator<Item = (N, Shape)>) -> Self {
        Self::Record {
            fields: fields
                .into_iter()
                .map(|(name, shape)| RecordField::new(name, shape))
                .collect(),
        }
    }

    /// The kind tag of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Bool => ShapeKind::Bool,
            Self::Int8 => ShapeKind::Int8,
            Self::Int16 => ShapeKind::Int16,
            Self::Int32 => ShapeKind::Int32,
            Self::Int64 => ShapeKind::Int64,
            Self::Uint8 => ShapeKind::Uint8,
            Self::Uint16 => ShapeKind::Uint16,
            Self::Uint32 => ShapeKind::Uint32,
            Self::Uint64 => ShapeKind::Uint64,
            Self::Float32 => ShapeKind::Float32,
            Self::Float64 => ShapeKind::Float64,
            Self::Complex64 => ShapeKind::Complex64,
            Self::Complex128 => ShapeKind::Complex128,
            Self::String => ShapeKind::String,
            Self::Sequence { .. } => ShapeKind::Sequence,
            Self::Array { .. } => ShapeKind::Array,
            Self::Map { .. } => ShapeKind::Map,
            Self::Pointer { .. } => ShapeKind::Pointer,
            Self::Record { .. } => ShapeKind::Record,
            Self::Func => ShapeKind::Func,
            Self::Chan => ShapeKind::Chan,
            Self::Interface => ShapeKind::Interface,
            Self::UnsafePointer => ShapeKind::UnsafePointer,
        }
    }

    /// Number of pointer levels and the innermost non-pointer shape.
    ///
    /// Non-pointer shapes report a depth of zero and themselves.
    pub fn pointer_depth(&self) -> (usize, &Shape) {
        let mut depth = 0;
        let mut current = self;
        while let Self::Pointer { target } = current {
            depth += 1;
            current = target;
        }
        (depth, current)
    }

    /// Check if this shape is a signed or unsigned integer.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Uint8
                | Self::Uint16
                | Self::Uint32
                | Self::Uint64
        )
    }

    /// Check if this shape is an integer or floating-point number.
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || matches!(self, Self::Float32 | Self::Float64)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence { element } => write!(f, "sequence<{element}>"),
            Self::Array { length, element } => write!(f, "array<{element}; {length}>"),
            Self::Map { key, value } => write!(f, "map<{key}, {value}>"),
            Self::Pointer { target } => write!(f, "*{target}"),
            Self::Record { fields } => {
                f.write_str("record{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.shape)?;
                }
                f.write_str("}")
            }
            leaf => f.write_str(leaf.kind().name()),
        }
    }
}

// Custom serialization/deserialization for Shape
// Supports both simple string format ("int64") and object format ({"type": "sequence", "element": "int64"})

impl Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            Self::Sequence { element } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "sequence")?;
                map.serialize_entry("element", element)?;
                map.end()
            }
            Self::Array { length, element } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("length", length)?;
                map.serialize_entry("element", element)?;
                map.end()
            }
            Self::Map { key, value } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "map")?;
                map.serialize_entry("key", key)?;
                map.serialize_entry("value", value)?;
                map.end()
            }
            Self::Pointer { .. } => {
                // Chains collapse to a single entry with an explicit depth
                let (depth, target) = self.pointer_depth();
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "pointer")?;
                map.serialize_entry("depth", &depth)?;
                map.serialize_entry("target", target)?;
                map.end()
            }
            Self::Record { fields } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "record")?;
                map.serialize_entry("fields", fields)?;
                map.end()
            }
            leaf => serializer.serialize_str(leaf.kind().name()),
        }
    }
}

impl<'de> Deserialize<'de> for Shape {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct ShapeVisitor;

        impl<'de> Visitor<'de> for ShapeVisitor {
            type Value = Shape;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or map representing a Shape")
            }

            // Handle string format: "int64", "string", etc.
            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                ShapeKind::from_name(value)
                    .and_then(ShapeKind::leaf_shape)
                    .ok_or_else(|| E::custom(format!("unknown simple shape: {value}")))
            }

            // Handle map format: {"type": "array", "length": 4, "element": "int8"}
            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut type_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        type_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let type_name = type_name.ok_or_else(|| M::Error::missing_field("type"))?;
                let kind = ShapeKind::from_name(&type_name)
                    .ok_or_else(|| M::Error::custom(format!("unknown shape: {type_name}")))?;

                if let Some(leaf) = kind.leaf_shape() {
                    return Ok(leaf);
                }

                match kind {
                    ShapeKind::Sequence => {
                        let element: Shape = get_field_required(&fields, "element")?;
                        Ok(Shape::sequence(element))
                    }
                    ShapeKind::Array => {
                        let length = get_field_required(&fields, "length")?;
                        let element: Shape = get_field_required(&fields, "element")?;
                        Ok(Shape::array(length, element))
                    }
                    ShapeKind::Map => {
                        let key: Shape = get_field_required(&fields, "key")?;
                        let value: Shape = get_field_required(&fields, "value")?;
                        Ok(Shape::map(key, value))
                    }
                    ShapeKind::Pointer => {
                        let depth = if fields.contains_key("depth") {
                            get_field_required(&fields, "depth")?
                        } else {
                            1
                        };
                        let target: Shape = get_field_required(&fields, "target")?;
                        Ok(Shape::pointer(target, depth))
                    }
                    ShapeKind::Record => {
                        let fields = get_field_required(&fields, "fields")?;
                        Ok(Shape::Record { fields })
                    }
                    _ => Err(M::Error::custom(format!("unknown shape: {type_name}"))),
                }
            }
        }

        deserializer.deserialize_any(ShapeVisitor)
    }
}

// Helper functions for deserialization
fn get_field_required<T: for<'de> Deserialize<'de>, E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &'static str,
) -> Result<T, E> {
    let value = fields.get(key).ok_or_else(|| E::missing_field(key))?;
    serde_yaml::from_value(value.clone())
        .map_err(|e| E::custom(format!("invalid field '{key}': {e}")))
}
