//! Generated value representation.
//!
//! `Value` is the freshly constructed, exclusively owned result of one
//! generation call. Composite values own their parts; nothing is shared
//! between two generated values.

use crate::shape::Shape;
use serde::{Serialize, Serializer};

/// Complex number with parts of type `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Complex<T> {
    /// Real part
    pub re: T,
    /// Imaginary part
    pub im: T,
}

impl<T> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

/// Generated value.
///
/// Values serialize untagged, so a generated input can be logged as plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Complex64(Complex<f32>),
    Complex128(Complex<f64>),
    String(String),

    /// Variable-length sequence
    Sequence(Vec<Value>),

    /// Fixed-length array
    Array(Vec<Value>),

    /// Key-value mapping
    Map(MapValue),

    /// One level of indirection; `None` is a nil pointer
    Pointer(Option<Box<Value>>),

    /// Record with named fields
    Record(Record),

    /// Zero value of kinds that are never generated (func, chan, interface, unsafe pointer)
    Nil,
}

impl Value {
    /// Zero value of a shape.
    ///
    /// Sequences and maps are empty, pointers are nil, arrays hold `length`
    /// zero elements and records hold every field at its zero value.
    pub fn zero_of(shape: &Shape) -> Self {
        match shape {
            Shape::Bool => Self::Bool(false),
            Shape::Int8 => Self::Int8(0),
            Shape::Int16 => Self::Int16(0),
            Shape::Int32 => Self::Int32(0),
            Shape::Int64 => Self::Int64(0),
            Shape::Uint8 => Self::Uint8(0),
            Shape::Uint16 => Self::Uint16(0),
            Shape::Uint32 => Self::Uint32(0),
            Shape::Uint64 => Self::Uint64(0),
            Shape::Float32 => Self::Float32(0.0),
            Shape::Float64 => Self::Float64(0.0),
            Shape::Complex64 => Self::Complex64(Complex::default()),
            Shape::Complex128 => Self::Complex128(Complex::default()),
            Shape::String => Self::String(String::new()),
            Shape::Sequence { .. } => Self::Sequence(Vec::new()),
            Shape::Array { length, element } => {
                Self::Array(vec![Self::zero_of(element); *length])
            }
            Shape::Map { .. } => Self::Map(MapValue::new()),
            Shape::Pointer { .. } => Self::Pointer(None),
            Shape::Record { fields } => Self::Record(
                fields
                    .iter()
                    .map(|field| (field.name.clone(), Self::zero_of(&field.shape)))
                    .collect(),
            ),
            Shape::Func | Shape::Chan | Shape::Interface | Shape::UnsafePointer => Self::Nil,
        }
    }

    /// Check if this value can be stored in a slot of `shape` as is.
    ///
    /// Every value conforms to `interface`.
    pub fn conforms_to(&self, shape: &Shape) -> bool {
        match (self, shape) {
            (_, Shape::Interface) => true,
            (Self::Bool(_), Shape::Bool)
            | (Self::Int8(_), Shape::Int8)
            | (Self::Int16(_), Shape::Int16)
            | (Self::Int32(_), Shape::Int32)
            | (Self::Int64(_), Shape::Int64)
            | (Self::Uint8(_), Shape::Uint8)
            | (Self::Uint16(_), Shape::Uint16)
            | (Self::Uint32(_), Shape::Uint32)
            | (Self::Uint64(_), Shape::Uint64)
            | (Self::Float32(_), Shape::Float32)
            | (Self::Float64(_), Shape::Float64)
            | (Self::Complex64(_), Shape::Complex64)
            | (Self::Complex128(_), Shape::Complex128)
            | (Self::String(_), Shape::String)
            | (Self::Nil, Shape::Func | Shape::Chan | Shape::UnsafePointer)
            | (Self::Pointer(None), Shape::Pointer { .. }) => true,
            (Self::Sequence(items), Shape::Sequence { element }) => {
                items.iter().all(|item| item.conforms_to(element))
            }
            (Self::Array(items), Shape::Array { length, element }) => {
                items.len() == *length && items.iter().all(|item| item.conforms_to(element))
            }
            (Self::Map(map), Shape::Map { key, value }) => map
                .iter()
                .all(|(k, v)| k.conforms_to(key) && v.conforms_to(value)),
            (Self::Pointer(Some(referent)), Shape::Pointer { target }) => {
                referent.conforms_to(target)
            }
            (Self::Record(record), Shape::Record { fields }) => {
                record.len() == fields.len()
                    && fields.iter().all(|field| {
                        record
                            .get(&field.name)
                            .is_some_and(|value| value.conforms_to(&field.shape))
                    })
            }
            _ => false,
        }
    }

    /// Convert this value into a slot of `shape`.
    ///
    /// Conforming values are returned unchanged. Numbers convert between all
    /// integer and float widths with `as` semantics (integers wrap, floats
    /// truncate and saturate) and complex numbers convert between widths.
    /// Anything else is not convertible.
    pub fn convert_to(&self, shape: &Shape) -> Option<Value> {
        if self.conforms_to(shape) {
            return Some(self.clone());
        }

        if let Some(number) = self.as_number() {
            return number.into_shape(shape);
        }

        match (self, shape) {
            (Self::Complex64(c), Shape::Complex128) => Some(Self::Complex128(Complex::new(
                c.re as f64,
                c.im as f64,
            ))),
            (Self::Complex128(c), Shape::Complex64) => Some(Self::Complex64(Complex::new(
                c.re as f32,
                c.im as f32,
            ))),
            _ => None,
        }
    }

    /// Number of non-nil pointer levels wrapped around the innermost value.
    pub fn pointer_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Self::Pointer(Some(referent)) = current {
            depth += 1;
            current = referent;
        }
        depth
    }

    /// Innermost value behind a chain of non-nil pointers.
    pub fn deref_all(&self) -> &Value {
        let mut current = self;
        while let Self::Pointer(Some(referent)) = current {
            current = referent;
        }
        current
    }

    /// Check if this value is a nil pointer or `Nil`.
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Pointer(None) | Self::Nil)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an i64, widening signed integers.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int8(i) => Some(*i as i64),
            Self::Int16(i) => Some(*i as i64),
            Self::Int32(i) => Some(*i as i64),
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a u64, widening unsigned integers.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Uint8(u) => Some(*u as u64),
            Self::Uint16(u) => Some(*u as u64),
            Self::Uint32(u) => Some(*u as u64),
            Self::Uint64(u) => Some(*u),
            _ => None,
        }
    }

    /// Try to get this value as an f64, widening 32-bit floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float32(f) => Some(*f as f64),
            Self::Float64(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a complex number with 64-bit parts.
    pub fn as_complex(&self) -> Option<Complex<f64>> {
        match self {
            Self::Complex64(c) => Some(Complex::new(c.re as f64, c.im as f64)),
            Self::Complex128(c) => Some(*c),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the elements of a sequence or array.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Self::Sequence(items) | Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get this value as a map.
    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Try to get this value as a record.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<Number> {
        if let Some(i) = self.as_i64() {
            return Some(Number::Signed(i));
        }
        if let Some(u) = self.as_u64() {
            return Some(Number::Unsigned(u));
        }
        self.as_f64().map(Number::Float)
    }
}

#[derive(Debug, Clone, Copy)]
enum Number {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    fn to_i64(self) -> i64 {
        match self {
            Self::Signed(i) => i,
            Self::Unsigned(u) => u as i64,
            Self::Float(f) => f as i64,
        }
    }

    fn to_u64(self) -> u64 {
        match self {
            Self::Signed(i) => i as u64,
            Self::Unsigned(u) => u,
            Self::Float(f) => f as u64,
        }
    }

    fn to_f64(self) -> f64 {
        match self {
            Self::Signed(i) => i as f64,
            Self::Unsigned(u) => u as f64,
            Self::Float(f) => f,
        }
    }

    fn into_shape(self, shape: &Shape) -> Option<Value> {
        let value = match shape {
            Shape::Int8 => Value::Int8(self.to_i64() as i8),
            Shape::Int16 => Value::Int16(self.to_i64() as i16),
            Shape::Int32 => Value::Int32(self.to_i64() as i32),
            Shape::Int64 => Value::Int64(self.to_i64()),
            Shape::Uint8 => Value::Uint8(self.to_u64() as u8),
            Shape::Uint16 => Value::Uint16(self.to_u64() as u16),
            Shape::Uint32 => Value::Uint32(self.to_u64() as u32),
            Shape::Uint64 => Value::Uint64(self.to_u64()),
            Shape::Float32 => Value::Float32(self.to_f64() as f32),
            Shape::Float64 => Value::Float64(self.to_f64()),
            _ => return None,
        };
        Some(value)
    }
}

// ============================================================================
// Map
// ============================================================================

/// Generated key-value mapping.
///
/// Keys are unique under `PartialEq`: inserting an equal key replaces the
/// previous entry. Entries keep first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the value it replaced.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Get the value for a key.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl FromIterator<(Value, Value)> for MapValue {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

// ============================================================================
// Record
// ============================================================================

/// Generated record.
///
/// Fields are kept sorted by name and are read by name lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        match self.fields.binary_search_by(|(n, _)| n.as_str().cmp(&name)) {
            Ok(idx) => Some(std::mem::replace(&mut self.fields[idx].1, value)),
            Err(idx) => {
                self.fields.insert(idx, (name, value));
                None
            }
        }
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .binary_search_by(|(n, _)| n.as_str().cmp(name))
            .ok()
            .map(|idx| &self.fields[idx].1)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<N: Into<String>> FromIterator<(N, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (N, Value)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}
