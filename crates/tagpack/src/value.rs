//! [`Value`]: the tagged value model every encoder and decoder works on.

use std::hash::{Hash, Hasher};

use crate::{Array, Kind, Map};

/// Wire width a [`Float`] came from, or will be written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// IEEE-754 single precision, tag `0xca`.
    Single,
    /// IEEE-754 double precision, tag `0xcb`.
    Double,
}

impl Precision {
    pub fn bits(self) -> u32 {
        match self {
            Precision::Single => 32,
            Precision::Double => 64,
        }
    }
}

/// A floating-point number together with its wire precision.
///
/// Equality and hashing go through the IEEE bit pattern, so `NaN` equals
/// itself and `0.0` differs from `-0.0`.
#[derive(Debug, Clone, Copy)]
pub struct Float {
    value: f64,
    precision: Precision,
}

impl Float {
    pub fn single(value: f32) -> Self {
        Self {
            value: value as f64,
            precision: Precision::Single,
        }
    }

    pub fn double(value: f64) -> Self {
        Self {
            value,
            precision: Precision::Double,
        }
    }

    pub fn value(self) -> f64 {
        self.value
    }

    pub fn precision(self) -> Precision {
        self.precision
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.precision == other.precision && self.value.to_bits() == other.value.to_bits()
    }
}

impl Eq for Float {}

impl Hash for Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.precision.hash(state);
        self.value.to_bits().hash(state);
    }
}

/// A MessagePack value.
///
/// ```
/// use tagpack::{Array, Map, Value};
///
/// let mut map = Map::new();
/// map.insert("compact", true);
/// map.insert("schema", 0);
/// let value = Value::from(map);
/// assert_eq!(value.as_map().unwrap().get_str("schema"), Some(&Value::Integer(0)));
///
/// let array: Array = vec![Value::Nil, Value::from("x")].into();
/// assert_eq!(array.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Nil,
    Boolean(bool),
    /// Signed 64-bit integer; uint64 payloads above `i64::MAX` are rejected
    /// on decode.
    Integer(i64),
    Float(Float),
    String(String),
    Binary(Vec<u8>),
    Array(Array),
    Map(Map),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Binary(_) => Kind::Binary,
            Value::Array(_) => Kind::Array,
            Value::Map(_) => Kind::Map,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of an Integer or Float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(f.value()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nil
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Value::Integer(i64::from(i))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(Float::single(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(Float::double(f))
    }
}

impl From<Float> for Value {
    fn from(f: Float) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Binary(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Binary(b.to_vec())
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}
