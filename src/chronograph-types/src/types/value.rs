//! Runtime attribute values.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;

use super::{BoxedArray, DataType, PrimitiveArray, PrimitiveKind};

/// Runtime value of an attribute cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// 8-bit signed integer.
    Int8(i8),
    /// 16-bit signed integer.
    Int16(i16),
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// Single-precision float.
    Float32(f32),
    /// Double-precision float.
    Float64(f64),
    /// Single character.
    Char(char),
    /// UTF-8 string.
    String(String),
    /// Arbitrary-precision integer.
    BigInteger(BigInt),
    /// Arbitrary-precision decimal.
    BigDecimal(BigDecimal),
    /// Array of primitive scalars.
    PrimitiveArray(PrimitiveArray),
    /// Array of boxed scalars, possibly holding nulls.
    BoxedArray(BoxedArray),
    /// Array of strings, possibly holding nulls.
    StringArray(Vec<Option<String>>),
}

impl Value {
    /// Runtime type of this value.
    ///
    /// Scalars report their primitive type; only arrays keep a boxed spelling.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Bool(_) => DataType::Primitive(PrimitiveKind::Bool),
            Self::Int8(_) => DataType::Primitive(PrimitiveKind::Int8),
            Self::Int16(_) => DataType::Primitive(PrimitiveKind::Int16),
            Self::Int32(_) => DataType::Primitive(PrimitiveKind::Int32),
            Self::Int64(_) => DataType::Primitive(PrimitiveKind::Int64),
            Self::Float32(_) => DataType::Primitive(PrimitiveKind::Float32),
            Self::Float64(_) => DataType::Primitive(PrimitiveKind::Float64),
            Self::Char(_) => DataType::Primitive(PrimitiveKind::Char),
            Self::String(_) => DataType::String,
            Self::BigInteger(_) => DataType::BigInteger,
            Self::BigDecimal(_) => DataType::BigDecimal,
            Self::PrimitiveArray(a) => DataType::primitive_array(a.kind()),
            Self::BoxedArray(a) => DataType::boxed_array(a.kind()),
            Self::StringArray(_) => DataType::array(DataType::String),
        }
    }

    /// Check if this value is an array.
    pub fn is_array(&self) -> bool {
        matches!(
            self,
            Self::PrimitiveArray(_) | Self::BoxedArray(_) | Self::StringArray(_)
        )
    }

    /// Try to get as boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64, widening any fixed-width integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int8(i) => Some(i64::from(*i)),
            Self::Int16(i) => Some(i64::from(*i)),
            Self::Int32(i) => Some(i64::from(*i)),
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float32(f) => Some(f64::from(*f)),
            Self::Float64(f) => Some(*f),
            _ => self.as_i64().map(|i| i as f64),
        }
    }

    /// Try to get as char.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Try to get as string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Int8(_) => "Int8",
            Self::Int16(_) => "Int16",
            Self::Int32(_) => "Int32",
            Self::Int64(_) => "Int64",
            Self::Float32(_) => "Float32",
            Self::Float64(_) => "Float64",
            Self::Char(_) => "Char",
            Self::String(_) => "String",
            Self::BigInteger(_) => "BigInteger",
            Self::BigDecimal(_) => "BigDecimal",
            Self::PrimitiveArray(_) => "PrimitiveArray",
            Self::BoxedArray(_) => "BoxedArray",
            Self::StringArray(_) => "StringArray",
        }
    }
}

macro_rules! impl_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from!(
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    char => Char,
    String => String,
    BigInt => BigInteger,
    BigDecimal => BigDecimal,
    PrimitiveArray => PrimitiveArray,
    BoxedArray => BoxedArray,
);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}
