//! Type descriptors for attribute columns.

use std::str::FromStr;

use common_error::AttrError;
use serde::{Deserialize, Serialize};

use super::{DynamicKind, PrimitiveKind};

/// Descriptor for the type an attribute column may hold.
///
/// Not every descriptor is admissible: the set of supported descriptors is
/// fixed by the [`Catalog`](crate::Catalog). Descriptors outside it (nested
/// arrays, arrays of time-indexed sets, big numbers) can be built and
/// compared but are never registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataType {
    /// Primitive scalar. Canonical.
    Primitive(PrimitiveKind),
    /// Boxed (nullable) scalar. Standardizes to `Primitive`.
    Boxed(PrimitiveKind),
    /// UTF-8 text. Canonical.
    String,
    /// Arbitrary-precision integer. Coercion target only.
    BigInteger,
    /// Arbitrary-precision decimal. Coercion target only.
    BigDecimal,
    /// Homogeneous array of elements with the given type.
    Array(Box<Self>),
    /// Time-indexed value set of the given kind. Canonical.
    Dynamic(DynamicKind),
}

impl DataType {
    pub fn array(element: Self) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn primitive_array(kind: PrimitiveKind) -> Self {
        Self::array(Self::Primitive(kind))
    }

    pub fn boxed_array(kind: PrimitiveKind) -> Self {
        Self::array(Self::Boxed(kind))
    }

    /// Check if this type holds a single value.
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Primitive(_) | Self::Boxed(_) | Self::String | Self::BigInteger | Self::BigDecimal
        )
    }

    /// Check if this type is an array type.
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if this type is a time-indexed value set.
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }

    /// Check if this type is a boxed scalar or an array of boxed scalars.
    pub fn is_boxed(&self) -> bool {
        match self {
            Self::Boxed(_) => true,
            Self::Array(inner) => matches!(inner.as_ref(), Self::Boxed(_)),
            _ => false,
        }
    }

    /// Check if this type is a numeric scalar.
    pub const fn is_numeric(&self) -> bool {
        match self {
            Self::Primitive(kind) | Self::Boxed(kind) => kind.is_integer() || kind.is_float(),
            Self::BigInteger | Self::BigDecimal => true,
            _ => false,
        }
    }

    /// Element type of an array, or the scalar type recorded by a time-indexed set.
    pub fn element_type(&self) -> Option<Self> {
        match self {
            Self::Array(inner) => Some(inner.as_ref().clone()),
            Self::Dynamic(kind) => Some(kind.scalar_type()),
            _ => None,
        }
    }

    /// Get the display name for this type.
    pub fn display_name(&self) -> String {
        match self {
            Self::Primitive(kind) => kind.name().to_string(),
            Self::Boxed(kind) => format!("Boxed<{}>", kind.name()),
            Self::String => "String".to_string(),
            Self::BigInteger => "BigInteger".to_string(),
            Self::BigDecimal => "BigDecimal".to_string(),
            Self::Array(inner) => format!("Array<{}>", inner.display_name()),
            Self::Dynamic(kind) => format!("TimestampSet<{}>", kind.name()),
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn primitive_by_name(name: &str) -> Option<PrimitiveKind> {
    PrimitiveKind::ALL.into_iter().find(|k| k.name() == name)
}

fn dynamic_by_name(name: &str) -> Option<DynamicKind> {
    DynamicKind::ALL.into_iter().find(|k| k.name() == name)
}

fn alias(name: &str) -> Option<DataType> {
    let kind = match name {
        "bool" | "boolean" => PrimitiveKind::Bool,
        "byte" => PrimitiveKind::Int8,
        "short" => PrimitiveKind::Int16,
        "int" | "integer" => PrimitiveKind::Int32,
        "long" => PrimitiveKind::Int64,
        "float" => PrimitiveKind::Float32,
        "double" => PrimitiveKind::Float64,
        "char" | "character" => PrimitiveKind::Char,
        "string" => return Some(DataType::String),
        _ => return None,
    };
    Some(DataType::Primitive(kind))
}

fn generic_arg<'a>(name: &'a str, head: &str) -> Option<&'a str> {
    name.strip_prefix(head)?.strip_prefix('<')?.strip_suffix('>')
}

impl FromStr for DataType {
    type Err = AttrError;

    /// Parse a type name: any `Display` spelling, a lowercase scalar alias
    /// such as `int` or `string`, or either followed by `[]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let unknown = || AttrError::unsupported_type(format!("unknown type name '{name}'"));

        if let Some(element) = name.strip_suffix("[]") {
            return Ok(Self::array(element.parse()?));
        }
        if let Some(element) = generic_arg(name, "Array") {
            return Ok(Self::array(element.parse()?));
        }
        if let Some(kind) = generic_arg(name, "Boxed") {
            return primitive_by_name(kind).map(Self::Boxed).ok_or_else(unknown);
        }
        if let Some(kind) = generic_arg(name, "TimestampSet") {
            return dynamic_by_name(kind).map(Self::Dynamic).ok_or_else(unknown);
        }

        match name {
            "String" => Ok(Self::String),
            "BigInteger" => Ok(Self::BigInteger),
            "BigDecimal" => Ok(Self::BigDecimal),
            _ => primitive_by_name(name)
                .map(Self::Primitive)
                .or_else(|| alias(name))
                .ok_or_else(unknown),
        }
    }
}
