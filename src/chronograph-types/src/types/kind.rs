//! Scalar and time-indexed kinds.

use serde::{Deserialize, Serialize};

/// A scalar kind with both a primitive and a boxed (nullable) representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Boolean.
    Bool,
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Single-precision float.
    Float32,
    /// Double-precision float.
    Float64,
    /// Single character.
    Char,
}

impl PrimitiveKind {
    /// Every primitive kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Bool,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
        Self::Char,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Char => "Char",
        }
    }

    /// Check if this kind belongs to the integer family.
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Check if this kind is a floating-point kind.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// The time-indexed container holding values of this kind.
    pub const fn dynamic_kind(self) -> DynamicKind {
        match self {
            Self::Bool => DynamicKind::Bool,
            Self::Int8 => DynamicKind::Int8,
            Self::Int16 => DynamicKind::Int16,
            Self::Int32 => DynamicKind::Int32,
            Self::Int64 => DynamicKind::Int64,
            Self::Float32 => DynamicKind::Float32,
            Self::Float64 => DynamicKind::Float64,
            Self::Char => DynamicKind::Char,
        }
    }
}

/// Element kind of a time-indexed ("dynamic") value set.
///
/// The containers themselves live in the attribute store; the registry only
/// needs their identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DynamicKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Char,
    String,
}

impl DynamicKind {
    /// Every dynamic kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Bool,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
        Self::Char,
        Self::String,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Bool => PrimitiveKind::Bool.name(),
            Self::Int8 => PrimitiveKind::Int8.name(),
            Self::Int16 => PrimitiveKind::Int16.name(),
            Self::Int32 => PrimitiveKind::Int32.name(),
            Self::Int64 => PrimitiveKind::Int64.name(),
            Self::Float32 => PrimitiveKind::Float32.name(),
            Self::Float64 => PrimitiveKind::Float64.name(),
            Self::Char => PrimitiveKind::Char.name(),
        }
    }

    /// The primitive element kind, or `None` for text.
    pub const fn primitive_kind(self) -> Option<PrimitiveKind> {
        match self {
            Self::Bool => Some(PrimitiveKind::Bool),
            Self::Int8 => Some(PrimitiveKind::Int8),
            Self::Int16 => Some(PrimitiveKind::Int16),
            Self::Int32 => Some(PrimitiveKind::Int32),
            Self::Int64 => Some(PrimitiveKind::Int64),
            Self::Float32 => Some(PrimitiveKind::Float32),
            Self::Float64 => Some(PrimitiveKind::Float64),
            Self::Char => Some(PrimitiveKind::Char),
            Self::String => None,
        }
    }
}
