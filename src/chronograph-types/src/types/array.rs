//! Homogeneous array values.

use super::PrimitiveKind;

/// Array of primitive scalars. Elements are never null.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveArray {
    Bool(Vec<bool>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Char(Vec<char>),
}

/// Array of boxed scalars. `None` is a null element.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxedArray {
    Bool(Vec<Option<bool>>),
    Int8(Vec<Option<i8>>),
    Int16(Vec<Option<i16>>),
    Int32(Vec<Option<i32>>),
    Int64(Vec<Option<i64>>),
    Float32(Vec<Option<f32>>),
    Float64(Vec<Option<f64>>),
    Char(Vec<Option<char>>),
}

macro_rules! impl_array_common {
    ($array:ident) => {
        impl $array {
            /// Element kind of this array.
            pub const fn kind(&self) -> PrimitiveKind {
                match self {
                    Self::Bool(_) => PrimitiveKind::Bool,
                    Self::Int8(_) => PrimitiveKind::Int8,
                    Self::Int16(_) => PrimitiveKind::Int16,
                    Self::Int32(_) => PrimitiveKind::Int32,
                    Self::Int64(_) => PrimitiveKind::Int64,
                    Self::Float32(_) => PrimitiveKind::Float32,
                    Self::Float64(_) => PrimitiveKind::Float64,
                    Self::Char(_) => PrimitiveKind::Char,
                }
            }

            pub fn len(&self) -> usize {
                match self {
                    Self::Bool(v) => v.len(),
                    Self::Int8(v) => v.len(),
                    Self::Int16(v) => v.len(),
                    Self::Int32(v) => v.len(),
                    Self::Int64(v) => v.len(),
                    Self::Float32(v) => v.len(),
                    Self::Float64(v) => v.len(),
                    Self::Char(v) => v.len(),
                }
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }
    };
}

impl_array_common!(PrimitiveArray);
impl_array_common!(BoxedArray);

/// Copy every non-null element into a freshly allocated destination; null
/// slots keep the primitive's zero value.
fn unbox<T: Copy + Default>(source: &[Option<T>]) -> Vec<T> {
    let mut destination = vec![T::default(); source.len()];
    for (slot, element) in destination.iter_mut().zip(source) {
        if let Some(value) = element {
            *slot = *value;
        }
    }
    destination
}

impl BoxedArray {
    /// Convert to the primitive form, preserving length and order.
    ///
    /// Null elements are not coerced: they become the zero value of the
    /// element kind (`false`, `0`, `0.0`, `'\0'`).
    pub fn to_primitive(&self) -> PrimitiveArray {
        match self {
            Self::Bool(v) => PrimitiveArray::Bool(unbox(v)),
            Self::Int8(v) => PrimitiveArray::Int8(unbox(v)),
            Self::Int16(v) => PrimitiveArray::Int16(unbox(v)),
            Self::Int32(v) => PrimitiveArray::Int32(unbox(v)),
            Self::Int64(v) => PrimitiveArray::Int64(unbox(v)),
            Self::Float32(v) => PrimitiveArray::Float32(unbox(v)),
            Self::Float64(v) => PrimitiveArray::Float64(unbox(v)),
            Self::Char(v) => PrimitiveArray::Char(unbox(v)),
        }
    }

    /// Number of null elements.
    pub fn null_count(&self) -> usize {
        fn nulls<T>(v: &[Option<T>]) -> usize {
            v.iter().filter(|e| e.is_none()).count()
        }
        match self {
            Self::Bool(v) => nulls(v),
            Self::Int8(v) => nulls(v),
            Self::Int16(v) => nulls(v),
            Self::Int32(v) => nulls(v),
            Self::Int64(v) => nulls(v),
            Self::Float32(v) => nulls(v),
            Self::Float64(v) => nulls(v),
            Self::Char(v) => nulls(v),
        }
    }
}

macro_rules! impl_from_vec {
    ($($variant:ident => $t:ty),* $(,)?) => {
        $(
            impl From<Vec<$t>> for PrimitiveArray {
                fn from(v: Vec<$t>) -> Self {
                    Self::$variant(v)
                }
            }

            impl From<Vec<Option<$t>>> for BoxedArray {
                fn from(v: Vec<Option<$t>>) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_vec!(
    Bool => bool,
    Int8 => i8,
    Int16 => i16,
    Int32 => i32,
    Int64 => i64,
    Float32 => f32,
    Float64 => f64,
    Char => char,
);
