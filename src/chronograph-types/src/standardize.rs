//! Canonical forms for type descriptors and values.
//!
//! Boxed scalars standardize to their primitive scalar and arrays of boxed
//! scalars to arrays of the primitive scalar. Every other type is already
//! canonical and maps to itself.

use common_error::{unsupported_type_err, AttrResult};

use crate::types::{DataType, Value};

/// Canonical form of a type descriptor.
///
/// Idempotent: standardizing a canonical type returns it unchanged.
pub fn standardize(data_type: &DataType) -> DataType {
    match data_type {
        DataType::Boxed(kind) => DataType::Primitive(*kind),
        DataType::Array(element) => match element.as_ref() {
            DataType::Boxed(kind) => DataType::primitive_array(*kind),
            _ => data_type.clone(),
        },
        DataType::Primitive(_)
        | DataType::String
        | DataType::BigInteger
        | DataType::BigDecimal
        | DataType::Dynamic(_) => data_type.clone(),
    }
}

/// Check whether a type is already in canonical form.
pub fn is_standardized(data_type: &DataType) -> bool {
    standardize(data_type) == *data_type
}

/// The primitive scalar a boxed scalar unwraps to.
///
/// Fails for anything that is not a boxed scalar, including primitives.
pub fn primitive_type_of(data_type: &DataType) -> AttrResult<DataType> {
    match data_type {
        DataType::Boxed(kind) => Ok(DataType::Primitive(*kind)),
        other => unsupported_type_err!("{other} should be a boxed primitive"),
    }
}

/// Canonical form of a value: boxed arrays become primitive arrays, every
/// other value is returned as is.
pub fn standardize_value(value: Value) -> Value {
    match value {
        Value::BoxedArray(array) => Value::PrimitiveArray(array.to_primitive()),
        other => other,
    }
}
