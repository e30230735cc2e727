//! Resolution of scalar types to their time-indexed set types.

use common_error::{unsupported_type_err, AttrResult};

use crate::standardize::standardize;
use crate::types::{DataType, DynamicKind};

/// Time-indexed set type holding values of `data_type`.
///
/// The input is standardized first, so boxed and primitive spellings resolve
/// to the same set. Defined only for the nine canonical scalar types; arrays,
/// big numbers and types that are already time-indexed are rejected.
pub fn dynamic_type_of(data_type: &DataType) -> AttrResult<DataType> {
    match standardize(data_type) {
        DataType::Primitive(kind) => Ok(DataType::Dynamic(kind.dynamic_kind())),
        DataType::String => Ok(DataType::Dynamic(DynamicKind::String)),
        DataType::Boxed(_)
        | DataType::BigInteger
        | DataType::BigDecimal
        | DataType::Array(_)
        | DataType::Dynamic(_) => unsupported_type_err!("no time-indexed set for {data_type}"),
    }
}

impl DynamicKind {
    /// The canonical scalar type whose values this set records.
    pub fn scalar_type(self) -> DataType {
        match self.primitive_kind() {
            Some(kind) => DataType::Primitive(kind),
            None => DataType::String,
        }
    }
}
