//! Type system for attribute values.
//!
//! `DataType` describes what a column may hold, `Value` is what a cell holds
//! at runtime.

mod array;
mod data_type;
mod kind;
mod value;

pub use array::{BoxedArray, PrimitiveArray};
pub use data_type::DataType;
pub use kind::{DynamicKind, PrimitiveKind};
pub use value::Value;
