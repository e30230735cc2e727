//! Type registry core for chronograph attribute columns.
//!
//! This crate provides the closed universe of attribute types:
//! - `DataType` and `Value` for type descriptors and runtime values
//! - `Catalog` for the fixed set of admissible types
//! - `standardize` for canonical type and value forms
//! - `dynamic_type_of` for the time-indexed set type of each scalar

pub mod catalog;
pub mod dynamic;
pub mod standardize;
pub mod types;

#[cfg(test)]
mod proptest_utils;

// Re-export commonly used types
pub use catalog::Catalog;
pub use dynamic::dynamic_type_of;
pub use standardize::{is_standardized, primitive_type_of, standardize, standardize_value};
pub use types::{BoxedArray, DataType, DynamicKind, PrimitiveArray, PrimitiveKind, Value};
