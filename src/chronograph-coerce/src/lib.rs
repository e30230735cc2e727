//! Text coercion and the attribute type registry.
//!
//! Converts textual cell values into typed [`Value`]s and ISO-8601 text into
//! epoch milliseconds. [`TypeRegistry`] bundles the catalog, standardization,
//! dynamic resolution and coercion behind one immutable value.

pub mod datetime;
pub mod parse;
pub mod registry;

pub use datetime::DateTimeParser;
pub use parse::{strip_decimal_digits, TextCoercer};
pub use registry::TypeRegistry;

pub use chronograph_types::Value;
