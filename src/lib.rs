//! chronograph - type registry for time-indexed graph attributes
//!
//! Defines the closed set of types an attribute column may hold, their
//! canonical forms, the time-indexed set type of each scalar, and the
//! coercion of text cells into typed values.

#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Re-export crates
pub use chronograph_coerce as coerce;
pub use chronograph_types as types;
pub use common_config as config;
pub use common_error as error;

pub use chronograph_coerce::{DateTimeParser, TextCoercer, TypeRegistry};
pub use chronograph_types::{DataType, DynamicKind, PrimitiveKind, Value};
pub use common_error::{AttrError, AttrResult};

/// chronograph version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
