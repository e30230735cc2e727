//! Error types and result aliases for chronograph.
//!
//! Every failure in the registry is synchronous and returned straight to the
//! caller; nothing here retries or recovers.

mod error;

pub use error::{AttrError, AttrResult};
