//! Core error types for chronograph.

use thiserror::Error;

/// Result type alias using `AttrError`.
pub type AttrResult<T> = std::result::Result<T, AttrError>;

/// Error raised by the type registry and the text coercion engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AttrError {
    /// Type is not in the catalog, or no rule is defined for it.
    #[error("UnsupportedType: {0}")]
    UnsupportedType(String),

    /// Text is not a valid literal for the requested numeric type.
    #[error("NumberFormat: cannot parse {input:?} as {target}")]
    NumberFormat {
        /// Offending text, after any decimal stripping.
        input: String,
        /// Display name of the requested type.
        target: String,
    },

    /// Text was empty where at least one character is required.
    #[error("EmptyInput: cannot parse empty text as {0}")]
    EmptyInput(String),

    /// Text is not an ISO-8601 date or date-time.
    #[error("DateTimeFormat: invalid date-time {input:?}: {reason}")]
    DateTimeFormat {
        /// Offending text.
        input: String,
        /// What the parser rejected.
        reason: String,
    },

    /// Configuration value out of range.
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),

    /// JSON deserialization error.
    #[error("SerdeJsonError: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl AttrError {
    /// Create a new `UnsupportedType` error.
    pub fn unsupported_type<S: Into<String>>(msg: S) -> Self {
        Self::UnsupportedType(msg.into())
    }

    /// Create a new `NumberFormat` error.
    pub fn number_format<I: Into<String>, T: Into<String>>(input: I, target: T) -> Self {
        Self::NumberFormat {
            input: input.into(),
            target: target.into(),
        }
    }

    /// Create a new `EmptyInput` error.
    pub fn empty_input<S: Into<String>>(target: S) -> Self {
        Self::EmptyInput(target.into())
    }

    /// Create a new `DateTimeFormat` error.
    pub fn datetime_format<I: Into<String>, R: Into<String>>(input: I, reason: R) -> Self {
        Self::DateTimeFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a new `InvalidConfig` error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType(_))
    }

    pub fn is_number_format(&self) -> bool {
        matches!(self, Self::NumberFormat { .. })
    }

    pub fn is_datetime_format(&self) -> bool {
        matches!(self, Self::DateTimeFormat { .. })
    }
}

/// Ensure a condition holds, returning the given error variant if not.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident: $($msg:tt)*) => {
        if !$cond {
            return Err($crate::AttrError::$variant(format!($($msg)*)));
        }
    };
}

/// Return early with an `UnsupportedType` error.
#[macro_export]
macro_rules! unsupported_type_err {
    ($($arg:tt)*) => {
        return Err($crate::AttrError::UnsupportedType(format!($($arg)*)))
    };
}
