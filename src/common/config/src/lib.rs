//! Configuration management for chronograph.
//!
//! Provides the settings a type registry is built from. A registry reads its
//! configuration once at construction and never changes afterwards.

use common_error::{ensure, AttrResult};
use serde::{Deserialize, Serialize};

/// Largest absolute UTC offset accepted, exclusive (one day).
pub const MAX_OFFSET_SECONDS: i32 = 86_400;

/// Global registry configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RegistryConfig {
    /// Date-time parsing configuration.
    pub datetime: DateTimeConfig,
    /// Text coercion configuration.
    pub coercion: CoercionConfig,
}

impl RegistryConfig {
    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> AttrResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every setting is within range.
    pub fn validate(&self) -> AttrResult<()> {
        self.datetime.validate()
    }
}

/// Date-time parser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateTimeConfig {
    /// Offset from UTC, in seconds, applied to input that carries no offset.
    pub default_offset_seconds: i32,
}

impl Default for DateTimeConfig {
    fn default() -> Self {
        Self {
            default_offset_seconds: 0,
        }
    }
}

impl DateTimeConfig {
    /// Configuration that interprets offset-less input at the given UTC offset.
    pub fn with_offset_seconds(default_offset_seconds: i32) -> Self {
        Self {
            default_offset_seconds,
        }
    }

    /// Check that the default offset is strictly within one day of UTC.
    pub fn validate(&self) -> AttrResult<()> {
        ensure!(
            self.default_offset_seconds.unsigned_abs() < MAX_OFFSET_SECONDS.unsigned_abs(),
            InvalidConfig: "default_offset_seconds must lie within ±{MAX_OFFSET_SECONDS}, got {}",
            self.default_offset_seconds
        );
        Ok(())
    }
}

/// Text coercion configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoercionConfig {
    /// Ignore leading and trailing whitespace when parsing floating-point text.
    pub trim_numeric_whitespace: bool,
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self {
            trim_numeric_whitespace: true,
        }
    }
}
