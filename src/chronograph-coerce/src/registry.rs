//! The type registry consumed by attribute column storage.

use std::collections::HashSet;

use log::debug;

use chronograph_types::{
    dynamic_type_of, standardize, standardize_value, BoxedArray, Catalog, DataType,
    PrimitiveArray, Value,
};
use common_config::RegistryConfig;
use common_error::AttrResult;

use crate::datetime::DateTimeParser;
use crate::parse::TextCoercer;

/// Immutable registry of attribute types and their text coercions.
///
/// Built once at startup and shared by reference (or behind an `Arc`);
/// every method takes `&self` and nothing is mutated after construction,
/// so any number of threads may use one registry concurrently.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    catalog: Catalog,
    coercer: TextCoercer,
    datetime: DateTimeParser,
}

impl TypeRegistry {
    /// Build a registry from configuration.
    pub fn new(config: &RegistryConfig) -> AttrResult<Self> {
        config.validate()?;
        let registry = Self {
            catalog: Catalog::new(),
            coercer: TextCoercer::new(&config.coercion),
            datetime: DateTimeParser::new(&config.datetime)?,
        };
        debug!(
            "Built type registry: {} types, default offset {}",
            registry.catalog.len(),
            registry.datetime.default_offset()
        );
        Ok(registry)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Check whether a type is admissible for an attribute column.
    pub fn is_supported(&self, data_type: &DataType) -> bool {
        self.catalog.is_supported(data_type)
    }

    /// Every admissible type.
    pub fn supported_types(&self) -> &HashSet<DataType> {
        self.catalog.supported_types()
    }

    /// Canonical form of a type.
    pub fn standardize(&self, data_type: &DataType) -> DataType {
        standardize(data_type)
    }

    /// Canonical form of a value.
    pub fn standardize_value(&self, value: Value) -> Value {
        standardize_value(value)
    }

    /// Time-indexed set type for a scalar type.
    pub fn dynamic_type_of(&self, data_type: &DataType) -> AttrResult<DataType> {
        dynamic_type_of(data_type)
    }

    /// Parse a text cell as a value of `target`.
    pub fn parse(&self, text: &str, target: &DataType) -> AttrResult<Value> {
        self.coercer.parse(text, target)
    }

    /// Parse a text cell for a column declared as `column_type`.
    ///
    /// Cells of a time-indexed column hold one value of the set's scalar
    /// type; every other column type parses as [`parse`](Self::parse).
    pub fn parse_as(&self, text: &str, column_type: &DataType) -> AttrResult<Value> {
        match column_type {
            DataType::Dynamic(kind) => self.coercer.parse(text, &kind.scalar_type()),
            _ => self.coercer.parse(text, column_type),
        }
    }

    /// Parse an ISO-8601 date or date-time into epoch milliseconds.
    pub fn parse_datetime(&self, text: &str) -> AttrResult<f64> {
        self.datetime.parse_millis(text)
    }

    /// Convert a boxed array to its primitive form; nulls become zero values.
    pub fn to_primitive_array(&self, array: &BoxedArray) -> PrimitiveArray {
        array.to_primitive()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self {
            catalog: Catalog::new(),
            coercer: TextCoercer::default(),
            datetime: DateTimeParser::utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronograph_types::{DynamicKind, PrimitiveKind};
    use common_config::DateTimeConfig;

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TypeRegistry>();
    }

    #[test]
    fn test_new_matches_default() {
        let registry = TypeRegistry::new(&RegistryConfig::default()).unwrap();
        let default = TypeRegistry::default();
        assert_eq!(registry.supported_types(), default.supported_types());
        assert_eq!(
            registry.parse_datetime("2013-05-01").unwrap(),
            default.parse_datetime("2013-05-01").unwrap()
        );
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = RegistryConfig {
            datetime: DateTimeConfig::with_offset_seconds(-90_000),
            ..RegistryConfig::default()
        };
        assert!(TypeRegistry::new(&config).is_err());
    }

    #[test]
    fn test_parse_as_dynamic_column() {
        let registry = TypeRegistry::default();
        assert_eq!(
            registry
                .parse_as("7.9", &DataType::Dynamic(DynamicKind::Int16))
                .unwrap(),
            Value::Int16(7)
        );
        assert_eq!(
            registry
                .parse_as("label", &DataType::Dynamic(DynamicKind::String))
                .unwrap(),
            Value::from("label")
        );
        assert!(registry
            .parse("1", &DataType::Dynamic(DynamicKind::Int16))
            .unwrap_err()
            .is_unsupported_type());
    }

    #[test]
    fn test_facade_delegates() {
        let registry = TypeRegistry::default();
        let boxed = DataType::Boxed(PrimitiveKind::Float64);

        assert!(registry.is_supported(&boxed));
        assert_eq!(
            registry.standardize(&boxed),
            DataType::Primitive(PrimitiveKind::Float64)
        );
        assert_eq!(
            registry.dynamic_type_of(&boxed).unwrap(),
            DataType::Dynamic(DynamicKind::Float64)
        );
        assert_eq!(
            registry.to_primitive_array(&BoxedArray::from(vec![None, Some(2.5f64)])),
            PrimitiveArray::Float64(vec![0.0, 2.5])
        );
    }
}
