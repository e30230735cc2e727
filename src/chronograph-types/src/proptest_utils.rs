//! Property-based testing utilities for chronograph-types.
//!
//! This module provides strategies for type descriptors and values
//! to enable property-based testing with proptest.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::catalog::Catalog;
    use crate::dynamic::dynamic_type_of;
    use crate::standardize::{standardize, standardize_value};
    use crate::types::{BoxedArray, DataType, DynamicKind, PrimitiveArray, PrimitiveKind, Value};

    // =========================================================================
    // Strategies for DataType
    // =========================================================================

    fn arb_primitive_kind() -> impl Strategy<Value = PrimitiveKind> {
        prop::sample::select(PrimitiveKind::ALL.to_vec())
    }

    fn arb_dynamic_kind() -> impl Strategy<Value = DynamicKind> {
        prop::sample::select(DynamicKind::ALL.to_vec())
    }

    /// Strategy for arbitrary descriptors, registered or not, with arrays
    /// nested up to three levels.
    fn arb_data_type() -> impl Strategy<Value = DataType> {
        let leaf = prop_oneof![
            arb_primitive_kind().prop_map(DataType::Primitive),
            arb_primitive_kind().prop_map(DataType::Boxed),
            Just(DataType::String),
            Just(DataType::BigInteger),
            Just(DataType::BigDecimal),
            arb_dynamic_kind().prop_map(DataType::Dynamic),
        ];
        leaf.prop_recursive(3, 8, 1, |inner| inner.prop_map(DataType::array))
    }

    /// Independent statement of catalog membership.
    fn registered(data_type: &DataType) -> bool {
        match data_type {
            DataType::Primitive(_) | DataType::Boxed(_) | DataType::String => true,
            DataType::Dynamic(_) => true,
            DataType::BigInteger | DataType::BigDecimal => false,
            DataType::Array(element) => matches!(
                element.as_ref(),
                DataType::Primitive(_) | DataType::Boxed(_) | DataType::String
            ),
        }
    }

    // =========================================================================
    // Strategies for Value
    // =========================================================================

    /// Strategy for boxed arrays. Floats are integer-valued so that equality
    /// comparisons stay meaningful.
    fn arb_boxed_array() -> impl Strategy<Value = BoxedArray> {
        let len = 0..16;
        prop_oneof![
            prop::collection::vec(any::<Option<bool>>(), len.clone()).prop_map(BoxedArray::from),
            prop::collection::vec(any::<Option<i8>>(), len.clone()).prop_map(BoxedArray::from),
            prop::collection::vec(any::<Option<i16>>(), len.clone()).prop_map(BoxedArray::from),
            prop::collection::vec(any::<Option<i32>>(), len.clone()).prop_map(BoxedArray::from),
            prop::collection::vec(any::<Option<i64>>(), len.clone()).prop_map(BoxedArray::from),
            prop::collection::vec(any::<Option<i16>>(), len.clone()).prop_map(|v| {
                BoxedArray::Float32(v.into_iter().map(|e| e.map(f32::from)).collect())
            }),
            prop::collection::vec(any::<Option<i32>>(), len.clone()).prop_map(|v| {
                BoxedArray::Float64(v.into_iter().map(|e| e.map(f64::from)).collect())
            }),
            prop::collection::vec(any::<Option<char>>(), len).prop_map(BoxedArray::from),
        ]
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<bool>().prop_map(Value::Bool),
            any::<i8>().prop_map(Value::Int8),
            any::<i32>().prop_map(Value::Int32),
            any::<i64>().prop_map(Value::Int64),
            any::<i32>().prop_map(|i| Value::Float64(f64::from(i))),
            any::<char>().prop_map(Value::Char),
            "[a-zA-Z0-9]{0,20}".prop_map(Value::String),
            prop::collection::vec(any::<i32>(), 0..8)
                .prop_map(|v| Value::PrimitiveArray(PrimitiveArray::Int32(v))),
            arb_boxed_array().prop_map(Value::BoxedArray),
            prop::collection::vec(proptest::option::of("[a-z]{0,8}"), 0..8)
                .prop_map(Value::StringArray),
        ]
    }

    // =========================================================================
    // Standardization Properties
    // =========================================================================

    proptest! {
        /// Standardizing twice is the same as standardizing once.
        #[test]
        fn standardize_is_idempotent(dt in arb_data_type()) {
            let once = standardize(&dt);
            prop_assert_eq!(standardize(&once), once);
        }

        /// Standardization never leaves the catalog.
        #[test]
        fn standardize_preserves_support(dt in arb_data_type()) {
            let catalog = Catalog::new();
            if catalog.is_supported(&dt) {
                prop_assert!(catalog.is_supported(&standardize(&dt)));
            }
        }

        /// Catalog membership is total and agrees with the type structure.
        #[test]
        fn catalog_membership_matches_structure(dt in arb_data_type()) {
            let catalog = Catalog::new();
            prop_assert_eq!(catalog.is_supported(&dt), registered(&dt));
        }

        /// Value standardization follows type standardization.
        #[test]
        fn standardize_value_agrees_with_type(value in arb_value()) {
            let expected = standardize(&value.data_type());
            prop_assert_eq!(standardize_value(value).data_type(), expected);
        }
    }

    // =========================================================================
    // Array Conversion Properties
    // =========================================================================

    proptest! {
        /// Conversion keeps length and every non-null element in place.
        #[test]
        fn to_primitive_preserves_elements(
            source in prop::collection::vec(any::<Option<i64>>(), 0..32)
        ) {
            let converted = BoxedArray::from(source.clone()).to_primitive();
            let PrimitiveArray::Int64(values) = converted else {
                return Err(TestCaseError::fail("expected Int64 array"));
            };
            prop_assert_eq!(values.len(), source.len());
            for (value, element) in values.iter().zip(&source) {
                prop_assert_eq!(*value, element.unwrap_or(0));
            }
        }

        /// Kind and length survive conversion for every element kind.
        #[test]
        fn to_primitive_keeps_shape(array in arb_boxed_array()) {
            let converted = array.to_primitive();
            prop_assert_eq!(converted.kind(), array.kind());
            prop_assert_eq!(converted.len(), array.len());
        }
    }

    // =========================================================================
    // Dynamic Resolution Properties
    // =========================================================================

    proptest! {
        /// Resolution succeeds exactly for the canonical scalars and their
        /// boxed spellings.
        #[test]
        fn dynamic_resolution_domain(dt in arb_data_type()) {
            let resolvable = matches!(
                standardize(&dt),
                DataType::Primitive(_) | DataType::String
            );
            match dynamic_type_of(&dt) {
                Ok(resolved) => {
                    prop_assert!(resolvable);
                    prop_assert!(resolved.is_dynamic());
                }
                Err(err) => {
                    prop_assert!(!resolvable);
                    prop_assert!(err.is_unsupported_type());
                }
            }
        }
    }
}
