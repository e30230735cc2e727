//! Integration tests for chronograph-types
//!
//! These tests exercise the catalog, standardization and dynamic resolution
//! together, the way the attribute storage layer uses them when declaring a
//! column.

use std::collections::HashSet;

use chronograph_types::*;

#[test]
fn test_standardize_idempotent_over_catalog() {
    let catalog = Catalog::new();
    for ty in catalog.iter() {
        let once = standardize(ty);
        assert_eq!(standardize(&once), once, "{ty}");
        assert!(catalog.is_supported(&once), "{ty} standardized to {once}");
    }
}

#[test]
fn test_dynamic_resolution_is_bijective() {
    let catalog = Catalog::new();

    let scalars: Vec<DataType> = catalog.scalar_types().cloned().collect();
    assert_eq!(scalars.len(), 9);

    let resolved: Vec<DataType> = scalars
        .iter()
        .map(|ty| dynamic_type_of(ty).unwrap())
        .collect();
    let distinct: HashSet<&DataType> = resolved.iter().collect();
    assert_eq!(distinct.len(), 9, "two scalars share a time-indexed set");

    let dynamic: HashSet<&DataType> = catalog.dynamic_types().collect();
    assert_eq!(distinct, dynamic, "resolution does not cover every set");

    for (scalar, set) in scalars.iter().zip(&resolved) {
        assert_eq!(set.element_type().as_ref(), Some(scalar));
    }
}

#[test]
fn test_dynamic_resolution_rejects_arrays_and_sets() {
    let catalog = Catalog::new();
    for ty in catalog.iter().filter(|t| t.is_array() || t.is_dynamic()) {
        let err = dynamic_type_of(ty).unwrap_err();
        assert!(err.is_unsupported_type(), "{ty} resolved unexpectedly");
    }
}

#[test]
fn test_every_boxed_spelling_resolves() {
    for kind in PrimitiveKind::ALL {
        assert_eq!(
            dynamic_type_of(&DataType::Boxed(kind)).unwrap(),
            DataType::Dynamic(kind.dynamic_kind())
        );
    }
}

#[test]
fn test_is_supported_is_total() {
    let catalog = Catalog::new();
    let foreign = [
        DataType::BigInteger,
        DataType::array(DataType::array(DataType::String)),
        DataType::array(DataType::Dynamic(DynamicKind::Float64)),
        DataType::array(DataType::BigInteger),
    ];
    for ty in &foreign {
        assert!(!catalog.is_supported(ty), "{ty}");
    }
}

#[test]
fn test_declare_column_from_type_name() {
    let catalog = Catalog::new();

    let declared: DataType = "Boxed<Int64>".parse().unwrap();
    assert!(catalog.is_supported(&declared));
    assert_eq!(standardize(&declared), "long".parse::<DataType>().unwrap());
    assert_eq!(
        dynamic_type_of(&declared).unwrap().to_string(),
        "TimestampSet<Int64>"
    );

    assert!("Decimal".parse::<DataType>().is_err());
}

#[test]
fn test_standardize_value_boxed_ints() {
    let boxed = Value::BoxedArray(BoxedArray::Int32(vec![Some(1), None, Some(3)]));
    let standardized = standardize_value(boxed.clone());

    assert_eq!(
        standardized,
        Value::PrimitiveArray(PrimitiveArray::Int32(vec![1, 0, 3]))
    );
    assert_eq!(standardized.data_type(), standardize(&boxed.data_type()));
}
