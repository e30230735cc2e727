//! The fixed catalog of admissible attribute types.

use std::collections::HashSet;

use log::debug;

use crate::standardize::is_standardized;
use crate::types::{DataType, DynamicKind, PrimitiveKind};

/// Every type an attribute column may hold.
///
/// The contents are fixed: primitive and boxed scalars of each
/// [`PrimitiveKind`], text, the array form of each of those, and one
/// time-indexed set per [`DynamicKind`]. A catalog is built once and only
/// read afterwards, so it can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Registered types in registration order.
    ordered: Vec<DataType>,
    /// Membership index over `ordered`.
    members: HashSet<DataType>,
}

impl Catalog {
    /// Number of registered types.
    pub const SIZE: usize = 2 * (2 * PrimitiveKind::ALL.len() + 1) + DynamicKind::ALL.len();

    /// Build the catalog.
    pub fn new() -> Self {
        let scalars: Vec<DataType> = PrimitiveKind::ALL
            .into_iter()
            .map(DataType::Primitive)
            .chain(PrimitiveKind::ALL.into_iter().map(DataType::Boxed))
            .chain(std::iter::once(DataType::String))
            .collect();

        let mut ordered = scalars.clone();
        ordered.extend(scalars.into_iter().map(DataType::array));
        ordered.extend(DynamicKind::ALL.into_iter().map(DataType::Dynamic));

        let members: HashSet<DataType> = ordered.iter().cloned().collect();
        debug!("Built type catalog with {} entries", members.len());

        Self { ordered, members }
    }

    /// Check whether a type is registered. Never fails.
    pub fn is_supported(&self, data_type: &DataType) -> bool {
        self.members.contains(data_type)
    }

    /// The full set of registered types.
    pub fn supported_types(&self) -> &HashSet<DataType> {
        &self.members
    }

    /// Iterate registered types: primitive scalars, boxed scalars, text,
    /// then their arrays in the same order, then time-indexed sets.
    pub fn iter(&self) -> impl Iterator<Item = &DataType> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Canonical scalar types, i.e. the ones with a time-indexed counterpart.
    pub fn scalar_types(&self) -> impl Iterator<Item = &DataType> {
        self.iter().filter(|t| t.is_scalar() && is_standardized(t))
    }

    /// Registered time-indexed set types.
    pub fn dynamic_types(&self) -> impl Iterator<Item = &DataType> {
        self.iter().filter(|t| t.is_dynamic())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
