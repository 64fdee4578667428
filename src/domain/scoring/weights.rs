//! Category weight lookup built from the catalog.

use std::collections::BTreeMap;

use crate::domain::catalog::{Catalog, Category};

/// Maps category names to their scoring weights.
///
/// Lookup is case-insensitive on the trimmed name; names the table does not
/// carry fall back to [`Category::DEFAULT_WEIGHT`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    weights: BTreeMap<String, f64>,
}

impl WeightTable {
    /// Builds the table from a catalog's per-category weights.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::from_entries(
            catalog
                .categories()
                .iter()
                .map(|c| (c.name().to_string(), c.weight())),
        )
    }

    /// Builds the table from explicit name/weight pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, f64)>) -> Self {
        let weights = entries
            .into_iter()
            .map(|(name, weight)| (Self::key(&name), weight))
            .collect();
        Self { weights }
    }

    /// Returns the weight recorded for a category name.
    pub fn weight_for(&self, category_name: &str) -> f64 {
        self.weights
            .get(&Self::key(category_name))
            .copied()
            .unwrap_or(Category::DEFAULT_WEIGHT)
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }
}
