//! Embedded default catalog.
//!
//! The shipped assessment catalog is embedded in the binary via
//! `include_str!` and parsed once on first use. Hosts that want different
//! questions point `TRADE_COMPASS__CATALOG__PATH` at their own YAML file.

use once_cell::sync::Lazy;

use super::Catalog;

const DEFAULT_CATALOG_YAML: &str = include_str!("default_catalog.yaml");

static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_yaml_str(DEFAULT_CATALOG_YAML)
        .unwrap_or_else(|e| panic!("Embedded default catalog is invalid: {}", e))
});

/// Returns the shipped default catalog.
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}
