//! Catalog Config

use clap::Args;

use catalog_app::domain::products::EmptyCatalogPolicy;

/// Response to a product listing when the catalog holds no products.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum EmptyCatalog {
    /// Respond 404 with "No products found".
    NotFound,

    /// Respond 200 with an empty array.
    EmptyList,
}

impl From<EmptyCatalog> for EmptyCatalogPolicy {
    fn from(empty_catalog: EmptyCatalog) -> Self {
        match empty_catalog {
            EmptyCatalog::NotFound => Self::NotFound,
            EmptyCatalog::EmptyList => Self::EmptyList,
        }
    }
}

/// Catalog response settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// Empty catalog response (not-found, empty-list)
    #[arg(long, env = "EMPTY_CATALOG", value_enum, default_value_t = EmptyCatalog::NotFound)]
    pub empty_catalog: EmptyCatalog,
}

impl CatalogConfig {
    #[must_use]
    pub fn policy(&self) -> EmptyCatalogPolicy {
        self.empty_catalog.into()
    }
}
