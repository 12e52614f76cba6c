//! Test context for service-level tests.

use std::sync::Arc;

use crate::{
    domain::products::{CatalogProductsService, EmptyCatalogPolicy},
    store::MemoryStore,
};

/// Products service wired to a fresh in-memory store.
pub(crate) struct TestContext {
    pub store: Arc<MemoryStore>,
    pub products: CatalogProductsService,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_policy(EmptyCatalogPolicy::NotFound)
    }

    pub fn with_policy(empty_catalog: EmptyCatalogPolicy) -> Self {
        let store = Arc::new(MemoryStore::new());

        Self {
            products: CatalogProductsService::new(store.clone(), empty_catalog),
            store,
        }
    }
}
