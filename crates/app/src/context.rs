//! App Context

use std::sync::Arc;

use crate::{
    domain::products::{CatalogProductsService, EmptyCatalogPolicy, ProductsService},
    seed,
    store::{CatalogStore, DynamoStore, MemoryStore, StoreError, StoreSettings},
};

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub store: Arc<dyn CatalogStore>,
}

impl AppContext {
    /// Build application context backed by DynamoDB.
    pub async fn with_dynamodb(settings: StoreSettings, empty_catalog: EmptyCatalogPolicy) -> Self {
        let store = DynamoStore::connect(settings).await;

        Self::from_store(Arc::new(store), empty_catalog)
    }

    /// Build application context backed by an empty in-memory store.
    #[must_use]
    pub fn in_memory(empty_catalog: EmptyCatalogPolicy) -> Self {
        Self::from_store(Arc::new(MemoryStore::new()), empty_catalog)
    }

    #[must_use]
    pub fn from_store(store: Arc<dyn CatalogStore>, empty_catalog: EmptyCatalogPolicy) -> Self {
        Self {
            products: Arc::new(CatalogProductsService::new(store.clone(), empty_catalog)),
            store,
        }
    }

    /// Write the sample catalog into the store.
    ///
    /// # Errors
    ///
    /// Returns an error when a store write fails.
    pub async fn seed_sample_catalog(&self) -> Result<usize, StoreError> {
        let records = seed::sample_records(&mut rand::thread_rng());

        let seeded = seed::seed_catalog(self.store.as_ref(), records).await?;

        Ok(seeded.len())
    }
}
