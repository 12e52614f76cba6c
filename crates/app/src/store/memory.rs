//! In-memory store.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{
    domain::products::records::{ProductId, ProductRecord, StockRecord},
    store::{CatalogStore, Collection, Record, StoreError},
};

/// In-memory implementation of [`CatalogStore`].
///
/// Scans return records in insertion order. Transactions are applied to a
/// staged copy that replaces the live collections only when every write
/// succeeds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<Collections>,
}

#[derive(Debug, Clone, Default)]
struct Collections {
    products: Vec<ProductRecord>,
    stocks: Vec<StockRecord>,
    failing: HashSet<Collection>,
}

impl Collections {
    fn contains(&self, collection: Collection, key: &ProductId) -> bool {
        match collection {
            Collection::Products => self.products.iter().any(|p| &p.id == key),
            Collection::Stocks => self.stocks.iter().any(|s| &s.product_id == key),
        }
    }

    fn upsert(&mut self, record: Record) -> Result<(), StoreError> {
        let collection = record.collection();

        if self.failing.contains(&collection) {
            return Err(StoreError::Unavailable(collection));
        }

        match record {
            Record::Product(product) => {
                match self.products.iter_mut().find(|p| p.id == product.id) {
                    Some(existing) => *existing = product,
                    None => self.products.push(product),
                }
            }
            Record::Stock(stock) => {
                match self
                    .stocks
                    .iter_mut()
                    .find(|s| s.product_id == stock.product_id)
                {
                    Some(existing) => *existing = stock,
                    None => self.stocks.push(stock),
                }
            }
        }

        Ok(())
    }

    fn insert(&mut self, record: Record) -> Result<(), StoreError> {
        let collection = record.collection();

        if self.contains(collection, record.key()) {
            return Err(StoreError::ConditionFailed {
                collection,
                key: record.key().clone(),
            });
        }

        self.upsert(record)
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with records.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut collections = Collections::default();

        for record in records {
            match record {
                Record::Product(product) => collections.products.push(product),
                Record::Stock(stock) => collections.stocks.push(stock),
            }
        }

        Self {
            state: RwLock::new(collections),
        }
    }

    /// Make every subsequent write to `collection` fail.
    pub async fn fail_writes_to(&self, collection: Collection) {
        self.state.write().await.failing.insert(collection);
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn get_product(&self, id: &ProductId) -> Result<Option<ProductRecord>, StoreError> {
        let state = self.state.read().await;

        Ok(state.products.iter().find(|p| &p.id == id).cloned())
    }

    async fn get_stock(&self, id: &ProductId) -> Result<Option<StockRecord>, StoreError> {
        let state = self.state.read().await;

        Ok(state.stocks.iter().find(|s| &s.product_id == id).cloned())
    }

    async fn scan_products(&self) -> Result<Vec<ProductRecord>, StoreError> {
        Ok(self.state.read().await.products.clone())
    }

    async fn scan_stocks(&self) -> Result<Vec<StockRecord>, StoreError> {
        Ok(self.state.read().await.stocks.clone())
    }

    async fn put(&self, record: Record) -> Result<(), StoreError> {
        self.state.write().await.upsert(record)
    }

    async fn transact_write(&self, records: Vec<Record>) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let mut staged = state.clone();
        let writes = records.len();

        for record in records {
            staged
                .insert(record)
                .map_err(|error| StoreError::TransactionCanceled(error.to_string()))?;
        }

        *state = staged;

        debug!(writes, "committed in-memory transaction");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::products::records::Price;

    use super::*;

    fn product(id: &str) -> Record {
        Record::Product(ProductRecord {
            id: id.into(),
            title: format!("Product {id}"),
            description: String::new(),
            price: Price::from(10),
        })
    }

    fn stock(id: &str, count: u64) -> Record {
        Record::Stock(StockRecord {
            product_id: id.into(),
            count,
        })
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_key() -> TestResult {
        let store = MemoryStore::new();

        assert!(store.get_product(&"missing".into()).await?.is_none());
        assert!(store.get_stock(&"missing".into()).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn put_replaces_existing_records() -> TestResult {
        let store = MemoryStore::with_records([stock("a", 1)]);

        store.put(stock("a", 9)).await?;

        let stocks = store.scan_stocks().await?;

        assert_eq!(stocks.len(), 1, "expected a single stock record");
        assert_eq!(store.get_stock(&"a".into()).await?.map(|s| s.count), Some(9));

        Ok(())
    }

    #[tokio::test]
    async fn scans_keep_insertion_order() -> TestResult {
        let store = MemoryStore::new();

        for id in ["c", "a", "b"] {
            store.put(product(id)).await?;
        }

        let ids: Vec<String> = store
            .scan_products()
            .await?
            .into_iter()
            .map(|p| p.id.into_string())
            .collect();

        assert_eq!(ids, vec!["c", "a", "b"]);

        Ok(())
    }

    #[tokio::test]
    async fn transaction_applies_every_write() -> TestResult {
        let store = MemoryStore::new();

        store.transact_write(vec![product("a"), stock("a", 2)]).await?;

        assert!(store.get_product(&"a".into()).await?.is_some());
        assert_eq!(store.get_stock(&"a".into()).await?.map(|s| s.count), Some(2));

        Ok(())
    }

    #[tokio::test]
    async fn transaction_with_existing_key_applies_nothing() -> TestResult {
        let store = MemoryStore::with_records([stock("a", 5)]);

        let result = store.transact_write(vec![product("a"), stock("a", 1)]).await;

        assert!(
            matches!(result, Err(StoreError::TransactionCanceled(_))),
            "expected TransactionCanceled, got {result:?}"
        );
        assert!(store.get_product(&"a".into()).await?.is_none());
        assert_eq!(store.get_stock(&"a".into()).await?.map(|s| s.count), Some(5));

        Ok(())
    }

    #[tokio::test]
    async fn failing_collection_rolls_back_the_transaction() -> TestResult {
        let store = MemoryStore::new();

        store.fail_writes_to(Collection::Stocks).await;

        let result = store.transact_write(vec![product("a"), stock("a", 1)]).await;

        assert!(result.is_err(), "expected the transaction to fail");
        assert!(store.scan_products().await?.is_empty());

        let put = store.put(stock("b", 1)).await;

        assert!(
            matches!(put, Err(StoreError::Unavailable(Collection::Stocks))),
            "expected Unavailable, got {put:?}"
        );

        Ok(())
    }
}
