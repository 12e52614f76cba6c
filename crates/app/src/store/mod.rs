//! Key-value store capability backing the catalog.
//!
//! Two collections, products and stocks, each keyed by product id. Backends
//! provide get-by-key, scan-all, single put and an all-or-nothing multi-item
//! write.

use std::fmt::{Display, Formatter, Result as FmtResult};

use async_trait::async_trait;
use mockall::automock;

use crate::domain::products::records::{ProductId, ProductRecord, StockRecord};

mod dynamo;
mod errors;
mod items;
mod memory;
mod settings;

pub use dynamo::DynamoStore;
pub use errors::StoreError;
pub use memory::MemoryStore;
pub use settings::StoreSettings;

/// A named set of key-addressable records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Stocks,
}

impl Collection {
    /// Name of the attribute holding the record key.
    #[must_use]
    pub const fn key_attribute(self) -> &'static str {
        match self {
            Self::Products => "id",
            Self::Stocks => "product_id",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Products => f.write_str("products"),
            Self::Stocks => f.write_str("stocks"),
        }
    }
}

/// A record bound for one of the collections.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Product(ProductRecord),
    Stock(StockRecord),
}

impl Record {
    #[must_use]
    pub const fn collection(&self) -> Collection {
        match self {
            Self::Product(_) => Collection::Products,
            Self::Stock(_) => Collection::Stocks,
        }
    }

    #[must_use]
    pub const fn key(&self) -> &ProductId {
        match self {
            Self::Product(product) => &product.id,
            Self::Stock(stock) => &stock.product_id,
        }
    }
}

#[automock]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch a product by id.
    async fn get_product(&self, id: &ProductId) -> Result<Option<ProductRecord>, StoreError>;

    /// Fetch the stock record for a product id.
    async fn get_stock(&self, id: &ProductId) -> Result<Option<StockRecord>, StoreError>;

    /// Read every product. Order is backend-defined.
    async fn scan_products(&self) -> Result<Vec<ProductRecord>, StoreError>;

    /// Read every stock record. Order is backend-defined.
    async fn scan_stocks(&self) -> Result<Vec<StockRecord>, StoreError>;

    /// Insert or replace a single record.
    async fn put(&self, record: Record) -> Result<(), StoreError>;

    /// Insert all records or none of them. Each insert fails if its key is
    /// already present.
    async fn transact_write(&self, records: Vec<Record>) -> Result<(), StoreError>;
}
