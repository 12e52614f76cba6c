//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        models::StockedProduct,
        records::{ProductId, ProductRecord, StockRecord},
    },
    store::{CatalogStore, Record},
};

/// How an empty catalog is reported by [`ProductsService::list_products`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyCatalogPolicy {
    /// Report an empty catalog as [`ProductsServiceError::EmptyCatalog`].
    #[default]
    NotFound,

    /// Report an empty catalog as an empty list.
    EmptyList,
}

#[derive(Clone)]
pub struct CatalogProductsService {
    store: Arc<dyn CatalogStore>,
    empty_catalog: EmptyCatalogPolicy,
}

impl CatalogProductsService {
    #[must_use]
    pub fn new(store: Arc<dyn CatalogStore>, empty_catalog: EmptyCatalogPolicy) -> Self {
        Self {
            store,
            empty_catalog,
        }
    }

    fn check_empty_catalog(&self, products: &[ProductRecord]) -> Result<(), ProductsServiceError> {
        if products.is_empty() && self.empty_catalog == EmptyCatalogPolicy::NotFound {
            return Err(ProductsServiceError::EmptyCatalog);
        }

        Ok(())
    }
}

#[async_trait]
impl ProductsService for CatalogProductsService {
    async fn list_products(&self) -> Result<Vec<StockedProduct>, ProductsServiceError> {
        let products = self.store.scan_products().await?;

        self.check_empty_catalog(&products)?;

        let stocks = self.store.scan_stocks().await?;

        debug!(
            products = products.len(),
            stocks = stocks.len(),
            "joining products with stock"
        );

        Ok(StockedProduct::join(products, &stocks))
    }

    async fn get_product(&self, product: String) -> Result<StockedProduct, ProductsServiceError> {
        if product.is_empty() {
            return Err(ProductsServiceError::MissingId);
        }

        let id = ProductId::from(product);

        let record = self
            .store
            .get_product(&id)
            .await?
            .ok_or_else(|| ProductsServiceError::NotFound(id.clone()))?;

        let stock = self.store.get_stock(&id).await?;

        Ok(StockedProduct::from_records(record, stock.as_ref()))
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<StockedProduct, ProductsServiceError> {
        let id = ProductId::new();

        let record = ProductRecord {
            id: id.clone(),
            title: product.title,
            description: product.description,
            price: product.price,
        };

        let stock = StockRecord {
            product_id: id,
            count: product.count,
        };

        self.store
            .transact_write(vec![
                Record::Product(record.clone()),
                Record::Stock(stock.clone()),
            ])
            .await?;

        info!(product = %record.id, count = stock.count, "product created");

        Ok(StockedProduct::from_records(record, Some(&stock)))
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, each merged with its stock count.
    async fn list_products(&self) -> Result<Vec<StockedProduct>, ProductsServiceError>;

    /// Retrieve a single product by its raw identifier.
    async fn get_product(&self, product: String) -> Result<StockedProduct, ProductsServiceError>;

    /// Creates a product and its stock record in one atomic write.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<StockedProduct, ProductsServiceError>;
}
