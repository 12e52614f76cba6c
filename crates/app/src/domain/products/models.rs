//! Product Models

use crate::domain::products::records::{Price, ProductId, ProductRecord, StockRecord};

/// A product merged with its stock count
#[derive(Debug, Clone, PartialEq)]
pub struct StockedProduct {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub count: u64,
}

impl StockedProduct {
    /// Merge a product with its stock record. A missing stock record means zero stock.
    #[must_use]
    pub fn from_records(product: ProductRecord, stock: Option<&StockRecord>) -> Self {
        Self {
            id: product.id,
            title: product.title,
            description: product.description,
            price: product.price,
            count: stock.map_or(0, |stock| stock.count),
        }
    }

    /// Join every product with the stock record sharing its id.
    #[must_use]
    pub fn join(products: Vec<ProductRecord>, stocks: &[StockRecord]) -> Vec<Self> {
        products
            .into_iter()
            .map(|product| {
                let stock = stocks.iter().find(|stock| stock.product_id == product.id);

                Self::from_records(product, stock)
            })
            .collect()
    }
}
