//! Sample catalog seeding.
//!
//! Seeding is a peer writer: it puts products and stocks directly through the
//! store rather than going through the products service.

use rand::Rng;
use tracing::info;

use crate::{
    domain::products::records::{Price, ProductId, ProductRecord, StockRecord},
    store::{CatalogStore, Record, StoreError},
};

/// A product in the sample catalog.
#[derive(Debug, Clone, Copy)]
pub struct SampleProduct {
    pub title: &'static str,
    pub description: &'static str,
    pub price: u32,
}

pub const SAMPLE_CATALOG: [SampleProduct; 10] = [
    SampleProduct {
        title: "Laptop",
        description: "High-performance laptop with SSD",
        price: 999,
    },
    SampleProduct {
        title: "Smartphone",
        description: "Latest model with advanced camera",
        price: 699,
    },
    SampleProduct {
        title: "Headphones",
        description: "Noise-cancelling wireless headphones",
        price: 249,
    },
    SampleProduct {
        title: "Smartwatch",
        description: "Fitness tracking and notifications",
        price: 199,
    },
    SampleProduct {
        title: "Tablet",
        description: "10-inch display with long battery life",
        price: 349,
    },
    SampleProduct {
        title: "Camera",
        description: "Digital SLR with multiple lenses",
        price: 899,
    },
    SampleProduct {
        title: "Gaming Console",
        description: "Next-gen gaming experience",
        price: 499,
    },
    SampleProduct {
        title: "Bluetooth Speaker",
        description: "Portable with waterproof design",
        price: 89,
    },
    SampleProduct {
        title: "External Hard Drive",
        description: "2TB storage capacity",
        price: 129,
    },
    SampleProduct {
        title: "Wireless Mouse",
        description: "Ergonomic design with precision tracking",
        price: 39,
    },
];

/// Build records for the sample catalog with fresh ids and stock counts in `1..=100`.
pub fn sample_records<R: Rng + ?Sized>(rng: &mut R) -> Vec<(ProductRecord, StockRecord)> {
    SAMPLE_CATALOG
        .iter()
        .map(|sample| {
            let id = ProductId::new();

            let product = ProductRecord {
                id: id.clone(),
                title: sample.title.to_string(),
                description: sample.description.to_string(),
                price: Price::from(sample.price),
            };

            let stock = StockRecord {
                product_id: id,
                count: rng.gen_range(1..=100),
            };

            (product, stock)
        })
        .collect()
}

/// Write product/stock pairs with independent puts.
///
/// # Errors
///
/// Returns the first store error; pairs written before it stay written.
pub async fn seed_catalog(
    store: &dyn CatalogStore,
    records: Vec<(ProductRecord, StockRecord)>,
) -> Result<Vec<ProductId>, StoreError> {
    let mut seeded = Vec::with_capacity(records.len());

    for (product, stock) in records {
        let id = product.id.clone();
        let title = product.title.clone();

        store.put(Record::Product(product)).await?;
        store.put(Record::Stock(stock)).await?;

        info!(product = %id, %title, "seeded product");

        seeded.push(id);
    }

    Ok(seeded)
}
