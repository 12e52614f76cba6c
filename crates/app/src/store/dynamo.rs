//! DynamoDB store.
//!
//! Table schema:
//! - products: hash key `id` (S), attributes `title` (S), `description` (S), `price` (N)
//! - stocks: hash key `product_id` (S), attribute `count` (N)
//!
//! Item mapping lives in `items`.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::{
    Client,
    types::{AttributeValue, Put, TransactWriteItem},
};
use tracing::{debug, info};

use crate::{
    domain::products::records::{ProductId, ProductRecord, StockRecord},
    store::{
        CatalogStore, Collection, Record, StoreError, StoreSettings,
        items::{FromItem, record_item},
    },
};

/// DynamoDB implementation of [`CatalogStore`].
#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: Client,
    settings: StoreSettings,
}

impl DynamoStore {
    /// Build a client from the default AWS credential chain and the given settings.
    pub async fn connect(settings: StoreSettings) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .load()
            .await;

        let client = if let Some(endpoint) = settings.endpoint_url.as_deref() {
            let dynamo_config = aws_sdk_dynamodb::config::Builder::from(&config)
                .endpoint_url(endpoint)
                .build();

            Client::from_conf(dynamo_config)
        } else {
            Client::new(&config)
        };

        info!(
            products = %settings.products_table,
            stocks = %settings.stocks_table,
            region = %settings.region,
            "connected to DynamoDB"
        );

        Self::from_client(client, settings)
    }

    #[must_use]
    pub fn from_client(client: Client, settings: StoreSettings) -> Self {
        Self { client, settings }
    }

    fn table(&self, collection: Collection) -> &str {
        self.settings.table_name(collection)
    }

    async fn get_item<T: FromItem>(&self, key: &ProductId) -> Result<Option<T>, StoreError> {
        let collection = T::COLLECTION;

        let output = self
            .client
            .get_item()
            .table_name(self.table(collection))
            .key(
                collection.key_attribute(),
                AttributeValue::S(key.to_string()),
            )
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        let Some(item) = output.item else {
            debug!(%collection, %key, "item not found");

            return Ok(None);
        };

        Ok(Some(T::from_item(&item)?))
    }

    async fn scan_items<T: FromItem>(&self) -> Result<Vec<T>, StoreError> {
        let collection = T::COLLECTION;
        let mut records = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(self.table(collection))
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await
                .map_err(aws_sdk_dynamodb::Error::from)?;

            for item in output.items.unwrap_or_default() {
                records.push(T::from_item(&item)?);
            }

            exclusive_start_key = output.last_evaluated_key;

            if exclusive_start_key.is_none() {
                break;
            }
        }

        debug!(%collection, items = records.len(), "scanned table");

        Ok(records)
    }

    fn conditional_put(&self, record: &Record) -> Result<TransactWriteItem, StoreError> {
        let collection = record.collection();

        let put = Put::builder()
            .table_name(self.table(collection))
            .set_item(Some(record_item(record)))
            .condition_expression("attribute_not_exists(#key)")
            .expression_attribute_names("#key", collection.key_attribute())
            .build()?;

        Ok(TransactWriteItem::builder().put(put).build())
    }
}

#[async_trait]
impl CatalogStore for DynamoStore {
    #[tracing::instrument(skip(self))]
    async fn get_product(&self, id: &ProductId) -> Result<Option<ProductRecord>, StoreError> {
        self.get_item(id).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_stock(&self, id: &ProductId) -> Result<Option<StockRecord>, StoreError> {
        self.get_item(id).await
    }

    #[tracing::instrument(skip(self))]
    async fn scan_products(&self) -> Result<Vec<ProductRecord>, StoreError> {
        self.scan_items().await
    }

    #[tracing::instrument(skip(self))]
    async fn scan_stocks(&self) -> Result<Vec<StockRecord>, StoreError> {
        self.scan_items().await
    }

    #[tracing::instrument(skip(self))]
    async fn put(&self, record: Record) -> Result<(), StoreError> {
        let collection = record.collection();

        self.client
            .put_item()
            .table_name(self.table(collection))
            .set_item(Some(record_item(&record)))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        debug!(%collection, key = %record.key(), "stored item");

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn transact_write(&self, records: Vec<Record>) -> Result<(), StoreError> {
        let items = records
            .iter()
            .map(|record| self.conditional_put(record))
            .collect::<Result<Vec<_>, _>>()?;

        self.client
            .transact_write_items()
            .set_transact_items(Some(items))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;

        debug!(items = records.len(), "committed transaction");

        Ok(())
    }
}
