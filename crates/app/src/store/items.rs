//! DynamoDB item mapping for catalog records.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use crate::{
    domain::products::records::{Price, ProductRecord, StockRecord},
    store::{Collection, Record, StoreError},
};

pub(crate) type Item = HashMap<String, AttributeValue>;

pub(crate) fn record_item(record: &Record) -> Item {
    match record {
        Record::Product(product) => product_item(product),
        Record::Stock(stock) => stock_item(stock),
    }
}

fn product_item(product: &ProductRecord) -> Item {
    HashMap::from([
        ("id".to_string(), AttributeValue::S(product.id.to_string())),
        ("title".to_string(), AttributeValue::S(product.title.clone())),
        (
            "description".to_string(),
            AttributeValue::S(product.description.clone()),
        ),
        ("price".to_string(), AttributeValue::N(product.price.to_string())),
    ])
}

fn stock_item(stock: &StockRecord) -> Item {
    HashMap::from([
        (
            "product_id".to_string(),
            AttributeValue::S(stock.product_id.to_string()),
        ),
        ("count".to_string(), AttributeValue::N(stock.count.to_string())),
    ])
}

/// Decode a record from a stored item.
pub(crate) trait FromItem: Sized {
    const COLLECTION: Collection;

    fn from_item(item: &Item) -> Result<Self, StoreError>;
}

impl FromItem for ProductRecord {
    const COLLECTION: Collection = Collection::Products;

    fn from_item(item: &Item) -> Result<Self, StoreError> {
        let description = match item.get("description") {
            None | Some(AttributeValue::Null(_)) => String::new(),
            Some(_) => string_attr::<Self>(item, "description")?,
        };

        let price = number_attr::<Self>(item, "price")?
            .parse::<f64>()
            .ok()
            .and_then(Price::new)
            .ok_or_else(|| malformed::<Self>("price"))?;

        Ok(Self {
            id: string_attr::<Self>(item, "id")?.into(),
            title: string_attr::<Self>(item, "title")?,
            description,
            price,
        })
    }
}

impl FromItem for StockRecord {
    const COLLECTION: Collection = Collection::Stocks;

    fn from_item(item: &Item) -> Result<Self, StoreError> {
        let count = number_attr::<Self>(item, "count")?
            .parse::<u64>()
            .map_err(|_ignored| malformed::<Self>("count"))?;

        Ok(Self {
            product_id: string_attr::<Self>(item, "product_id")?.into(),
            count,
        })
    }
}

fn string_attr<T: FromItem>(item: &Item, attribute: &'static str) -> Result<String, StoreError> {
    match item.get(attribute) {
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        _ => Err(malformed::<T>(attribute)),
    }
}

fn number_attr<'a, T: FromItem>(
    item: &'a Item,
    attribute: &'static str,
) -> Result<&'a str, StoreError> {
    match item.get(attribute) {
        Some(AttributeValue::N(value)) => Ok(value),
        _ => Err(malformed::<T>(attribute)),
    }
}

fn malformed<T: FromItem>(attribute: &'static str) -> StoreError {
    StoreError::MalformedItem {
        collection: T::COLLECTION,
        attribute,
    }
}
