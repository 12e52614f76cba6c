//! Create-product request parsing.
//!
//! Raw request bodies are parsed into [`NewProduct`] before any store access.
//! Checks run in a fixed order and the first failure wins.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::domain::products::{data::NewProduct, records::Price};

/// Fields a create request must carry.
pub const REQUIRED_FIELDS: [&str; 2] = ["title", "price"];

/// Type requirements reported with [`ValidationError::InvalidDataTypes`].
pub const TYPE_REQUIREMENTS: &str = "title must be a string, price must be a non-negative number, \
     description must be a string, count must be a non-negative integer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Request body is required")]
    BodyRequired,

    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("Invalid data types")]
    InvalidDataTypes,
}

/// Parse a create-product request body.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the body is absent or unparseable, a
/// required field is missing, or a field has the wrong type.
pub fn parse_new_product(body: &[u8]) -> Result<NewProduct, ValidationError> {
    let value: Value = serde_json::from_slice(body).map_err(|error| {
        debug!("create product body is not valid JSON: {error}");

        ValidationError::BodyRequired
    })?;

    if !is_truthy(&value) {
        return Err(ValidationError::BodyRequired);
    }

    let fields = match value {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };

    let title = fields.get("title").filter(|title| is_truthy(title));
    let price = fields.get("price").filter(|price| !price.is_null());

    let (Some(title), Some(price)) = (title, price) else {
        return Err(ValidationError::MissingRequiredFields);
    };

    let (Some(title), Some(price)) = (title.as_str(), price.as_f64().and_then(Price::new)) else {
        return Err(ValidationError::InvalidDataTypes);
    };

    let description = match fields.get("description") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(description)) => description.clone(),
        Some(_) => return Err(ValidationError::InvalidDataTypes),
    };

    let count = match fields.get("count") {
        None | Some(Value::Null) => 0,
        Some(count) => count.as_u64().ok_or(ValidationError::InvalidDataTypes)?,
    };

    Ok(NewProduct {
        title: title.to_owned(),
        description,
        price,
        count,
    })
}

/// Presence test for the body and `title`: empty strings, zero, `false` and `null` count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
