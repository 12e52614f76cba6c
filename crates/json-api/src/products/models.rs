//! Product Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::{models::StockedProduct, records::Price};

/// Product with its stock count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Product identifier
    pub id: String,

    pub title: String,

    pub description: String,

    /// Non-negative price; whole values serialize without a fraction
    #[salvo(schema(value_type = f64))]
    pub price: Price,

    /// Units in stock
    pub count: u64,
}

impl From<StockedProduct> for ProductResponse {
    fn from(product: StockedProduct) -> Self {
        Self {
            id: product.id.into_string(),
            title: product.title,
            description: product.description,
            price: product.price,
            count: product.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::make_product;

    use super::*;

    #[test]
    fn serializes_flat_product_with_count() -> TestResult {
        let response = ProductResponse::from(make_product("p-1", 7));

        assert_eq!(
            serde_json::to_value(&response)?,
            json!({
                "id": "p-1",
                "title": "Laptop",
                "description": "High-performance laptop with SSD",
                "price": 999,
                "count": 7,
            })
        );

        Ok(())
    }
}
