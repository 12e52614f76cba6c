//! Store Settings

use clap::Args;

use crate::store::Collection;

/// Connection settings for the DynamoDB-backed store.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct StoreSettings {
    /// Products table name
    #[arg(long, env = "PRODUCTS_TABLE", default_value = "products")]
    pub products_table: String,

    /// Stocks table name
    #[arg(long, env = "STOCKS_TABLE", default_value = "stocks")]
    pub stocks_table: String,

    /// AWS region of the tables
    #[arg(long, env = "REGION", default_value = "us-east-1")]
    pub region: String,

    /// Override the DynamoDB endpoint (e.g. DynamoDB Local)
    #[arg(long = "dynamodb-endpoint", env = "DYNAMODB_ENDPOINT")]
    pub endpoint_url: Option<String>,
}

impl StoreSettings {
    #[must_use]
    pub fn table_name(&self, collection: Collection) -> &str {
        match collection {
            Collection::Products => &self.products_table,
            Collection::Stocks => &self.stocks_table,
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            products_table: "products".to_string(),
            stocks_table: "stocks".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: None,
        }
    }
}
