//! Store Config

use clap::Args;

use catalog_app::{
    context::AppContext, domain::products::EmptyCatalogPolicy, store::StoreSettings,
};

/// Where catalog records live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum StoreBackend {
    /// Amazon DynamoDB, or a compatible endpoint.
    Dynamodb,

    /// Process-local memory. Records are lost on shutdown.
    Memory,
}

/// Catalog store settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Store backend (dynamodb, memory)
    #[arg(long = "store-backend", env = "STORE_BACKEND", value_enum, default_value_t = StoreBackend::Dynamodb)]
    pub backend: StoreBackend,

    /// Write the sample catalog into the store on startup
    #[arg(long, env = "SEED_SAMPLE_CATALOG", default_value_t = false)]
    pub seed_sample_catalog: bool,

    #[command(flatten)]
    pub settings: StoreSettings,
}

impl StoreConfig {
    /// Build the application context for the configured backend.
    pub async fn app_context(&self, empty_catalog: EmptyCatalogPolicy) -> AppContext {
        match self.backend {
            StoreBackend::Dynamodb => {
                AppContext::with_dynamodb(self.settings.clone(), empty_catalog).await
            }
            StoreBackend::Memory => AppContext::in_memory(empty_catalog),
        }
    }
}
