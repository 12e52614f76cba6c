//! Products service errors.

use thiserror::Error;

use crate::{domain::products::records::ProductId, store::StoreError};

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("Product ID is required")]
    MissingId,

    #[error("Product with ID {0} not found")]
    NotFound(ProductId),

    #[error("No products found")]
    EmptyCatalog,

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}
