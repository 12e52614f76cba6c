//! Store errors.

use thiserror::Error;

use crate::{domain::products::records::ProductId, store::Collection};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dynamodb request failed: {0}")]
    Dynamo(#[source] Box<aws_sdk_dynamodb::Error>),

    #[error("transaction canceled: {0}")]
    TransactionCanceled(String),

    #[error("{collection} already contains key {key}")]
    ConditionFailed {
        collection: Collection,
        key: ProductId,
    },

    #[error("invalid dynamodb request: {0}")]
    Request(#[from] aws_sdk_dynamodb::error::BuildError),

    #[error("{collection} item has a missing or malformed `{attribute}` attribute")]
    MalformedItem {
        collection: Collection,
        attribute: &'static str,
    },

    #[error("{0} collection is unavailable")]
    Unavailable(Collection),
}

impl From<aws_sdk_dynamodb::Error> for StoreError {
    fn from(error: aws_sdk_dynamodb::Error) -> Self {
        match error {
            aws_sdk_dynamodb::Error::TransactionCanceledException(source) => {
                Self::TransactionCanceled(source.to_string())
            }
            error => Self::Dynamo(Box::new(error)),
        }
    }
}
