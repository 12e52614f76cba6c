//! Product Errors

use tracing::error;

use catalog_app::domain::products::{
    ProductsServiceError,
    validation::{REQUIRED_FIELDS, TYPE_REQUIREMENTS, ValidationError},
};

use crate::errors::ApiError;

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        let api_error = ApiError::bad_request(error.to_string());

        match error {
            ValidationError::BodyRequired => api_error,
            ValidationError::MissingRequiredFields => {
                api_error.with_required_fields(&REQUIRED_FIELDS)
            }
            ValidationError::InvalidDataTypes => api_error.with_requirements(TYPE_REQUIREMENTS),
        }
    }
}

impl From<ProductsServiceError> for ApiError {
    fn from(error: ProductsServiceError) -> Self {
        match error {
            ProductsServiceError::MissingId => ApiError::bad_request(error.to_string()),
            ProductsServiceError::NotFound(_) | ProductsServiceError::EmptyCatalog => {
                ApiError::not_found(error.to_string())
            }
            ProductsServiceError::Storage(source) => {
                error!("catalog store request failed: {source}");

                ApiError::internal(&source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use catalog_app::store::{Collection, StoreError};

    use super::*;

    #[test]
    fn storage_errors_keep_their_cause() {
        let api_error = ApiError::from(ProductsServiceError::Storage(StoreError::Unavailable(
            Collection::Stocks,
        )));

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            api_error.body.error.as_deref(),
            Some("stocks collection is unavailable")
        );
    }

    #[test]
    fn missing_fields_list_the_required_fields() {
        let api_error = ApiError::from(ValidationError::MissingRequiredFields);

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            api_error.body.required_fields,
            Some(vec!["title".to_string(), "price".to_string()])
        );
        assert_eq!(api_error.body.requirements, None);
    }
}
