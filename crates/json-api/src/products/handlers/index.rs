//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{errors::ApiError, extensions::*, products::models::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns every product merged with its stock count.
#[endpoint(
    tags("products"),
    summary = "List Products",
    responses(
        (status_code = StatusCode::OK, description = "Products found"),
        (status_code = StatusCode::NOT_FOUND, description = "No products found"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state.products.list_products().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::{
        domain::products::{MockProductsService, ProductsServiceError},
        store::{Collection, StoreError},
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_list_products_success() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|| Ok(vec![make_product("p-1", 3), make_product("p-2", 0)]));

        repo.expect_get_product().never();
        repo.expect_create_product().never();

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        let body: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.iter().map(|p| (p.id.as_str(), p.count)).collect::<Vec<_>>(),
            vec![("p-1", 3), ("p-2", 0)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_list_products_empty_catalog_returns_404() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products()
            .once()
            .return_once(|| Err(ProductsServiceError::EmptyCatalog));

        repo.expect_get_product().never();
        repo.expect_create_product().never();

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "No products found");

        Ok(())
    }

    #[tokio::test]
    async fn test_list_products_empty_list_returns_200() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().once().return_once(|| Ok(vec![]));

        repo.expect_get_product().never();
        repo.expect_create_product().never();

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        let body: Vec<ProductResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.is_empty(), "expected an empty array");

        Ok(())
    }

    #[tokio::test]
    async fn test_list_products_store_failure_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_list_products().once().return_once(|| {
            Err(ProductsServiceError::Storage(StoreError::Unavailable(
                Collection::Products,
            )))
        });

        repo.expect_get_product().never();
        repo.expect_create_product().never();

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
