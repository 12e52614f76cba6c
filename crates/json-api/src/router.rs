//! App Router

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use catalog_app::context::AppContext;

use crate::{
    headers::allow_any_origin, healthcheck, observability::request_logging, products,
    state::State,
};

pub fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("{id}").get(products::get::handler)),
        )
}

/// The app routes behind every hoop, bound to the given context.
pub fn catalog_router(app: AppContext) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(allow_any_origin)
        .hoop(inject(State::from_app_context(app)))
        .push(app_router())
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
        test::{ResponseExt, TestClient},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    use catalog_app::domain::products::EmptyCatalogPolicy;

    use super::*;

    fn make_service(empty_catalog: EmptyCatalogPolicy) -> Service {
        Service::new(catalog_router(AppContext::in_memory(empty_catalog)))
    }

    fn allowed_origin(res: &Response) -> Option<&str> {
        res.headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok())
    }

    #[tokio::test]
    async fn created_product_reads_back_identically() -> TestResult {
        let service = make_service(EmptyCatalogPolicy::NotFound);

        let mut created = TestClient::post("http://example.com/products")
            .json(&json!({ "title": "Laptop", "price": 999 }))
            .send(&service)
            .await;

        let body: Value = created.take_json().await?;
        let id = body
            .get("id")
            .and_then(Value::as_str)
            .ok_or("created product has no id")?
            .to_string();

        assert_eq!(created.status_code, Some(StatusCode::CREATED));
        assert_eq!(allowed_origin(&created), Some("*"));
        assert!(
            created.headers().contains_key("x-request-id"),
            "expected a request id header"
        );
        assert_eq!(
            body,
            json!({
                "id": id,
                "title": "Laptop",
                "description": "",
                "price": 999,
                "count": 0,
            })
        );

        let mut fetched = TestClient::get(format!("http://example.com/products/{id}"))
            .send(&service)
            .await;

        let fetched_body: Value = fetched.take_json().await?;

        assert_eq!(fetched.status_code, Some(StatusCode::OK));
        assert_eq!(allowed_origin(&fetched), Some("*"));
        assert_eq!(fetched_body, body);

        let mut listed = TestClient::get("http://example.com/products")
            .send(&service)
            .await;

        let listed_body: Value = listed.take_json().await?;

        assert_eq!(listed.status_code, Some(StatusCode::OK));
        assert_eq!(listed_body, json!([body]));

        Ok(())
    }

    #[tokio::test]
    async fn empty_catalog_returns_404_with_cors() -> TestResult {
        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(EmptyCatalogPolicy::NotFound))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(allowed_origin(&res), Some("*"));
        assert_eq!(body, json!({ "message": "No products found" }));

        Ok(())
    }

    #[tokio::test]
    async fn empty_catalog_with_empty_list_policy_returns_200() -> TestResult {
        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(EmptyCatalogPolicy::EmptyList))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body, json!([]));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_returns_404_with_cors() -> TestResult {
        let mut res = TestClient::get("http://example.com/products/nope")
            .send(&make_service(EmptyCatalogPolicy::NotFound))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(allowed_origin(&res), Some("*"));
        assert_eq!(body, json!({ "message": "Product with ID nope not found" }));

        Ok(())
    }

    #[tokio::test]
    async fn whitespace_id_is_not_found() {
        let res = TestClient::get("http://example.com/products/%20")
            .send(&make_service(EmptyCatalogPolicy::NotFound))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn invalid_create_writes_nothing() -> TestResult {
        let service = make_service(EmptyCatalogPolicy::EmptyList);

        let mut rejected = TestClient::post("http://example.com/products")
            .json(&json!({ "title": "Laptop", "price": -1 }))
            .send(&service)
            .await;

        let body: Value = rejected.take_json().await?;

        assert_eq!(rejected.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(allowed_origin(&rejected), Some("*"));
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("Invalid data types")
        );

        let mut listed = TestClient::get("http://example.com/products")
            .send(&service)
            .await;

        let listed_body: Value = listed.take_json().await?;

        assert_eq!(listed_body, json!([]));

        Ok(())
    }

    #[tokio::test]
    async fn healthcheck_is_routed() {
        let res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(EmptyCatalogPolicy::NotFound))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(allowed_origin(&res), Some("*"));
    }
}
