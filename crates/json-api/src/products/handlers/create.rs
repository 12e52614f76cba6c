//! Create Product Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use tracing::debug;

use catalog_app::domain::products::validation::{ValidationError, parse_new_product};

use crate::{errors::ApiError, extensions::*, products::models::ProductResponse, state::State};

/// Create Product Handler
///
/// Accepts `{ title, price, description?, count? }` and creates the product
/// together with its stock record.
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = match req.payload().await {
        Ok(body) => parse_new_product(body)?,
        Err(error) => {
            debug!("failed to read create product body: {error}");

            return Err(ValidationError::BodyRequired.into());
        }
    };

    let created: ProductResponse = state.products.create_product(product).await?.into();

    res.add_header(LOCATION, format!("/products/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created))
}
