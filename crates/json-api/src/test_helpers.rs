//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use catalog_app::domain::products::{MockProductsService, models::StockedProduct, records::Price};

use crate::state::State;

/// A products mock that fails the test on any call.
pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();

    products
}

pub(crate) fn make_product(id: &str, count: u64) -> StockedProduct {
    StockedProduct {
        id: id.into(),
        title: "Laptop".to_string(),
        description: "High-performance laptop with SSD".to_string(),
        price: Price::from(999),
        count,
    }
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(Arc::new(State::new(Arc::new(products)))))
            .push(route),
    )
}
