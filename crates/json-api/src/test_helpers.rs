//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use autos_app::{
    context::AppContext,
    domain::{cars::MockCarsService, carts::MockCartsService, checkout::MockCheckoutService},
};

use crate::{catcher::catcher, state::State};

fn strict_cars_mock() -> MockCarsService {
    let mut cars = MockCarsService::new();

    cars.expect_list_cars().never();
    cars.expect_get_car().never();
    cars.expect_create_car().never();

    cars
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_clear_cart().never();

    carts
}

fn strict_checkout_mock() -> MockCheckoutService {
    let mut checkout = MockCheckoutService::new();

    checkout.expect_confirm_purchase().never();
    checkout.expect_buy_product().never();

    checkout
}

/// State whose services fail the test when called, except for the ones supplied.
pub(crate) fn state(
    cars: Option<MockCarsService>,
    carts: Option<MockCartsService>,
    checkout: Option<MockCheckoutService>,
) -> Arc<State> {
    State::from_app_context(AppContext {
        cars: Arc::new(cars.unwrap_or_else(strict_cars_mock)),
        carts: Arc::new(carts.unwrap_or_else(strict_carts_mock)),
        checkout: Arc::new(checkout.unwrap_or_else(strict_checkout_mock)),
    })
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route)).catcher(catcher())
}

pub(crate) fn cars_service(cars: MockCarsService, route: Router) -> Service {
    service(state(Some(cars), None, None), route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service(state(None, Some(carts), None), route)
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    service(state(None, None, Some(checkout)), route)
}
