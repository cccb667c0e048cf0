//! Test Helpers

use crate::{
    domain::cars::{
        CarsService, CarsServiceError,
        models::{Car, CarDetails, NewCar},
    },
    test::TestContext,
};

pub(crate) async fn create_car(
    ctx: &TestContext,
    name: &str,
    stock: u64,
) -> Result<Car, CarsServiceError> {
    ctx.cars
        .create_car(NewCar::new(name, stock, CarDetails::new()))
        .await
}
