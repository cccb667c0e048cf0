//! Test context for service-level integration tests.

use std::sync::Arc;

use crate::{
    database::Db,
    domain::{cars::PgCarsService, carts::InMemoryCartsService, checkout::PgCheckoutService},
};

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub cars: PgCarsService,
    pub carts: Arc<InMemoryCartsService>,
    pub checkout: PgCheckoutService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());
        let carts = Arc::new(InMemoryCartsService::new());

        Self {
            cars: PgCarsService::new(db.clone()),
            checkout: PgCheckoutService::new(db, carts.clone()),
            carts,
            db: test_db,
        }
    }
}
