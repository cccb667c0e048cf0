//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        cars::{CarsService, PgCarsService},
        carts::{CartsService, InMemoryCartsService},
        checkout::{CheckoutService, PgCheckoutService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub cars: Arc<dyn CarsService>,
    pub carts: Arc<dyn CartsService>,
    pub checkout: Arc<dyn CheckoutService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails, or when
    /// `run_migrations` is set and a migration fails.
    pub async fn from_database_url(url: &str, run_migrations: bool) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;
        }

        Ok(Self::from_db(Db::new(pool)))
    }

    /// Wire the services over an existing database handle with an empty cart.
    #[must_use]
    pub fn from_db(db: Db) -> Self {
        let carts: Arc<dyn CartsService> = Arc::new(InMemoryCartsService::new());

        Self {
            cars: Arc::new(PgCarsService::new(db.clone())),
            checkout: Arc::new(PgCheckoutService::new(db, Arc::clone(&carts))),
            carts,
        }
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
