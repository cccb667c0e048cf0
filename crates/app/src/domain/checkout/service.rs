//! Checkout service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        cars::repository::PgCarsRepository,
        carts::{CartsService, models::ProductDescriptor},
        checkout::{
            errors::CheckoutServiceError,
            ledger::{PgStockLedger, apply_purchase},
            models::{NewPurchase, Purchase},
        },
    },
};

#[derive(Clone)]
pub struct PgCheckoutService {
    db: Db,
    repository: PgCarsRepository,
    carts: Arc<dyn CartsService>,
}

impl PgCheckoutService {
    #[must_use]
    pub fn new(db: Db, carts: Arc<dyn CartsService>) -> Self {
        Self {
            db,
            repository: PgCarsRepository::new(),
            carts,
        }
    }
}

impl Debug for PgCheckoutService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PgCheckoutService")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CheckoutService for PgCheckoutService {
    async fn confirm_purchase(
        &self,
        purchase: NewPurchase,
    ) -> Result<Purchase, CheckoutServiceError> {
        let mut tx = self.db.begin().await?;

        let changes = {
            let mut ledger = PgStockLedger::new(&mut tx, &self.repository);

            apply_purchase(&mut ledger, &purchase.lines).await?
        };

        tx.commit().await?;

        self.carts.clear_cart().await;

        info!(
            buyer.name = %purchase.buyer.name,
            buyer.email = %purchase.buyer.email,
            lines = changes.len(),
            "purchase confirmed"
        );

        Ok(Purchase {
            buyer: purchase.buyer,
            changes,
        })
    }

    async fn buy_product(
        &self,
        product: Option<Value>,
    ) -> Result<ProductDescriptor, CheckoutServiceError> {
        let product = ProductDescriptor::new(product)?;

        info!(product = %product, "product bought");

        Ok(product)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Takes the purchased stock out of the catalog and empties the cart.
    ///
    /// Either every line is applied or none is.
    async fn confirm_purchase(
        &self,
        purchase: NewPurchase,
    ) -> Result<Purchase, CheckoutServiceError>;

    /// Acknowledges a single product purchase without touching stock or the cart.
    async fn buy_product(
        &self,
        product: Option<Value>,
    ) -> Result<ProductDescriptor, CheckoutServiceError>;
}
