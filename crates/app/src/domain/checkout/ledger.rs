//! Stock Ledger
//!
//! Applies the lines of a purchase against catalog stock. Callers run the
//! whole purchase inside one transaction so a failing line undoes every line
//! applied before it.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::debug;

use crate::domain::{
    cars::{models::Car, repository::PgCarsRepository},
    checkout::{
        errors::CheckoutServiceError,
        models::{PurchaseLine, StockChange},
    },
};

#[cfg_attr(test, automock)]
#[async_trait]
pub(crate) trait StockLedger: Send {
    /// Fetches the named car and locks it against concurrent purchases.
    async fn lock_car(&mut self, name: &str) -> Result<Option<Car>, sqlx::Error>;

    /// Removes `quantity` units, returning the remaining stock or `None` when short.
    async fn decrement_stock(
        &mut self,
        name: &str,
        quantity: u64,
    ) -> Result<Option<u64>, sqlx::Error>;
}

pub(crate) struct PgStockLedger<'t> {
    tx: &'t mut Transaction<'static, Postgres>,
    repository: &'t PgCarsRepository,
}

impl<'t> PgStockLedger<'t> {
    pub(crate) fn new(
        tx: &'t mut Transaction<'static, Postgres>,
        repository: &'t PgCarsRepository,
    ) -> Self {
        Self { tx, repository }
    }
}

#[async_trait]
impl StockLedger for PgStockLedger<'_> {
    async fn lock_car(&mut self, name: &str) -> Result<Option<Car>, sqlx::Error> {
        self.repository.lock_car(&mut *self.tx, name).await
    }

    async fn decrement_stock(
        &mut self,
        name: &str,
        quantity: u64,
    ) -> Result<Option<u64>, sqlx::Error> {
        self.repository
            .decrement_stock(&mut *self.tx, name, quantity)
            .await
    }
}

/// Applies every line in order, stopping at the first one that cannot be fulfilled.
pub(crate) async fn apply_purchase<L>(
    ledger: &mut L,
    lines: &[PurchaseLine],
) -> Result<Vec<StockChange>, CheckoutServiceError>
where
    L: StockLedger + ?Sized,
{
    let mut changes = Vec::with_capacity(lines.len());

    for line in lines {
        let quantity = line.quantity.get();

        let car = ledger
            .lock_car(&line.name)
            .await?
            .ok_or_else(|| CheckoutServiceError::NotFound(line.name.clone()))?;

        if car.stock < quantity {
            return Err(CheckoutServiceError::InsufficientStock {
                name: line.name.clone(),
                stock: car.stock,
            });
        }

        let remaining = ledger
            .decrement_stock(&line.name, quantity)
            .await?
            .ok_or_else(|| CheckoutServiceError::InsufficientStock {
                name: line.name.clone(),
                stock: car.stock,
            })?;

        debug!(car = %line.name, quantity, remaining, "stock decremented");

        changes.push(StockChange {
            name: line.name.clone(),
            quantity,
            remaining,
        });
    }

    Ok(changes)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use mockall::Sequence;
    use testresult::TestResult;

    use crate::domain::cars::models::{CarDetails, CarUuid};

    use super::*;

    fn car(name: &str, stock: u64) -> Car {
        let now = Timestamp::now();

        Car {
            uuid: CarUuid::new(),
            name: name.to_string(),
            stock,
            details: CarDetails::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn expect_car(ledger: &mut MockStockLedger, name: &'static str, stock: u64) {
        ledger
            .expect_lock_car()
            .withf(move |n| n == name)
            .times(1)
            .returning(move |_| Ok(Some(car(name, stock))));
    }

    #[tokio::test]
    async fn decrements_each_line_by_its_quantity() -> TestResult {
        let mut ledger = MockStockLedger::new();

        expect_car(&mut ledger, "Civic", 5);
        expect_car(&mut ledger, "Golf", 2);

        ledger
            .expect_decrement_stock()
            .withf(|name, quantity| name == "Civic" && *quantity == 2)
            .times(1)
            .returning(|_, _| Ok(Some(3)));

        ledger
            .expect_decrement_stock()
            .withf(|name, quantity| name == "Golf" && *quantity == 1)
            .times(1)
            .returning(|_, _| Ok(Some(1)));

        let changes = apply_purchase(
            &mut ledger,
            &[
                PurchaseLine::new("Civic", Some(2)),
                PurchaseLine::new("Golf", None),
            ],
        )
        .await?;

        assert_eq!(
            changes,
            vec![
                StockChange {
                    name: "Civic".to_string(),
                    quantity: 2,
                    remaining: 3,
                },
                StockChange {
                    name: "Golf".to_string(),
                    quantity: 1,
                    remaining: 1,
                },
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn negative_quantity_subtracts_its_absolute_value() -> TestResult {
        let mut ledger = MockStockLedger::new();

        expect_car(&mut ledger, "Civic", 5);

        ledger
            .expect_decrement_stock()
            .withf(|name, quantity| name == "Civic" && *quantity == 3)
            .times(1)
            .returning(|_, _| Ok(Some(2)));

        let changes = apply_purchase(&mut ledger, &[PurchaseLine::new("Civic", Some(-3))]).await?;

        assert_eq!(
            changes.first().map(|change| change.remaining),
            Some(2),
            "expected 2 Civics left"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_car_fails_with_its_name() {
        let mut ledger = MockStockLedger::new();

        ledger
            .expect_lock_car()
            .withf(|name| name == "Delorean")
            .times(1)
            .returning(|_| Ok(None));

        ledger.expect_decrement_stock().never();

        let result = apply_purchase(&mut ledger, &[PurchaseLine::new("Delorean", Some(1))]).await;

        assert!(
            matches!(result, Err(CheckoutServiceError::NotFound(ref name)) if name == "Delorean"),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn insufficient_stock_reports_current_stock_without_decrementing() {
        let mut ledger = MockStockLedger::new();

        expect_car(&mut ledger, "Civic", 1);

        ledger.expect_decrement_stock().never();

        let result = apply_purchase(&mut ledger, &[PurchaseLine::new("Civic", Some(2))]).await;

        assert!(
            matches!(
                result,
                Err(CheckoutServiceError::InsufficientStock { ref name, stock: 1 }) if name == "Civic"
            ),
            "expected InsufficientStock, got {result:?}"
        );
    }

    #[tokio::test]
    async fn failed_conditional_decrement_reports_insufficient_stock() {
        let mut ledger = MockStockLedger::new();

        expect_car(&mut ledger, "Civic", 4);

        ledger
            .expect_decrement_stock()
            .times(1)
            .returning(|_, _| Ok(None));

        let result = apply_purchase(&mut ledger, &[PurchaseLine::new("Civic", Some(4))]).await;

        assert!(
            matches!(
                result,
                Err(CheckoutServiceError::InsufficientStock { ref name, stock: 4 }) if name == "Civic"
            ),
            "expected InsufficientStock, got {result:?}"
        );
    }

    #[tokio::test]
    async fn stops_at_the_first_failing_line() {
        let mut ledger = MockStockLedger::new();
        let mut seq = Sequence::new();

        ledger
            .expect_lock_car()
            .withf(|name| name == "Civic")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(car("Civic", 5))));

        ledger
            .expect_decrement_stock()
            .withf(|name, _| name == "Civic")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Some(4)));

        ledger
            .expect_lock_car()
            .withf(|name| name == "Golf")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(car("Golf", 0))));

        ledger
            .expect_lock_car()
            .withf(|name| name == "Mustang")
            .never();

        let result = apply_purchase(
            &mut ledger,
            &[
                PurchaseLine::new("Civic", Some(1)),
                PurchaseLine::new("Golf", Some(1)),
                PurchaseLine::new("Mustang", Some(1)),
            ],
        )
        .await;

        assert!(
            matches!(
                result,
                Err(CheckoutServiceError::InsufficientStock { ref name, stock: 0 }) if name == "Golf"
            ),
            "expected InsufficientStock for Golf, got {result:?}"
        );
    }

    #[tokio::test]
    async fn storage_errors_propagate() {
        let mut ledger = MockStockLedger::new();

        ledger
            .expect_lock_car()
            .returning(|_| Err(sqlx::Error::PoolTimedOut));

        let result = apply_purchase(&mut ledger, &[PurchaseLine::new("Civic", None)]).await;

        assert!(
            matches!(result, Err(CheckoutServiceError::Sql(sqlx::Error::PoolTimedOut))),
            "expected Sql, got {result:?}"
        );
    }

    #[tokio::test]
    async fn empty_purchase_touches_nothing() -> TestResult {
        let mut ledger = MockStockLedger::new();

        ledger.expect_lock_car().never();
        ledger.expect_decrement_stock().never();

        assert!(apply_purchase(&mut ledger, &[]).await?.is_empty());

        Ok(())
    }
}
