//! Cars Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar, types::Json,
};

use crate::domain::cars::models::{Car, CarDetails, CarUuid, NewCar};

const LIST_CARS_SQL: &str = include_str!("sql/list_cars.sql");
const FIND_CAR_SQL: &str = include_str!("sql/find_car.sql");
const LOCK_CAR_SQL: &str = include_str!("sql/lock_car.sql");
const CREATE_CAR_SQL: &str = include_str!("sql/create_car.sql");
const DECREMENT_STOCK_SQL: &str = include_str!("sql/decrement_stock.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCarsRepository;

impl PgCarsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_cars(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Car>, sqlx::Error> {
        query_as::<Postgres, Car>(LIST_CARS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_car(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Option<Car>, sqlx::Error> {
        query_as::<Postgres, Car>(FIND_CAR_SQL)
            .bind(name)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Like [`Self::find_car`], but holds a row lock until the transaction ends.
    pub(crate) async fn lock_car(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Option<Car>, sqlx::Error> {
        query_as::<Postgres, Car>(LOCK_CAR_SQL)
            .bind(name)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_car(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        car: &NewCar,
    ) -> Result<Car, sqlx::Error> {
        query_as::<Postgres, Car>(CREATE_CAR_SQL)
            .bind(car.uuid.into_uuid())
            .bind(&car.name)
            .bind(encode_stock(car.stock)?)
            .bind(Json(&car.details))
            .fetch_one(&mut **tx)
            .await
    }

    /// Subtracts `quantity` from the named car only while enough stock remains.
    ///
    /// Returns the remaining stock, or `None` when the car is missing or short.
    pub(crate) async fn decrement_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
        quantity: u64,
    ) -> Result<Option<u64>, sqlx::Error> {
        query_scalar::<Postgres, i64>(DECREMENT_STOCK_SQL)
            .bind(name)
            .bind(encode_stock(quantity)?)
            .fetch_optional(&mut **tx)
            .await?
            .map(decode_stock)
            .transpose()
    }
}

fn encode_stock(stock: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(stock).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

fn decode_stock(stock: i64) -> Result<u64, sqlx::Error> {
    u64::try_from(stock).map_err(|e| sqlx::Error::ColumnDecode {
        index: "stock".to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for Car {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CarUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            stock: decode_stock(row.try_get("stock")?)?,
            details: row.try_get::<Json<CarDetails>, _>("details")?.0,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
