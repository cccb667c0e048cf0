//! Cars service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::cars::{
        errors::CarsServiceError,
        models::{Car, NewCar},
        repository::PgCarsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCarsService {
    db: Db,
    repository: PgCarsRepository,
}

impl PgCarsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCarsRepository::new(),
        }
    }
}

#[async_trait]
impl CarsService for PgCarsService {
    async fn list_cars(&self) -> Result<Vec<Car>, CarsServiceError> {
        let mut tx = self.db.begin().await?;

        let cars = self.repository.list_cars(&mut tx).await?;

        tx.commit().await?;

        Ok(cars)
    }

    async fn get_car(&self, name: &str) -> Result<Car, CarsServiceError> {
        let mut tx = self.db.begin().await?;

        let car = self
            .repository
            .find_car(&mut tx, name)
            .await?
            .ok_or(CarsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(car)
    }

    async fn create_car(&self, car: NewCar) -> Result<Car, CarsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_car(&mut tx, &car).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait CarsService: Send + Sync {
    /// Retrieves every car in the catalog, ordered by name.
    async fn list_cars(&self) -> Result<Vec<Car>, CarsServiceError>;

    /// Retrieve a single car by its catalog name.
    async fn get_car(&self, name: &str) -> Result<Car, CarsServiceError>;

    /// Adds a new car to the catalog.
    async fn create_car(&self, car: NewCar) -> Result<Car, CarsServiceError>;
}
