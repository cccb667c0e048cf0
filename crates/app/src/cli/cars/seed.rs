use std::{fs, path::PathBuf};

use autos_app::domain::cars::{
    CarsService, PgCarsService,
    models::{CarDetails, NewCar},
};
use clap::Args;
use serde::Deserialize;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct SeedCarsArgs {
    /// JSON array of `{"name": ..., "stock": ..., ...details}` objects
    #[arg(long)]
    file: PathBuf,

    #[command(flatten)]
    database: DatabaseArgs,
}

#[derive(Debug, Deserialize)]
struct SeedCar {
    name: String,

    #[serde(default)]
    stock: u64,

    #[serde(flatten)]
    details: CarDetails,
}

fn parse_seed(raw: &str) -> Result<Vec<NewCar>, String> {
    let cars: Vec<SeedCar> =
        serde_json::from_str(raw).map_err(|error| format!("invalid seed file: {error}"))?;

    Ok(cars
        .into_iter()
        .map(|car| NewCar::new(car.name, car.stock, car.details))
        .collect())
}

pub(crate) async fn run(args: SeedCarsArgs) -> Result<(), String> {
    let raw = fs::read_to_string(&args.file)
        .map_err(|error| format!("failed to read {}: {error}", args.file.display()))?;

    let cars = parse_seed(&raw)?;
    let service = PgCarsService::new(args.database.connect().await?);

    for car in cars {
        let name = car.name.clone();

        let created = service
            .create_car(car)
            .await
            .map_err(|error| format!("failed to create car '{name}': {error}"))?;

        println!("{}\t{}", created.name, created.stock);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn seed_entries_keep_extra_fields_as_details() -> TestResult {
        let cars = parse_seed(
            r#"[
                {"name": "Civic", "stock": 5, "price": 21500, "image": "civic.png"},
                {"name": "Golf"}
            ]"#,
        )?;

        assert_eq!(cars.len(), 2);
        assert_eq!(cars[0].name, "Civic");
        assert_eq!(cars[0].stock, 5);
        assert_eq!(cars[0].details.get("price"), Some(&json!(21500)));
        assert!(!cars[0].details.contains_key("name"));
        assert_eq!(cars[1].stock, 0);
        assert!(cars[1].details.is_empty());

        Ok(())
    }

    #[test]
    fn seed_rejects_negative_stock() {
        assert!(parse_seed(r#"[{"name": "Civic", "stock": -1}]"#).is_err());
    }
}
