use autos_app::domain::cars::{
    CarsService, PgCarsService,
    models::{CarDetails, NewCar},
};
use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateCarArgs {
    /// Catalog name, used as the lookup key at checkout
    #[arg(long)]
    name: String,

    /// Units available for sale
    #[arg(long)]
    stock: u64,

    /// Extra descriptive fields as a JSON object, e.g. '{"price": 21500}'
    #[arg(long, value_parser = parse_details, default_value = "{}")]
    details: CarDetails,

    #[command(flatten)]
    database: DatabaseArgs,
}

fn parse_details(raw: &str) -> Result<CarDetails, String> {
    serde_json::from_str(raw).map_err(|error| format!("details must be a JSON object: {error}"))
}

pub(crate) async fn run(args: CreateCarArgs) -> Result<(), String> {
    let service = PgCarsService::new(args.database.connect().await?);

    let car = service
        .create_car(NewCar::new(args.name, args.stock, args.details))
        .await
        .map_err(|error| format!("failed to create car: {error}"))?;

    println!("car_uuid: {}", car.uuid);
    println!("car_name: {}", car.name);
    println!("car_stock: {}", car.stock);

    Ok(())
}
