use autos_app::domain::cars::{CarsService, PgCarsService};
use clap::Args;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListCarsArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListCarsArgs) -> Result<(), String> {
    let service = PgCarsService::new(args.database.connect().await?);

    let cars = service
        .list_cars()
        .await
        .map_err(|error| format!("failed to list cars: {error}"))?;

    if cars.is_empty() {
        println!("no cars found");
        return Ok(());
    }

    for car in cars {
        println!("{}\t{}", car.name, car.stock);
    }

    Ok(())
}
