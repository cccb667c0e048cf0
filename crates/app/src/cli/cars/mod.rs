use clap::{Args, Subcommand};

mod create;
mod list;
mod seed;

#[derive(Debug, Args)]
pub(crate) struct CarsCommand {
    #[command(subcommand)]
    command: CarsSubcommand,
}

#[derive(Debug, Subcommand)]
enum CarsSubcommand {
    /// Add a single car to the catalog
    Create(create::CreateCarArgs),
    /// Load cars from a JSON file
    Seed(seed::SeedCarsArgs),
    /// Print every car with its stock
    List(list::ListCarsArgs),
}

pub(crate) async fn run(command: CarsCommand) -> Result<(), String> {
    match command.command {
        CarsSubcommand::Create(args) => create::run(args).await,
        CarsSubcommand::Seed(args) => seed::run(args).await,
        CarsSubcommand::List(args) => list::run(args).await,
    }
}
