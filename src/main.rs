mod cli;
mod tables;

use clap::Parser;
use household_tariff::{engine::Pipeline, prelude::*};

use crate::{
    cli::{Args, Command},
    tables::{build_catalog_table, build_costs_table, build_load_table, build_summary_table},
};

fn main() -> Result {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Costs(args) => {
            let (household, tariff) = args.resolve()?;
            let report = Pipeline::builder()
                .catalog(&household.catalog)
                .profiles(&household.profiles)
                .tariff(&tariff)
                .selection(household.selection.clone())
                .run();
            println!("{}", build_costs_table(&report, &household.catalog));
            println!("{}", build_summary_table(&report));
            Ok(())
        }

        Command::Load(args) => {
            let (household, tariff) = args.resolve()?;
            let report = Pipeline::builder()
                .catalog(&household.catalog)
                .profiles(&household.profiles)
                .tariff(&tariff)
                .selection(household.selection.clone())
                .run();
            if let Some((hour, peak)) = report.load.peak() {
                info!(hour, total = %peak.total, "Peak load");
            }
            println!("{}", build_load_table(&report));
            Ok(())
        }

        Command::Catalog(args) => {
            let household = args.load()?;
            println!(
                "{}",
                build_catalog_table(&household.catalog, &household.profiles, &household.selection)
            );
            Ok(())
        }
    }
}
