use std::path::PathBuf;

use clap::{Parser, Subcommand};
use household_tariff::{
    catalog::ApplianceCategory,
    config::{Household, TariffSettings, read_price_dataset},
    prelude::*,
    quantity::rate::KilowattHourRate,
    tariff::{PriceConversion, PriceDataset, PriceDate, TariffCurve, resolve},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[clap(long = "log-level", default_value = "info", env = "LOG_LEVEL")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Annual cost of every appliance, and the totals.
    #[clap(name = "costs")]
    Costs(CalculateArgs),

    /// Hourly load profile with the prices of the selected date.
    #[clap(name = "load")]
    Load(CalculateArgs),

    /// List the appliances and their usage.
    #[clap(name = "catalog")]
    Catalog(HouseholdArgs),
}

#[derive(Parser)]
pub struct HouseholdArgs {
    /// Household TOML file, the built-in appliances are used if omitted.
    #[clap(long = "household", env = "HOUSEHOLD_PATH")]
    pub path: Option<PathBuf>,
}

impl HouseholdArgs {
    pub fn load(&self) -> Result<Household> {
        self.path.as_deref().map_or_else(|| Ok(Household::builtin()), Household::read_from)
    }
}

#[derive(Parser)]
pub struct CalculateArgs {
    #[clap(flatten)]
    pub household: HouseholdArgs,

    /// JSON file with the daily hourly price samples.
    #[clap(long = "prices", env = "PRICES_PATH")]
    pub prices: Option<PathBuf>,

    /// Selected date in `DD/MM/YYYY`, today if omitted.
    #[clap(long, env = "DATE")]
    pub date: Option<PriceDate>,

    /// Fixed price in €/kWh, overrides the household file.
    #[clap(long = "fallback-rate", env = "FALLBACK_RATE")]
    pub fallback_rate: Option<KilowattHourRate>,

    /// Factor converting a raw price sample into €/kWh, overrides the household file.
    #[clap(long = "conversion-factor", env = "PRICE_CONVERSION_FACTOR")]
    pub conversion_factor: Option<PriceConversion>,

    /// Enabled appliance categories, overrides the household file.
    #[clap(long = "categories", env = "CATEGORIES", value_delimiter = ',', num_args = 1..)]
    pub categories: Vec<ApplianceCategory>,
}

impl CalculateArgs {
    /// Load the household and resolve the tariff of the selected date.
    pub fn resolve(&self) -> Result<(Household, TariffCurve)> {
        let mut household = self.household.load()?;
        if !self.categories.is_empty() {
            household.selection.categories = self.categories.iter().copied().collect();
        }

        if let Some(fallback_rate) = self.fallback_rate {
            household.tariff.fallback_rate = fallback_rate;
        }
        if let Some(conversion_factor) = self.conversion_factor {
            household.tariff.conversion_factor = conversion_factor;
        }
        household.tariff.validate()?;
        let TariffSettings { fallback_rate, conversion_factor } = household.tariff;

        let dataset = match &self.prices {
            Some(path) => read_price_dataset(path)?,
            None => PriceDataset::default(),
        };
        let date = self.date.unwrap_or_else(PriceDate::today);
        let tariff = resolve(date, fallback_rate, &dataset, conversion_factor);
        Ok((household, tariff))
    }
}

#[cfg(test)]
mod tests {
    use household_tariff::error::{Error, Field};

    use super::*;

    fn calculate_args(fallback_rate: f64) -> CalculateArgs {
        CalculateArgs {
            household: HouseholdArgs { path: None },
            prices: None,
            date: "16/10/2026".parse().ok(),
            fallback_rate: Some(KilowattHourRate::from(fallback_rate)),
            conversion_factor: None,
            categories: Vec::new(),
        }
    }

    #[test]
    fn test_fallback_rate_override() {
        let (_, tariff) = calculate_args(0.25).resolve().unwrap();
        assert_eq!(tariff, TariffCurve::Fixed(KilowattHourRate::from(0.25)));
    }

    #[test]
    fn test_nan_fallback_rate_rejected() {
        let error = calculate_args(f64::NAN).resolve().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::Validation { field: Field::Price, .. })
        ));
    }

    #[test]
    fn test_negative_conversion_factor_rejected() {
        let mut args = calculate_args(0.3);
        args.conversion_factor = Some(PriceConversion(-1.0));
        assert!(args.resolve().is_err());
    }
}
