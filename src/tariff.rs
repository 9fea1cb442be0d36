//! Resolution of the electricity price for a selected date.

mod curve;
mod dataset;
mod date;

use tracing::{debug, info, instrument};

pub use self::{
    curve::TariffCurve,
    dataset::{DailyPrices, PriceDataset},
    date::PriceDate,
};
use crate::quantity::rate::KilowattHourRate;

/// Factor turning a raw feed sample into euro per kilowatt-hour.
///
/// The feed unit is not documented. Most consumers treat the samples as €/MWh, hence the
/// default of `0.1 / 100`.
#[derive(Copy, Clone, Debug, PartialEq, derive_more::FromStr, serde::Deserialize)]
#[serde(transparent)]
pub struct PriceConversion(pub f64);

impl Default for PriceConversion {
    fn default() -> Self {
        Self(0.1 / 100.0)
    }
}

impl PriceConversion {
    pub fn apply(self, sample: f64) -> KilowattHourRate {
        KilowattHourRate::from(sample * self.0)
    }
}

/// Resolve the tariff curve on the date.
///
/// Falls back to the fixed price when the dataset has no complete day of samples for the
/// date. That is not an error.
#[instrument(skip_all, fields(date = %date, fallback_rate = %fallback_rate))]
pub fn resolve(
    date: PriceDate,
    fallback_rate: KilowattHourRate,
    dataset: &PriceDataset,
    conversion: PriceConversion,
) -> TariffCurve {
    if let Some(samples) = dataset.samples_on(date) {
        debug!(n_records = dataset.len(), "Resolved the dynamic tariff");
        let hourly = samples.map(|sample| conversion.apply(sample));
        TariffCurve::Dynamic { hourly, source_date: date, fixed_rate: fallback_rate }
    } else {
        info!("No dynamic prices for the date, using the fixed tariff");
        TariffCurve::Fixed(fallback_rate)
    }
}
