use crate::{quantity::rate::KilowattHourRate, tariff::PriceDate};

/// Electricity price over a day.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TariffCurve {
    Fixed(KilowattHourRate),

    Dynamic {
        hourly: [KilowattHourRate; 24],
        source_date: PriceDate,

        /// Caller's fixed price, still used for the annual estimates.
        fixed_rate: KilowattHourRate,
    },
}

impl TariffCurve {
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic { .. })
    }

    /// Price during the hour `0..24`.
    pub fn rate_at(&self, hour: usize) -> KilowattHourRate {
        match self {
            Self::Fixed(rate) => *rate,
            Self::Dynamic { hourly, .. } => hourly[hour % 24],
        }
    }

    /// Single price used for the annual cost estimates.
    ///
    /// That is always the fixed price, the hourly curve never feeds the annual totals.
    pub fn annual_rate(&self) -> KilowattHourRate {
        match self {
            Self::Fixed(rate) | Self::Dynamic { fixed_rate: rate, .. } => *rate,
        }
    }

    /// Plain average over the day.
    pub fn average_rate(&self) -> KilowattHourRate {
        match self {
            Self::Fixed(rate) => *rate,
            Self::Dynamic { hourly, .. } => hourly.iter().copied().sum::<KilowattHourRate>() / 24.0,
        }
    }
}
