use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Decides which load and cost model applies to an appliance.
#[derive(Debug, Hash, Serialize, Deserialize, clap::ValueEnum, enumset::EnumSetType)]
#[serde(rename_all = "kebab-case")]
pub enum ApplianceCategory {
    /// Runs around the clock, for example a refrigerator.
    Baseline,

    /// Runs in windows a number of times per week: washing machine, dishwasher, dryer.
    WeeklyCycle,

    /// Runs in windows a number of times per day: stove, multimedia, lighting.
    DailyCycle,

    /// Electric vehicle charging, a number of sessions per week.
    EvCharging,
}

/// What the usage frequency of a category is counted against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrequencyPeriod {
    Day,
    Week,
}

impl FrequencyPeriod {
    /// Number of periods in a year as used by the annual cost formulas.
    pub const fn per_year(self) -> f64 {
        match self {
            Self::Day => 365.0,
            Self::Week => 52.0,
        }
    }
}

impl ApplianceCategory {
    pub const fn is_baseline(self) -> bool {
        matches!(self, Self::Baseline)
    }

    /// `None` for [`ApplianceCategory::Baseline`] which has no frequency.
    pub const fn frequency_period(self) -> Option<FrequencyPeriod> {
        match self {
            Self::Baseline => None,
            Self::DailyCycle => Some(FrequencyPeriod::Day),
            Self::WeeklyCycle | Self::EvCharging => Some(FrequencyPeriod::Week),
        }
    }
}

impl Display for ApplianceCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Baseline => "baseline",
            Self::WeeklyCycle => "weekly cycle",
            Self::DailyCycle => "daily cycle",
            Self::EvCharging => "EV charging",
        })
    }
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;

    use super::*;

    #[test]
    fn test_frequency_period() {
        assert_eq!(ApplianceCategory::Baseline.frequency_period(), None);
        assert_eq!(ApplianceCategory::DailyCycle.frequency_period(), Some(FrequencyPeriod::Day));
        assert_eq!(ApplianceCategory::WeeklyCycle.frequency_period(), Some(FrequencyPeriod::Week));
        assert_eq!(ApplianceCategory::EvCharging.frequency_period(), Some(FrequencyPeriod::Week));
    }

    #[test]
    fn test_all_categories() {
        assert_eq!(EnumSet::<ApplianceCategory>::all().len(), 4);
    }

    #[test]
    fn test_deserialize_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            category: ApplianceCategory,
        }

        let wrapper: Wrapper = toml::from_str(r#"category = "ev-charging""#).unwrap();
        assert_eq!(wrapper.category, ApplianceCategory::EvCharging);
    }
}
