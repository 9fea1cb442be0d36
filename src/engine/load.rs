use std::{collections::BTreeSet, ops::Index};

use tracing::{debug, instrument};

use crate::{
    catalog::{ApplianceCatalog, ApplianceCategory, ApplianceDefinition},
    quantity::{power::Kilowatts, time::Hours},
    usage::{UsageProfile, UsageProfiles},
};

/// Load during one hour of the day.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HourLoad {
    pub total: Kilowatts,

    /// Ids of the appliances drawing power during the hour.
    pub contributors: BTreeSet<String>,
}

impl HourLoad {
    fn add(&mut self, appliance_id: &str, power: Kilowatts) {
        self.total += power;
        self.contributors.insert(appliance_id.to_owned());
    }
}

/// Load curve over a day, index 0 being `00:00–01:00`.
#[derive(Clone, Debug, PartialEq)]
pub struct HourlyLoad(pub [HourLoad; 24]);

impl Default for HourlyLoad {
    fn default() -> Self {
        Self(std::array::from_fn(|_| HourLoad::default()))
    }
}

impl HourlyLoad {
    pub fn iter(&self) -> impl Iterator<Item = &HourLoad> {
        self.0.iter()
    }

    /// Hour with the highest total load, the earliest one on a tie.
    pub fn peak(&self) -> Option<(usize, &HourLoad)> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, load)| load.total.is_positive())
            .fold(None, |peak: Option<(usize, &HourLoad)>, (hour, load)| match peak {
                Some((_, peak_load)) if peak_load.total >= load.total => peak,
                _ => Some((hour, load)),
            })
    }

    fn add_to_hours(
        &mut self,
        appliance_id: &str,
        power: Kilowatts,
        hours: impl IntoIterator<Item = usize>,
    ) {
        for hour in hours {
            self.0[hour].add(appliance_id, power);
        }
    }
}

impl Index<usize> for HourlyLoad {
    type Output = HourLoad;

    fn index(&self, hour: usize) -> &Self::Output {
        &self.0[hour]
    }
}

/// Aggregate the appliances into a load curve over a day.
///
/// Baseline appliances load every hour. Others load the hours touched by their windows, no
/// matter the entered durations.
#[instrument(skip_all, fields(n_appliances = catalog.len(), n_profiles = profiles.len()))]
pub fn compute_hourly_load(catalog: &ApplianceCatalog, profiles: &UsageProfiles) -> HourlyLoad {
    let mut load = HourlyLoad::default();
    for appliance in catalog {
        if !appliance.rated_power.is_positive() {
            debug!(appliance_id = %appliance.id, "Skipping the appliance without rated power");
            continue;
        }
        if appliance.category == ApplianceCategory::Baseline {
            load.add_to_hours(&appliance.id, appliance.rated_kilowatts(), 0..24);
            continue;
        }
        let Some(profile) = profiles.get(&appliance.id) else {
            debug!(appliance_id = %appliance.id, "Skipping the appliance without usage profile");
            continue;
        };
        let Some(power) = window_power(appliance, profile) else {
            continue;
        };
        for window in &profile.windows {
            load.add_to_hours(&appliance.id, power, window.hours());
        }
    }
    load
}

/// Power drawn by a windowed appliance while it is on, if any.
fn window_power(appliance: &ApplianceDefinition, profile: &UsageProfile) -> Option<Kilowatts> {
    let power = match (appliance.category, profile.charging) {
        (ApplianceCategory::EvCharging, Some(charging)) if charging.standard_charge => {
            // The battery capacity is spread evenly over the entered charging time:
            let total_duration = profile.total_duration();
            (total_duration > Hours::ZERO).then(|| charging.battery_capacity / total_duration)?
        }
        _ => appliance.rated_kilowatts(),
    };
    power.is_positive().then_some(power)
}
