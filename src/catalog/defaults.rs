//! Built-in household appliances and their typical usage.

use crate::{
    catalog::{ApplianceCategory, ApplianceDefinition},
    quantity::{energy::KilowattHours, power::Watts, time::Hours},
    usage::{ChargingSettings, ClockTime, UsageProfile, UsageProfiles, UsageWindow},
};

const APPLIANCES: [(&str, ApplianceCategory, f64, &str); 10] = [
    ("refrigerator", ApplianceCategory::Baseline, 120.0, "Fridge, runs around the clock"),
    ("freezer", ApplianceCategory::Baseline, 150.0, "Chest or upright freezer"),
    ("washing-machine", ApplianceCategory::WeeklyCycle, 1200.0, "Washing machine, 40 °C cycle"),
    ("dishwasher", ApplianceCategory::WeeklyCycle, 1300.0, "Dishwasher, eco programme"),
    ("tumble-dryer", ApplianceCategory::WeeklyCycle, 2500.0, "Condenser tumble dryer"),
    ("stove", ApplianceCategory::DailyCycle, 2000.0, "Electric hob"),
    ("oven", ApplianceCategory::DailyCycle, 2500.0, "Electric oven"),
    ("multimedia", ApplianceCategory::DailyCycle, 150.0, "TV, router, and consoles"),
    ("lighting", ApplianceCategory::DailyCycle, 60.0, "LED lighting of the whole home"),
    ("electric-vehicle", ApplianceCategory::EvCharging, 11_000.0, "Wallbox charging an EV"),
];

/// `(appliance, start, end, duration hours, frequency)`.
const WINDOWS: [(&str, (u32, u32), (u32, u32), f64, f64); 8] = [
    ("washing-machine", (9, 0), (11, 0), 2.0, 3.0),
    ("dishwasher", (20, 0), (22, 0), 2.0, 4.0),
    ("tumble-dryer", (11, 0), (13, 0), 1.5, 2.0),
    ("stove", (18, 0), (19, 0), 0.75, 1.0),
    ("oven", (17, 0), (18, 0), 1.0, 0.5),
    ("multimedia", (19, 0), (23, 0), 4.0, 1.0),
    ("lighting", (18, 0), (23, 0), 5.0, 1.0),
    ("electric-vehicle", (22, 0), (2, 0), 4.0, 3.0),
];

pub(super) fn definitions() -> Vec<ApplianceDefinition> {
    APPLIANCES
        .into_iter()
        .map(|(id, category, rated_power, description)| ApplianceDefinition {
            id: id.to_owned(),
            category,
            rated_power: Watts(rated_power),
            description: description.to_owned(),
        })
        .collect()
}

/// Usage profiles matching [`ApplianceCatalog::builtin`](super::ApplianceCatalog::builtin).
///
/// Baseline appliances have no profile since they are not gated by windows.
pub fn profiles() -> UsageProfiles {
    WINDOWS
        .into_iter()
        .map(|(appliance_id, (start_hour, start_min), (end_hour, end_min), hours, frequency)| {
            let window = UsageWindow {
                id: "window-1".to_owned(),
                start: clock_time(start_hour, start_min),
                end: clock_time(end_hour, end_min),
                duration: Hours::from(hours),
            };
            let charging = (appliance_id == "electric-vehicle").then_some(ChargingSettings {
                battery_capacity: KilowattHours::from(60.0),
                charger_power: Watts(11_000.0),
                standard_charge: false,
            });
            let profile = UsageProfile {
                appliance_id: appliance_id.to_owned(),
                windows: vec![window],
                frequency,
                charging,
            };
            (appliance_id.to_owned(), profile)
        })
        .collect()
}

fn clock_time(hour: u32, minute: u32) -> ClockTime {
    ClockTime::from_hm(hour, minute).unwrap_or(ClockTime::MIDNIGHT)
}
