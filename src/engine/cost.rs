use tracing::{debug, instrument};

use crate::{
    catalog::{ApplianceCatalog, ApplianceCategory, ApplianceDefinition},
    quantity::{
        cost::Cost,
        energy::KilowattHours,
        power::Kilowatts,
        rate::KilowattHourRate,
        time::Hours,
    },
    usage::{UsageProfile, UsageProfiles},
};

#[derive(Clone, Debug, PartialEq)]
pub struct ApplianceCostResult {
    pub appliance_id: String,

    /// Euro per year.
    pub annual_cost: Cost,
}

/// Annual cost of running the appliance at the fixed price.
///
/// The cost follows the entered window durations, not the window clock times.
pub fn compute_appliance_cost(
    appliance: &ApplianceDefinition,
    profile: Option<&UsageProfile>,
    rate: KilowattHourRate,
) -> Cost {
    annual_energy(appliance, profile) * rate
}

/// Annual cost of every appliance in the catalog, in catalog order.
#[instrument(skip_all, fields(n_appliances = catalog.len(), rate = %rate))]
pub fn compute_costs(
    catalog: &ApplianceCatalog,
    profiles: &UsageProfiles,
    rate: KilowattHourRate,
) -> Vec<ApplianceCostResult> {
    catalog
        .iter()
        .map(|appliance| {
            let annual_cost = compute_appliance_cost(appliance, profiles.get(&appliance.id), rate);
            debug!(appliance_id = %appliance.id, %annual_cost);
            ApplianceCostResult { appliance_id: appliance.id.clone(), annual_cost }
        })
        .collect()
}

fn annual_energy(appliance: &ApplianceDefinition, profile: Option<&UsageProfile>) -> KilowattHours {
    let Some(period) = appliance.category.frequency_period() else {
        // Baseline, runs around the clock:
        return appliance.rated_kilowatts() * Hours::YEAR;
    };
    let Some(profile) = profile else {
        return KilowattHours::ZERO;
    };
    let total_duration = profile.total_duration();
    if total_duration <= Hours::ZERO {
        return KilowattHours::ZERO;
    }
    let uses_per_year = profile.frequency * period.per_year();

    match (appliance.category, profile.charging) {
        (ApplianceCategory::EvCharging, Some(charging)) if charging.standard_charge => {
            charging.battery_capacity * uses_per_year
        }
        (ApplianceCategory::EvCharging, Some(charging)) => {
            Kilowatts::from(charging.charger_power) * total_duration * uses_per_year
        }
        _ => appliance.rated_kilowatts() * total_duration * uses_per_year,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        quantity::{Quantity, power::Watts},
        usage::{ChargingSettings, UsageWindow},
    };

    const PRICE: KilowattHourRate = Quantity(0.3);

    fn appliance(id: &str, category: ApplianceCategory, watts: f64) -> ApplianceDefinition {
        ApplianceDefinition::builder().id(id).category(category).rated_power(Watts(watts)).build()
    }

    fn profile(appliance_id: &str, durations: &[f64], frequency: f64) -> UsageProfile {
        let windows = durations
            .iter()
            .enumerate()
            .map(|(index, duration)| {
                UsageWindow::builder()
                    .id(format!("window-{index}"))
                    .start("10:00".parse().unwrap())
                    .end("11:00".parse().unwrap())
                    .duration(Hours::from(*duration))
                    .build()
            })
            .collect();
        UsageProfile::builder()
            .appliance_id(appliance_id)
            .windows(windows)
            .frequency(frequency)
            .build()
    }

    fn ev_profile(standard_charge: bool) -> UsageProfile {
        let mut profile = profile("ev", &[4.0], 3.0);
        profile.charging = Some(ChargingSettings {
            battery_capacity: KilowattHours::from(60.0),
            charger_power: Watts(11_000.0),
            standard_charge,
        });
        profile
    }

    #[test]
    fn test_baseline_fridge() {
        let fridge = appliance("fridge", ApplianceCategory::Baseline, 120.0);
        assert_abs_diff_eq!(compute_appliance_cost(&fridge, None, PRICE).0, 315.36, epsilon = 1e-9);
    }

    #[test]
    fn test_baseline_formula() {
        for watts in [0.0, 1.0, 75.5, 120.0, 3000.0] {
            for price in [0.0, 0.1, 0.3, 0.457] {
                let appliance = appliance("a", ApplianceCategory::Baseline, watts);
                let cost = compute_appliance_cost(&appliance, None, KilowattHourRate::from(price));
                assert_abs_diff_eq!(cost.0, watts * price * 8760.0 / 1000.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_baseline_ignores_profile() {
        let fridge = appliance("fridge", ApplianceCategory::Baseline, 120.0);
        let profile = profile("fridge", &[0.0], 0.0);
        assert_abs_diff_eq!(
            compute_appliance_cost(&fridge, Some(&profile), PRICE).0,
            315.36,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_weekly_cycle_washing_machine() {
        let washer = appliance("washing-machine", ApplianceCategory::WeeklyCycle, 1200.0);
        let profile = profile("washing-machine", &[1.0], 2.0);
        assert_abs_diff_eq!(
            compute_appliance_cost(&washer, Some(&profile), PRICE).0,
            37.44,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_weekly_cycle_is_linear() {
        let washer = appliance("washing-machine", ApplianceCategory::WeeklyCycle, 1200.0);
        let base = compute_appliance_cost(&washer, Some(&profile("w", &[1.5], 2.0)), PRICE).0;
        let double_duration =
            compute_appliance_cost(&washer, Some(&profile("w", &[1.5, 1.5], 2.0)), PRICE).0;
        let double_frequency =
            compute_appliance_cost(&washer, Some(&profile("w", &[1.5], 4.0)), PRICE).0;
        let double_price =
            compute_appliance_cost(&washer, Some(&profile("w", &[1.5], 2.0)), PRICE * 2.0).0;
        assert_abs_diff_eq!(double_duration, 2.0 * base, epsilon = 1e-9);
        assert_abs_diff_eq!(double_frequency, 2.0 * base, epsilon = 1e-9);
        assert_abs_diff_eq!(double_price, 2.0 * base, epsilon = 1e-9);
    }

    #[test]
    fn test_daily_cycle() {
        let stove = appliance("stove", ApplianceCategory::DailyCycle, 2000.0);
        let profile = profile("stove", &[0.5, 0.25], 1.0);
        // 2 kW × 0.75 h × 1/day × 365 × 0.3 €/kWh:
        assert_abs_diff_eq!(
            compute_appliance_cost(&stove, Some(&profile), PRICE).0,
            164.25,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_ev_standard_charge() {
        let ev = appliance("ev", ApplianceCategory::EvCharging, 11_000.0);
        assert_abs_diff_eq!(
            compute_appliance_cost(&ev, Some(&ev_profile(true)), PRICE).0,
            2808.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_ev_charger_power() {
        let ev = appliance("ev", ApplianceCategory::EvCharging, 7400.0);
        // 11 kW × 4 h × 3/week × 52 × 0.3 €/kWh:
        assert_abs_diff_eq!(
            compute_appliance_cost(&ev, Some(&ev_profile(false)), PRICE).0,
            2059.2,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_duration_costs_nothing() {
        let washer = appliance("washing-machine", ApplianceCategory::WeeklyCycle, 1200.0);
        let profile = profile("washing-machine", &[0.0, 0.0], 2.0);
        assert_eq!(compute_appliance_cost(&washer, Some(&profile), PRICE), Cost::ZERO);
        assert_eq!(compute_appliance_cost(&washer, None, PRICE), Cost::ZERO);

        let ev = appliance("ev", ApplianceCategory::EvCharging, 11_000.0);
        let mut ev_profile = ev_profile(true);
        ev_profile.windows[0].duration = Hours::ZERO;
        assert_eq!(compute_appliance_cost(&ev, Some(&ev_profile), PRICE), Cost::ZERO);
    }

    #[test]
    fn test_compute_costs_in_catalog_order() {
        let catalog = ApplianceCatalog::try_from_definitions([
            appliance("washing-machine", ApplianceCategory::WeeklyCycle, 1200.0),
            appliance("fridge", ApplianceCategory::Baseline, 120.0),
        ])
        .unwrap();
        let profiles = UsageProfiles::from([(
            "washing-machine".to_owned(),
            profile("washing-machine", &[1.0], 2.0),
        )]);
        let costs = compute_costs(&catalog, &profiles, PRICE);
        assert_eq!(costs.len(), 2);
        assert_eq!(costs[0].appliance_id, "washing-machine");
        assert_abs_diff_eq!(costs[0].annual_cost.0, 37.44, epsilon = 1e-9);
        assert_eq!(costs[1].appliance_id, "fridge");
        assert_abs_diff_eq!(costs[1].annual_cost.0, 315.36, epsilon = 1e-9);
        assert_eq!(costs, compute_costs(&catalog, &profiles, PRICE));
    }
}
