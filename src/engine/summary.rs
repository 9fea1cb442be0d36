use tracing::instrument;

use crate::{
    catalog::{ApplianceCatalog, ApplianceCategory},
    engine::cost::ApplianceCostResult,
    quantity::{cost::Cost, power::Watts},
};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Summary {
    /// Annual cost of the around-the-clock appliances.
    pub baseline_cost: Cost,

    /// Annual cost of everything else.
    pub dynamic_cost: Cost,

    pub total_cost: Cost,

    /// Rated power of every configured appliance, enabled or not.
    pub total_connected_wattage: Watts,
}

/// Roll the appliance costs up.
///
/// The costs are attributed to the baseline or dynamic bucket by the category the appliance
/// has in `all_appliances`. Costs of appliances missing there fall into the dynamic bucket.
#[instrument(skip_all, fields(n_costs = costs.len(), n_appliances = all_appliances.len()))]
pub fn summarize(costs: &[ApplianceCostResult], all_appliances: &ApplianceCatalog) -> Summary {
    let (baseline_cost, dynamic_cost) =
        costs.iter().fold((Cost::ZERO, Cost::ZERO), |(baseline, dynamic), result| {
            let is_baseline = all_appliances
                .get(&result.appliance_id)
                .is_some_and(|appliance| appliance.category == ApplianceCategory::Baseline);
            if is_baseline {
                (baseline + result.annual_cost, dynamic)
            } else {
                (baseline, dynamic + result.annual_cost)
            }
        });
    Summary {
        baseline_cost,
        dynamic_cost,
        total_cost: baseline_cost + dynamic_cost,
        total_connected_wattage: all_appliances.iter().map(|appliance| appliance.rated_power).sum(),
    }
}
