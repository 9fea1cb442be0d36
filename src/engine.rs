//! The calculation pipeline: catalog and usage profiles in, load curve and costs out.
//!
//! Every stage is a pure function of its inputs. Callers recompute the whole pipeline after
//! each change of the inputs.

pub mod cost;
pub mod load;
pub mod summary;

use bon::Builder;
use tracing::{info, instrument};

pub use self::{
    cost::{ApplianceCostResult, compute_appliance_cost, compute_costs},
    load::{HourLoad, HourlyLoad, compute_hourly_load},
    summary::{Summary, summarize},
};
use crate::{
    catalog::{ApplianceCatalog, Selection},
    quantity::{cost::Cost, time::Hours},
    tariff::TariffCurve,
    usage::UsageProfiles,
};

/// Everything the dashboard displays for one set of inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub tariff: TariffCurve,
    pub load: HourlyLoad,
    pub costs: Vec<ApplianceCostResult>,
    pub summary: Summary,

    /// Cost of each hour of the load curve at that hour's price, for visualization only.
    pub hourly_costs: [Cost; 24],
}

#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct Pipeline<'a> {
    catalog: &'a ApplianceCatalog,
    profiles: &'a UsageProfiles,
    tariff: &'a TariffCurve,

    /// Appliances taking part in the load curve and the costs, defaults to all of them.
    #[builder(default)]
    selection: Selection,
}

impl<S: pipeline_builder::IsComplete> PipelineBuilder<'_, S> {
    pub fn run(self) -> Report {
        self.build().run()
    }
}

impl Pipeline<'_> {
    #[instrument(
        skip_all,
        name = "Recomputing…",
        fields(n_appliances = self.catalog.len(), is_dynamic = self.tariff.is_dynamic()),
    )]
    fn run(self) -> Report {
        let selected = self.catalog.select(&self.selection);
        let load = compute_hourly_load(&selected, self.profiles);
        let costs = compute_costs(&selected, self.profiles, self.tariff.annual_rate());
        let summary = summarize(&costs, self.catalog);
        info!(
            n_selected = selected.len(),
            total_cost = %summary.total_cost,
            total_connected_wattage = %summary.total_connected_wattage,
            "Recomputed",
        );
        Report {
            tariff: *self.tariff,
            hourly_costs: hourly_cost(&load, self.tariff),
            load,
            costs,
            summary,
        }
    }
}

/// Recompute the report with every appliance enabled.
pub fn recompute(
    catalog: &ApplianceCatalog,
    profiles: &UsageProfiles,
    tariff: &TariffCurve,
) -> Report {
    Pipeline::builder().catalog(catalog).profiles(profiles).tariff(tariff).run()
}

/// Cost of every hour of the load curve at the hour's own price.
///
/// This uses the dynamic curve when there is one. Annual costs never do.
pub fn hourly_cost(load: &HourlyLoad, tariff: &TariffCurve) -> [Cost; 24] {
    std::array::from_fn(|hour| load[hour].total * Hours::ONE * tariff.rate_at(hour))
}
