use std::cmp::Reverse;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;
use ordered_float::OrderedFloat;

use household_tariff::{
    catalog::{ApplianceCatalog, ApplianceCategory, Selection},
    engine::Report,
    quantity::cost::Cost,
    usage::UsageProfiles,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

const fn category_color(category: ApplianceCategory) -> Color {
    match category {
        ApplianceCategory::Baseline => Color::Blue,
        ApplianceCategory::WeeklyCycle => Color::DarkYellow,
        ApplianceCategory::DailyCycle => Color::Magenta,
        ApplianceCategory::EvCharging => Color::Green,
    }
}

/// Appliance costs, the most expensive first.
#[must_use]
pub fn build_costs_table(report: &Report, catalog: &ApplianceCatalog) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Appliance", "Category", "Rated power", "Annual cost"]);
    let costs = report.costs.iter().sorted_by_key(|cost| Reverse(OrderedFloat(cost.annual_cost.0)));
    for cost in costs {
        let Some(appliance) = catalog.get(&cost.appliance_id) else {
            continue;
        };
        table.add_row(vec![
            Cell::new(&appliance.id),
            Cell::new(appliance.category).fg(category_color(appliance.category)),
            Cell::new(appliance.rated_power).set_alignment(CellAlignment::Right),
            Cell::new(cost.annual_cost)
                .set_alignment(CellAlignment::Right)
                .fg(if cost.annual_cost > Cost::ZERO { Color::Reset } else { Color::DarkGrey }),
        ]);
    }
    table
}

#[must_use]
pub fn build_summary_table(report: &Report) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Tariff", "Annual rate", "Baseline", "Dynamic", "Total", "Connected"]);
    let summary = &report.summary;
    table.add_row(vec![
        Cell::new(if report.tariff.is_dynamic() { "dynamic" } else { "fixed" }),
        Cell::new(report.tariff.annual_rate()).set_alignment(CellAlignment::Right),
        Cell::new(summary.baseline_cost).set_alignment(CellAlignment::Right),
        Cell::new(summary.dynamic_cost).set_alignment(CellAlignment::Right),
        Cell::new(summary.total_cost)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total_connected_wattage).set_alignment(CellAlignment::Right),
    ]);
    table
}

#[must_use]
pub fn build_load_table(report: &Report) -> Table {
    let average_rate = report.tariff.average_rate();
    let peak_hour = report.load.peak().map(|(hour, _)| hour);

    let mut table = new_table();
    table.set_header(vec!["Start", "End", "Load", "Rate", "Cost", "Appliances"]);
    for (hour, (load, cost)) in report.load.iter().zip(report.hourly_costs).enumerate() {
        let rate = report.tariff.rate_at(hour);
        let mut load_cell = Cell::new(load.total).set_alignment(CellAlignment::Right);
        if Some(hour) == peak_hour {
            load_cell = load_cell.fg(Color::Red).add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            Cell::new(format!("{hour:02}:00")),
            Cell::new(format!("{:02}:00", (hour + 1) % 24)).add_attribute(Attribute::Dim),
            load_cell,
            Cell::new(rate).fg(if rate > average_rate { Color::Red } else { Color::Green }),
            Cell::new(cost).set_alignment(CellAlignment::Right),
            Cell::new(load.contributors.iter().join(", ")),
        ]);
    }
    table
}

#[must_use]
pub fn build_catalog_table(
    catalog: &ApplianceCatalog,
    profiles: &UsageProfiles,
    selection: &Selection,
) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Appliance",
        "Category",
        "Rated power",
        "Windows",
        "Duration",
        "Frequency",
        "Description",
    ]);
    for appliance in catalog {
        let profile = profiles.get(&appliance.id);
        let windows = profile
            .map(|profile| {
                profile
                    .windows
                    .iter()
                    .map(|window| format!("{}–{}", window.start, window.end))
                    .join(", ")
            })
            .unwrap_or_default();
        let duration =
            profile.map(|profile| profile.total_duration().to_string()).unwrap_or_default();
        let frequency = match (appliance.category.frequency_period(), profile) {
            (Some(period), Some(profile)) => format!("{} / {period:?}", profile.frequency),
            _ => String::new(),
        };
        let mut id_cell = Cell::new(&appliance.id);
        if !selection.is_enabled(appliance) {
            id_cell = id_cell.add_attribute(Attribute::CrossedOut).fg(Color::DarkGrey);
        }
        table.add_row(vec![
            id_cell,
            Cell::new(appliance.category).fg(category_color(appliance.category)),
            Cell::new(appliance.rated_power).set_alignment(CellAlignment::Right),
            Cell::new(windows),
            Cell::new(duration).set_alignment(CellAlignment::Right),
            Cell::new(frequency),
            Cell::new(&appliance.description).add_attribute(Attribute::Dim),
        ]);
    }
    table
}
