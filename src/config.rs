//! Household and price files.

use std::{collections::BTreeMap, fs, path::Path};

use enumset::EnumSet;
use serde::Deserialize;

use crate::{
    catalog::{ApplianceCatalog, ApplianceCategory, ApplianceDefinition, Selection, defaults},
    error::{self, Field, ensure_non_negative},
    prelude::*,
    quantity::{energy::KilowattHours, power::Watts, rate::KilowattHourRate},
    tariff::{PriceConversion, PriceDataset},
    usage::{ChargingSettings, UsageProfile, UsageProfiles, UsageWindow},
};

/// Validated household: the appliances, how they are used, and the tariff settings.
#[must_use]
#[derive(Debug)]
pub struct Household {
    pub catalog: ApplianceCatalog,
    pub profiles: UsageProfiles,
    pub selection: Selection,
    pub tariff: TariffSettings,
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TariffSettings {
    /// Fixed price used when there are no dynamic prices for the date.
    #[serde(default = "TariffSettings::default_fallback_rate")]
    pub fallback_rate: KilowattHourRate,

    #[serde(default)]
    pub conversion_factor: PriceConversion,
}

impl TariffSettings {
    fn default_fallback_rate() -> KilowattHourRate {
        KilowattHourRate::from(0.30)
    }

    /// Reject negative and NaN settings.
    pub fn validate(&self) -> error::Result {
        ensure_non_negative("tariff", Field::Price, self.fallback_rate.0)?;
        ensure_non_negative("tariff", Field::ConversionFactor, self.conversion_factor.0)
    }
}

impl Default for TariffSettings {
    fn default() -> Self {
        Self {
            fallback_rate: Self::default_fallback_rate(),
            conversion_factor: PriceConversion::default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct HouseholdFile {
    /// Custom appliances, or replacements of the built-in ones with the same id.
    #[serde(default)]
    appliances: Vec<ApplianceDefinition>,

    /// Built-in appliances to drop.
    #[serde(default)]
    removed: Vec<String>,

    /// Replacements of the built-in profiles.
    #[serde(default)]
    profiles: BTreeMap<String, ProfileEntry>,

    /// Enabled categories, all by default.
    enabled: Option<Vec<ApplianceCategory>>,

    #[serde(default)]
    disabled: Vec<String>,

    #[serde(default)]
    tariff: TariffSettings,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileEntry {
    #[serde(default)]
    frequency: f64,

    #[serde(default)]
    windows: Vec<UsageWindow>,

    battery_capacity_kwh: Option<KilowattHours>,

    charger_power_watts: Option<Watts>,

    #[serde(default)]
    standard_charge: bool,
}

impl Household {
    /// The built-in appliances with their default usage.
    pub fn builtin() -> Self {
        Self {
            catalog: ApplianceCatalog::builtin(),
            profiles: defaults::profiles(),
            selection: Selection::default(),
            tariff: TariffSettings::default(),
        }
    }

    #[instrument(skip_all, fields(path = %path.display()), name = "Reading the household…")]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("invalid household file `{}`", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: HouseholdFile = toml::from_str(contents).context("failed to parse TOML")?;
        let mut household = Self::builtin();

        for id in &file.removed {
            household.catalog = household.catalog.without_appliance(id)?;
            household.profiles.remove(id);
        }
        for definition in file.appliances {
            if household.catalog.contains(&definition.id) {
                debug!(id = %definition.id, "Replacing the built-in appliance");
                household.catalog = household.catalog.without_appliance(&definition.id)?;
            }
            household.catalog = household.catalog.with_appliance(definition)?;
        }
        for (appliance_id, entry) in file.profiles {
            let profile = entry.into_profile(&household.catalog, &appliance_id)?;
            household.profiles.insert(appliance_id, profile);
        }

        if let Some(enabled) = file.enabled {
            household.selection.categories = enabled.into_iter().collect::<EnumSet<_>>();
        }
        for id in &file.disabled {
            if !household.catalog.contains(id) {
                warn!(id = %id, "Disabling an unknown appliance");
            }
        }
        household.selection.disabled = file.disabled;

        file.tariff.validate()?;
        household.tariff = file.tariff;

        info!(
            n_appliances = household.catalog.len(),
            n_profiles = household.profiles.len(),
            "Loaded the household",
        );
        Ok(household)
    }
}

impl ProfileEntry {
    fn into_profile(
        self,
        catalog: &ApplianceCatalog,
        appliance_id: &str,
    ) -> error::Result<UsageProfile> {
        let appliance = catalog
            .get(appliance_id)
            .ok_or_else(|| error::Error::UnknownAppliance(appliance_id.to_owned()))?;
        if self.windows.is_empty() && !appliance.category.is_baseline() {
            return Err(error::Error::LastWindow { appliance_id: appliance_id.to_owned() });
        }

        // A missing charger power defaults to the rated power of the wallbox:
        let charging =
            (appliance.category == ApplianceCategory::EvCharging).then(|| ChargingSettings {
                battery_capacity: self.battery_capacity_kwh.unwrap_or(KilowattHours::ZERO),
                charger_power: self.charger_power_watts.unwrap_or(appliance.rated_power),
                standard_charge: self.standard_charge,
            });
        let mut profile = UsageProfile::builder()
            .appliance_id(appliance_id)
            .frequency(self.frequency)
            .maybe_charging(charging)
            .build();
        for window in self.windows {
            profile.push_window(window)?;
        }
        profile.validate()?;
        Ok(profile)
    }
}

#[instrument(skip_all, fields(path = %path.display()), name = "Reading the prices…")]
pub fn read_price_dataset(path: &Path) -> Result<PriceDataset> {
    let contents =
        fs::read(path).with_context(|| format!("failed to read `{}`", path.display()))?;
    let dataset: PriceDataset = serde_json::from_slice(&contents)
        .with_context(|| format!("invalid price dataset `{}`", path.display()))?;
    info!(n_days = dataset.len(), "Loaded the prices");
    Ok(dataset)
}
