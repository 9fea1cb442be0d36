//! Registry of appliance definitions.
//!
//! The catalog is a plain value: adding or removing an appliance returns a new catalog and
//! leaves the original untouched.

mod appliance;
mod category;
pub mod defaults;

use enumset::EnumSet;
use serde::{Deserialize, Serialize};

pub use self::{
    appliance::ApplianceDefinition,
    category::{ApplianceCategory, FrequencyPeriod},
};
use crate::{
    error::{Error, Field, Result, ensure_non_negative},
    quantity::power::Watts,
};

#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplianceCatalog(Vec<ApplianceDefinition>);

impl ApplianceCatalog {
    /// Build a catalog from definitions, checking id uniqueness and rated power.
    pub fn try_from_definitions(
        definitions: impl IntoIterator<Item = ApplianceDefinition>,
    ) -> Result<Self> {
        definitions.into_iter().try_fold(Self::default(), |catalog, definition| {
            catalog.with_appliance(definition)
        })
    }

    /// The default household appliances.
    pub fn builtin() -> Self {
        Self(defaults::definitions())
    }

    pub fn get(&self, id: &str) -> Option<&ApplianceDefinition> {
        self.0.iter().find(|definition| definition.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ApplianceDefinition> {
        self.0.iter()
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add a custom appliance.
    pub fn with_appliance(&self, definition: ApplianceDefinition) -> Result<Self> {
        definition.validate()?;
        if self.contains(&definition.id) {
            return Err(Error::DuplicateAppliance(definition.id));
        }
        let mut definitions = self.0.clone();
        definitions.push(definition);
        Ok(Self(definitions))
    }

    /// Remove an appliance by its id.
    pub fn without_appliance(&self, id: &str) -> Result<Self> {
        if !self.contains(id) {
            return Err(Error::UnknownAppliance(id.to_owned()));
        }
        Ok(Self(self.0.iter().filter(|definition| definition.id != id).cloned().collect()))
    }

    /// Change the rated power of an existing appliance.
    pub fn with_rated_power(&self, id: &str, rated_power: Watts) -> Result<Self> {
        ensure_non_negative(id, Field::RatedPower, rated_power.0)?;
        if !self.contains(id) {
            return Err(Error::UnknownAppliance(id.to_owned()));
        }
        let definitions = self
            .0
            .iter()
            .map(|definition| {
                if definition.id == id {
                    ApplianceDefinition { rated_power, ..definition.clone() }
                } else {
                    definition.clone()
                }
            })
            .collect();
        Ok(Self(definitions))
    }

    /// Keep only the appliances that are enabled for the calculation.
    pub fn select(&self, selection: &Selection) -> Self {
        Self(self.0.iter().filter(|definition| selection.is_enabled(definition)).cloned().collect())
    }
}

impl<'a> IntoIterator for &'a ApplianceCatalog {
    type Item = &'a ApplianceDefinition;
    type IntoIter = std::slice::Iter<'a, ApplianceDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Which appliances take part in the load and cost calculation.
///
/// Different dashboards differ only in this: some leave out EV charging, for example.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub categories: EnumSet<ApplianceCategory>,

    /// Individually switched off appliances.
    pub disabled: Vec<String>,
}

impl Default for Selection {
    fn default() -> Self {
        Self { categories: EnumSet::all(), disabled: Vec::new() }
    }
}

impl Selection {
    pub fn is_enabled(&self, definition: &ApplianceDefinition) -> bool {
        self.categories.contains(definition.category)
            && !self.disabled.iter().any(|id| *id == definition.id)
    }
}
