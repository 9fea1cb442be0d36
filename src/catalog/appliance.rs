use serde::{Deserialize, Serialize};

use crate::{
    catalog::ApplianceCategory,
    error::{Field, Result, ensure_non_negative},
    quantity::power::{Kilowatts, Watts},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct ApplianceDefinition {
    #[builder(into)]
    pub id: String,

    pub category: ApplianceCategory,

    #[serde(rename = "rated_power_watts")]
    pub rated_power: Watts,

    #[builder(into, default)]
    #[serde(default)]
    pub description: String,
}

impl ApplianceDefinition {
    pub fn validate(&self) -> Result {
        ensure_non_negative(&self.id, Field::RatedPower, self.rated_power.0)
    }

    pub fn rated_kilowatts(&self) -> Kilowatts {
        Kilowatts::from(self.rated_power)
    }
}
