mod clock;
mod profile;
mod window;

use std::collections::BTreeMap;

pub use self::{
    clock::ClockTime,
    profile::{ChargingSettings, UsageProfile},
    window::UsageWindow,
};

/// Usage profiles keyed by the appliance id.
pub type UsageProfiles = BTreeMap<String, UsageProfile>;
