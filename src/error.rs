use std::fmt::{Display, Formatter};

/// Errors raised by the mutating operations on the catalog and the usage profiles.
///
/// The calculations themselves never fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("`{field}` of `{appliance_id}` must not be negative, got {value}")]
    Validation { appliance_id: String, field: Field, value: f64 },

    #[error("`{appliance_id}` must keep at least one usage window")]
    LastWindow { appliance_id: String },

    #[error("unknown appliance `{0}`")]
    UnknownAppliance(String),

    #[error("`{appliance_id}` has no usage window `{window_id}`")]
    UnknownWindow { appliance_id: String, window_id: String },

    #[error("appliance `{0}` already exists")]
    DuplicateAppliance(String),

    #[error("`{appliance_id}` already has a usage window `{window_id}`")]
    DuplicateWindow { appliance_id: String, window_id: String },

    #[error("invalid clock time `{0}`, expected `HH:MM`")]
    InvalidClockTime(String),

    #[error("invalid date `{0}`, expected `DD/MM/YYYY`")]
    InvalidDate(String),
}

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Numeric input that is subject to the non-negativity check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Field {
    RatedPower,
    Duration,
    Frequency,
    BatteryCapacity,
    ChargerPower,
    Price,
    ConversionFactor,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::RatedPower => "rated power",
            Self::Duration => "duration",
            Self::Frequency => "frequency",
            Self::BatteryCapacity => "battery capacity",
            Self::ChargerPower => "charger power",
            Self::Price => "price",
            Self::ConversionFactor => "conversion factor",
        })
    }
}

/// Reject negative (and NaN) values of the `field`.
pub fn ensure_non_negative(appliance_id: &str, field: Field, value: f64) -> Result {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::Validation { appliance_id: appliance_id.to_owned(), field, value })
    }
}
