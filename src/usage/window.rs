use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::{quantity::time::Hours, usage::ClockTime};

/// Clock-time interval during which an appliance runs.
///
/// An end hour before the start hour wraps around midnight. The duration is entered
/// independently and is not derived from the clock times: the load curve follows the clock
/// times while the cost follows the duration.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct UsageWindow {
    #[builder(into)]
    pub id: String,

    #[serde_as(as = "DisplayFromStr")]
    pub start: ClockTime,

    #[serde_as(as = "DisplayFromStr")]
    pub end: ClockTime,

    #[serde(rename = "duration_hours")]
    pub duration: Hours,
}

impl UsageWindow {
    /// Hours of the day (`0..24`) this window lights up in the load curve.
    ///
    /// A partially covered end hour counts as a whole one. Wrapping is decided on the whole
    /// hours, so `10:30–10:15` lights hour 10 only.
    pub fn hours(&self) -> impl Iterator<Item = usize> + use<> {
        let start_hour = self.start.hour();
        let mut end_hour = self.end.hour_ceil();
        if end_hour < start_hour {
            end_hour += 24;
        }
        (start_hour..end_hour).map(|hour| hour % 24)
    }
}
