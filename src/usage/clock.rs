use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use chrono::{NaiveTime, Timelike};

use crate::error::Error;

/// Wall-clock time of day in `HH:MM`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub const MIDNIGHT: Self = Self(NaiveTime::MIN);

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// The hour this time falls into.
    pub fn hour(self) -> usize {
        self.0.hour() as usize
    }

    /// The first full hour boundary at or after this time.
    ///
    /// `11:30` gives `12`, `11:00` gives `11`.
    pub fn hour_ceil(self) -> usize {
        self.hour() + usize::from(self.0.minute() != 0)
    }
}

impl FromStr for ClockTime {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(value.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| Error::InvalidClockTime(value.to_owned()))
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Debug for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
