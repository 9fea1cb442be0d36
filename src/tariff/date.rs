use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

use chrono::{Local, NaiveDate};

use crate::error::Error;

const FORMAT: &str = "%d/%m/%Y";

/// Calendar date in the `DD/MM/YYYY` notation used by the price feed.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::From)]
pub struct PriceDate(pub NaiveDate);

impl PriceDate {
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }
}

impl FromStr for PriceDate {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(value.trim(), FORMAT)
            .map(Self)
            .map_err(|_| Error::InvalidDate(value.to_owned()))
    }
}

impl Display for PriceDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl Debug for PriceDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
