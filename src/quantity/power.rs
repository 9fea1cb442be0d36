use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use serde::{Deserialize, Serialize};

use crate::quantity::{Quantity, energy::KilowattHours, time::Hours};

pub type Kilowatts = Quantity<1, 0, 0>;

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kW", self.0)
    }
}

impl Debug for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}kW", self.0)
    }
}

impl Mul<Hours> for Kilowatts {
    type Output = KilowattHours;

    fn mul(self, rhs: Hours) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

/// Rated power as entered for an appliance.
#[derive(
    Copy,
    Clone,
    Default,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sum,
)]
#[serde(transparent)]
pub struct Watts(pub f64);

impl Watts {
    pub const ZERO: Self = Self(0.0);

    pub const fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl From<Watts> for Kilowatts {
    fn from(watts: Watts) -> Self {
        Quantity(watts.0 / 1000.0)
    }
}

impl Display for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} W", self.0)
    }
}

impl Debug for Watts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}W", self.0)
    }
}
