//! Household electricity load profile and cost calculation.
//!
//! Given an appliance catalog, usage profiles and a tariff, the [`engine`] computes a load
//! curve over a day, the annual cost per appliance, and a summary.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod prelude;
pub mod quantity;
pub mod tariff;
pub mod usage;
