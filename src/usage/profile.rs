use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Field, Result, ensure_non_negative},
    quantity::{energy::KilowattHours, power::Watts, time::Hours},
    usage::{ClockTime, UsageWindow},
};

/// Extra settings of an EV charging appliance.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChargingSettings {
    #[serde(rename = "battery_capacity_kwh")]
    pub battery_capacity: KilowattHours,

    #[serde(rename = "charger_power_watts")]
    pub charger_power: Watts,

    /// Charge the whole battery capacity per session instead of charger power × duration.
    #[serde(rename = "standard_charge", default)]
    pub standard_charge: bool,
}

/// How an appliance is used.
#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct UsageProfile {
    #[builder(into)]
    pub appliance_id: String,

    /// Insertion order is kept for display, the calculations do not depend on it.
    #[builder(default)]
    pub windows: Vec<UsageWindow>,

    /// Uses per day or per week, depending on the appliance category.
    #[builder(default)]
    pub frequency: f64,

    pub charging: Option<ChargingSettings>,
}

impl UsageProfile {
    /// Sum of the entered window durations.
    pub fn total_duration(&self) -> Hours {
        self.windows.iter().map(|window| window.duration).sum()
    }

    pub fn window(&self, window_id: &str) -> Option<&UsageWindow> {
        self.windows.iter().find(|window| window.id == window_id)
    }

    /// Check every numeric input.
    pub fn validate(&self) -> Result {
        ensure_non_negative(&self.appliance_id, Field::Frequency, self.frequency)?;
        for window in &self.windows {
            ensure_non_negative(&self.appliance_id, Field::Duration, window.duration.0)?;
        }
        if let Some(charging) = &self.charging {
            ensure_non_negative(
                &self.appliance_id,
                Field::BatteryCapacity,
                charging.battery_capacity.0,
            )?;
            ensure_non_negative(&self.appliance_id, Field::ChargerPower, charging.charger_power.0)?;
        }
        Ok(())
    }

    /// Append a new one-hour window starting at midnight and return its id.
    pub fn add_window(&mut self) -> &str {
        let id = (self.windows.len() + 1..)
            .map(|index| format!("window-{index}"))
            .find(|id| self.window(id).is_none())
            .unwrap_or_default();
        self.windows.push(UsageWindow {
            id,
            start: ClockTime::MIDNIGHT,
            end: ClockTime::from_hm(1, 0).unwrap_or(ClockTime::MIDNIGHT),
            duration: Hours::ONE,
        });
        &self.windows[self.windows.len() - 1].id
    }

    /// Append the window as is.
    pub fn push_window(&mut self, window: UsageWindow) -> Result {
        ensure_non_negative(&self.appliance_id, Field::Duration, window.duration.0)?;
        if self.window(&window.id).is_some() {
            return Err(Error::DuplicateWindow {
                appliance_id: self.appliance_id.clone(),
                window_id: window.id,
            });
        }
        self.windows.push(window);
        Ok(())
    }

    /// Remove the window unless it is the last one.
    pub fn remove_window(&mut self, window_id: &str) -> Result<UsageWindow> {
        let index = self.window_index(window_id)?;
        if self.windows.len() == 1 {
            return Err(Error::LastWindow { appliance_id: self.appliance_id.clone() });
        }
        Ok(self.windows.remove(index))
    }

    pub fn set_window_times(
        &mut self,
        window_id: &str,
        start: ClockTime,
        end: ClockTime,
    ) -> Result {
        let index = self.window_index(window_id)?;
        let window = &mut self.windows[index];
        window.start = start;
        window.end = end;
        Ok(())
    }

    pub fn set_window_duration(&mut self, window_id: &str, duration: Hours) -> Result {
        ensure_non_negative(&self.appliance_id, Field::Duration, duration.0)?;
        let index = self.window_index(window_id)?;
        self.windows[index].duration = duration;
        Ok(())
    }

    pub fn set_frequency(&mut self, frequency: f64) -> Result {
        ensure_non_negative(&self.appliance_id, Field::Frequency, frequency)?;
        self.frequency = frequency;
        Ok(())
    }

    pub fn set_battery_capacity(&mut self, battery_capacity: KilowattHours) -> Result {
        ensure_non_negative(&self.appliance_id, Field::BatteryCapacity, battery_capacity.0)?;
        self.charging_mut().battery_capacity = battery_capacity;
        Ok(())
    }

    pub fn set_charger_power(&mut self, charger_power: Watts) -> Result {
        ensure_non_negative(&self.appliance_id, Field::ChargerPower, charger_power.0)?;
        self.charging_mut().charger_power = charger_power;
        Ok(())
    }

    pub fn set_standard_charge(&mut self, standard_charge: bool) {
        self.charging_mut().standard_charge = standard_charge;
    }

    fn charging_mut(&mut self) -> &mut ChargingSettings {
        self.charging.get_or_insert(ChargingSettings {
            battery_capacity: KilowattHours::ZERO,
            charger_power: Watts::ZERO,
            standard_charge: false,
        })
    }

    fn window_index(&self, window_id: &str) -> Result<usize> {
        self.windows.iter().position(|window| window.id == window_id).ok_or_else(|| {
            Error::UnknownWindow {
                appliance_id: self.appliance_id.clone(),
                window_id: window_id.to_owned(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn washing_machine() -> UsageProfile {
        UsageProfile::builder()
            .appliance_id("washing-machine")
            .windows(vec![
                UsageWindow::builder()
                    .id("morning")
                    .start("08:00".parse().unwrap())
                    .end("09:00".parse().unwrap())
                    .duration(Hours::ONE)
                    .build(),
            ])
            .frequency(2.0)
            .build()
    }

    #[test]
    fn test_total_duration() {
        let mut profile = washing_machine();
        profile.add_window();
        profile.set_window_duration("window-2", Hours::from(0.5)).unwrap();
        assert_abs_diff_eq!(profile.total_duration().0, 1.5);
    }

    #[test]
    fn test_add_window_unique_ids() {
        let mut profile = washing_machine();
        assert_eq!(profile.add_window(), "window-2");
        profile.remove_window("morning").unwrap();
        assert_eq!(profile.add_window(), "window-3");
        assert_eq!(profile.windows.len(), 2);
    }

    #[test]
    fn test_remove_last_window_rejected() {
        let mut profile = washing_machine();
        assert_eq!(
            profile.remove_window("morning"),
            Err(Error::LastWindow { appliance_id: "washing-machine".to_owned() })
        );
        assert_eq!(profile.windows.len(), 1);
    }

    #[test]
    fn test_remove_unknown_window() {
        let mut profile = washing_machine();
        assert!(matches!(profile.remove_window("night"), Err(Error::UnknownWindow { .. })));
    }

    #[test]
    fn test_negative_inputs_do_not_mutate() {
        let mut profile = washing_machine();
        let original = profile.clone();
        assert!(profile.set_frequency(-1.0).is_err());
        assert!(profile.set_window_duration("morning", Hours::from(-2.0)).is_err());
        assert!(profile.set_battery_capacity(KilowattHours::from(-60.0)).is_err());
        assert!(profile.set_charger_power(Watts(-11_000.0)).is_err());
        assert_eq!(profile, original);
    }

    #[test]
    fn test_charging_settings() {
        let mut profile = washing_machine();
        profile.set_battery_capacity(KilowattHours::from(60.0)).unwrap();
        profile.set_standard_charge(true);
        let charging = profile.charging.unwrap();
        assert_eq!(charging.battery_capacity, KilowattHours::from(60.0));
        assert_eq!(charging.charger_power, Watts::ZERO);
        assert!(charging.standard_charge);
    }

    #[test]
    fn test_validate() {
        let mut profile = washing_machine();
        assert!(profile.validate().is_ok());
        profile.frequency = -3.0;
        assert!(matches!(
            profile.validate(),
            Err(Error::Validation { field: Field::Frequency, .. })
        ));
    }

    #[test]
    fn test_push_duplicate_window() {
        let mut profile = washing_machine();
        let duplicate = profile.windows[0].clone();
        assert!(matches!(profile.push_window(duplicate), Err(Error::DuplicateWindow { .. })));
    }
}
