//! Drone physical model.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical constants of the (homogeneous) drone fleet.
///
/// # Defaults
///
/// | Field | Value |
/// |---|---|
/// | self weight | 6 kg |
/// | battery capacity | 504 Wh |
/// | output power | 1008 W |
/// | energy coefficient | 3.5 Wh/(km·kg) |
/// | service time | 0.05 h |
/// | max payload | 3 kg |
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DroneModel {
    /// Empty drone mass (kg).
    pub self_weight: f64,
    /// Battery capacity (Wh).
    pub battery_capacity: f64,
    /// Output power (W).
    pub output_power: f64,
    /// Energy coefficient (Wh per km per kg).
    pub energy_coeff: f64,
    /// Time spent serving each task (h).
    pub service_time: f64,
    /// Maximum carried load (kg).
    pub max_payload: f64,
}

impl Default for DroneModel {
    fn default() -> Self {
        Self {
            self_weight: 6.0,
            battery_capacity: 504.0,
            output_power: 1008.0,
            energy_coeff: 3.5,
            service_time: 0.05,
            max_payload: 3.0,
        }
    }
}

impl DroneModel {
    /// Flight time in hours over `distance` km while carrying `payload` kg.
    ///
    /// `t = d * (W0 + payload) * alpha / P`
    pub fn travel_time(&self, distance: f64, payload: f64) -> f64 {
        distance * (self.self_weight + payload) * self.energy_coeff / self.output_power
    }

    pub fn with_service_time(mut self, hours: f64) -> Self {
        self.service_time = hours;
        self
    }

    pub fn with_max_payload(mut self, kg: f64) -> Self {
        self.max_payload = kg;
        self
    }
}
