//! Tunable constants for a planning session.

use er_route::DEFAULT_THRESHOLD_DEG;

use crate::{DispatchError, DispatchResult};

/// Session configuration.
///
/// Every field has a default, so a JSON config only needs the keys it wants
/// to override (with the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Blocked-point proximity threshold, degrees per axis.
    pub threshold_deg: f64,

    /// Multiplier from straight-line km to approximate detour km.
    pub detour_distance_factor: f64,

    /// Assumed speed along a synthesized detour, km/h.
    pub detour_speed_kmh: f64,

    /// Chance in `[0, 1]` that any one path segment gets a traffic marker.
    pub traffic_probability: f64,

    /// Minimum minutes added by a traffic simulation.
    pub traffic_delay_min: f64,

    /// Additional uniformly random minutes in `[0, spread)`.
    pub traffic_delay_spread: f64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            threshold_deg:          DEFAULT_THRESHOLD_DEG,
            detour_distance_factor: 1.4,
            detour_speed_kmh:       50.0,
            traffic_probability:    0.3,
            traffic_delay_min:      2.0,
            traffic_delay_spread:   5.0,
        }
    }
}

impl DispatchConfig {
    /// Reject values the planner cannot work with.
    pub fn validate(&self) -> DispatchResult<()> {
        let positive = [
            ("threshold_deg", self.threshold_deg),
            ("detour_distance_factor", self.detour_distance_factor),
            ("detour_speed_kmh", self.detour_speed_kmh),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(DispatchError::Config(format!("{name} must be positive, got {v}")));
            }
        }

        let non_negative = [
            ("traffic_delay_min", self.traffic_delay_min),
            ("traffic_delay_spread", self.traffic_delay_spread),
        ];
        for (name, v) in non_negative {
            if !(v.is_finite() && v >= 0.0) {
                return Err(DispatchError::Config(format!("{name} must be non-negative, got {v}")));
            }
        }

        if !(0.0..=1.0).contains(&self.traffic_probability) {
            return Err(DispatchError::Config(format!(
                "traffic_probability must be in [0, 1], got {}",
                self.traffic_probability
            )));
        }
        Ok(())
    }
}
