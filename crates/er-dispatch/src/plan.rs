//! Results handed back to the UI layer.

use std::fmt;
use std::time::Duration;

use er_core::{GeoPoint, PriorityClass};

/// How long traffic markers stay on screen after a simulation.
pub const TRAFFIC_MARKER_TTL: Duration = Duration::from_secs(5);

/// Where the displayed path came from.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// The real driving route, tagged with the provider's name.
    Provider(String),
    /// A locally synthesized detour around blocked points.
    SimulatedDetour,
}

impl Algorithm {
    pub fn label(&self) -> &str {
        match self {
            Algorithm::Provider(name)  => name,
            Algorithm::SimulatedDetour => "Simulated (Detour)",
        }
    }
}

/// The outcome of `Session::calculate_route`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    pub path:        Vec<GeoPoint>,
    pub algorithm:   Algorithm,
    /// Route distance for provider routes; straight-line × detour factor for
    /// synthesized detours.
    pub distance_km: f64,
    /// Priority-scaled ETA.  Traffic simulation raises it in place.
    pub eta_minutes: f64,
    pub priority:    PriorityClass,
    /// Set once a traffic simulation has been applied to this plan.
    pub traffic_applied: bool,
}

impl RoutePlan {
    pub fn is_detour(&self) -> bool {
        matches!(self.algorithm, Algorithm::SimulatedDetour)
    }

    pub fn eta_label(&self) -> String {
        if self.traffic_applied {
            format!("ETA: {} Min (with traffic)", self.eta_minutes.round())
        } else {
            format!("ETA: {} Min", self.eta_minutes.round())
        }
    }
}

impl fmt::Display for RoutePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let distance = if self.is_detour() { "Distance (approx)" } else { "Distance" };
        writeln!(f, "Algorithm: {}", self.algorithm.label())?;
        writeln!(f, "{distance}: {:.2} km", self.distance_km)?;
        write!(f, "Priority: {}", self.priority.as_str().to_uppercase())?;
        if self.traffic_applied {
            write!(f, "\nNote: Simulated traffic delays added")?;
        }
        Ok(())
    }
}

/// Traffic markers placed by one `Session::simulate_traffic` call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficReport {
    /// Midpoints of the delayed segments, in path order.
    pub markers:     Vec<GeoPoint>,
    /// ETA after the delay, whole minutes.
    pub eta_minutes: f64,
}
