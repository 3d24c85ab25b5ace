//! Emergency priority tier shared by the detour synthesizer and ETA model.
//!
//! Higher urgency means a tighter detour bow and a smaller ETA multiplier
//! (emergency vehicles are assumed to move faster than regular traffic).

use std::str::FromStr;

use crate::CoreError;

/// Urgency of the dispatch request.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PriorityClass {
    #[default]
    High,
    Medium,
    Low,
}

impl PriorityClass {
    pub const ALL: [PriorityClass; 3] =
        [PriorityClass::High, PriorityClass::Medium, PriorityClass::Low];

    /// Peak lateral bow of a synthesized detour, in degrees of longitude.
    pub fn curvature_deg(self) -> f64 {
        match self {
            PriorityClass::High   => 0.001,
            PriorityClass::Medium => 0.002,
            PriorityClass::Low    => 0.003,
        }
    }

    /// Multiplier applied to a baseline ETA.
    pub fn eta_factor(self) -> f64 {
        match self {
            PriorityClass::High   => 0.7,
            PriorityClass::Medium => 0.85,
            PriorityClass::Low    => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriorityClass::High   => "high",
            PriorityClass::Medium => "medium",
            PriorityClass::Low    => "low",
        }
    }
}

impl std::fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high"   => Ok(PriorityClass::High),
            "medium" => Ok(PriorityClass::Medium),
            "low"    => Ok(PriorityClass::Low),
            other    => Err(CoreError::Parse(format!("unknown priority class `{other}`"))),
        }
    }
}
