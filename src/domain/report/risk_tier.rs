//! Risk tier value object (Normal < Stressed < MissionRisk).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Severity of a check-in outcome. Ordering follows severity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    #[default]
    Normal,
    Stressed,
    MissionRisk,
}

impl RiskTier {
    /// Tiers a triggered assessment is drawn from.
    pub const ELEVATED: [RiskTier; 2] = [RiskTier::Stressed, RiskTier::MissionRisk];

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Normal => "Normal",
            RiskTier::Stressed => "Stressed",
            RiskTier::MissionRisk => "Mission Risk",
        }
    }

    /// Guidance text shown under the tier.
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskTier::Normal => {
                "You're in a good place. Keep up your routines and stay connected with your crew."
            }
            RiskTier::Stressed => {
                "Signs of stress detected. Try a short breathing exercise and take a break from your current task."
            }
            RiskTier::MissionRisk => {
                "Elevated risk detected. Please use the calming resources and contact Mission Control for support."
            }
        }
    }

    /// Whether the calming-resources panel accompanies this tier.
    pub fn shows_calming_resources(&self) -> bool {
        *self >= RiskTier::Stressed
    }

    /// Whether the mission-control alert panel accompanies this tier.
    pub fn shows_mission_control_alert(&self) -> bool {
        *self == RiskTier::MissionRisk
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(RiskTier::Normal),
            "stressed" => Ok(RiskTier::Stressed),
            "mission risk" | "mission_risk" | "missionrisk" => Ok(RiskTier::MissionRisk),
            other => Err(ValidationError::invalid_format(
                "risk_tier",
                format!("unknown tier '{}'", other),
            )),
        }
    }
}
