//! Report aggregate and its display projection.

use serde::{Deserialize, Serialize};

use super::{Emotion, RiskTier};
use crate::domain::foundation::Timestamp;

/// Outcome of one evaluation.
///
/// The recommendation and visible panels are derived from the tier, never
/// stored separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    emotion: Emotion,
    risk_tier: RiskTier,
    generated_at: Timestamp,
}

impl Report {
    pub fn new(emotion: Emotion, risk_tier: RiskTier) -> Self {
        Self::generated_at(emotion, risk_tier, Timestamp::now())
    }

    pub fn generated_at(emotion: Emotion, risk_tier: RiskTier, at: Timestamp) -> Self {
        Self {
            emotion,
            risk_tier,
            generated_at: at,
        }
    }

    pub fn emotion(&self) -> Emotion {
        self.emotion
    }

    pub fn risk_tier(&self) -> RiskTier {
        self.risk_tier
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.generated_at
    }

    pub fn recommendation(&self) -> &'static str {
        self.risk_tier.recommendation()
    }

    /// Projection consumed by the display surface.
    pub fn view(&self) -> ReportView {
        ReportView::from(self)
    }
}

/// Display DTO for a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportView {
    pub emotion: String,
    pub risk_tier: String,
    pub recommendation: String,
    pub show_calming_resources: bool,
    pub show_mission_control_alert: bool,
    pub generated_at: String,
}

impl From<&Report> for ReportView {
    fn from(report: &Report) -> Self {
        let tier = report.risk_tier();
        Self {
            emotion: report.emotion().to_string(),
            risk_tier: tier.to_string(),
            recommendation: tier.recommendation().to_string(),
            show_calming_resources: tier.shows_calming_resources(),
            show_mission_control_alert: tier.shows_mission_control_alert(),
            generated_at: report.timestamp().format_long(),
        }
    }
}
