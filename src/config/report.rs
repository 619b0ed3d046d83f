//! Report generator configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::report::DEFAULT_SLEEP_QUALITY_THRESHOLD;

/// Placeholder report policy settings
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Sleep-quality ratings below this count as a stress signal
    #[serde(default = "default_threshold")]
    pub sleep_quality_threshold: i64,

    /// Fixed RNG seed for reproducible reports (entropy when unset)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl ReportConfig {
    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=10).contains(&self.sleep_quality_threshold) {
            return Err(ValidationError::InvalidSleepQualityThreshold);
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sleep_quality_threshold: default_threshold(),
            seed: None,
        }
    }
}

fn default_threshold() -> i64 {
    DEFAULT_SLEEP_QUALITY_THRESHOLD
}
