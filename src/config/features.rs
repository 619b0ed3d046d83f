//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Pre-fill revisited batches with answers already given
    #[serde(default = "default_restore_previous_answers")]
    pub restore_previous_answers: bool,

    /// Make the simulated camera refuse access (exercises the degraded path)
    #[serde(default)]
    pub simulate_camera_denied: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            restore_previous_answers: default_restore_previous_answers(),
            simulate_camera_denied: false,
        }
    }
}

fn default_restore_previous_answers() -> bool {
    true
}
