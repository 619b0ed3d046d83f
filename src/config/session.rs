//! Capture session configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::ports::CaptureConstraints;

const MAX_TICK_INTERVAL_MS: u64 = 10_000;

/// Capture window and countdown settings
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Length of the capture window in countdown seconds
    #[serde(default = "default_capture_duration")]
    pub capture_duration_secs: u64,

    /// Wall-clock milliseconds per countdown second
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,

    /// Ask the capture device for video
    #[serde(default = "default_true")]
    pub request_video: bool,

    /// Ask the capture device for audio
    #[serde(default = "default_true")]
    pub request_audio: bool,
}

impl SessionConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn constraints(&self) -> CaptureConstraints {
        CaptureConstraints {
            video: self.request_video,
            audio: self.request_audio,
        }
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.capture_duration_secs == 0 {
            return Err(ValidationError::InvalidCaptureDuration);
        }
        if self.tick_interval_ms == 0 || self.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(ValidationError::InvalidTickInterval);
        }
        if !self.request_video && !self.request_audio {
            return Err(ValidationError::NothingToCapture);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capture_duration_secs: default_capture_duration(),
            tick_interval_ms: default_tick_interval(),
            request_video: true,
            request_audio: true,
        }
    }
}

fn default_capture_duration() -> u64 {
    45
}

fn default_tick_interval() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}
