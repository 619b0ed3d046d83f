//! CaptureDevice port - acquisition of the camera/microphone stream.
//!
//! Acquisition is best-effort from the caller's point of view: a failed
//! acquire degrades the session, it never blocks it.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Which media a capture session asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConstraints {
    pub video: bool,
    pub audio: bool,
}

impl CaptureConstraints {
    pub fn audio_video() -> Self {
        Self {
            video: true,
            audio: true,
        }
    }

    /// Track kinds these constraints request, video first.
    pub fn requested_tracks(&self) -> Vec<TrackKind> {
        let mut tracks = Vec::with_capacity(2);
        if self.video {
            tracks.push(TrackKind::Video);
        }
        if self.audio {
            tracks.push(TrackKind::Audio);
        }
        tracks
    }
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self::audio_video()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    Video,
    Audio,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackKind::Video => f.write_str("video"),
            TrackKind::Audio => f.write_str("audio"),
        }
    }
}

/// Errors from capture acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Camera/microphone access was denied")]
    PermissionDenied,

    #[error("Capture device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("Capture requested neither video nor audio")]
    NothingRequested,
}

impl From<CaptureError> for DomainError {
    fn from(err: CaptureError) -> Self {
        let reason = match &err {
            CaptureError::PermissionDenied => "permission_denied",
            CaptureError::DeviceUnavailable(_) => "device_unavailable",
            CaptureError::NothingRequested => "nothing_requested",
        };
        DomainError::new(ErrorCode::CaptureUnavailable, err.to_string()).with_detail("reason", reason)
    }
}

/// A live capture stream.
///
/// Implementations must stop every track when `stop` is called and when the
/// stream is dropped.
pub trait CaptureStream: Send + Sync + fmt::Debug {
    fn tracks(&self) -> Vec<TrackKind>;

    /// Stops all tracks. Calling twice is harmless.
    fn stop(&mut self);

    fn is_active(&self) -> bool;
}

/// Port for acquiring a capture stream.
#[async_trait]
pub trait CaptureDevice: Send + Sync {
    async fn acquire(
        &self,
        constraints: CaptureConstraints,
    ) -> Result<Box<dyn CaptureStream>, CaptureError>;
}
