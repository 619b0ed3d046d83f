//! Simulated capture device.
//!
//! Stands in for camera/microphone hardware. Streams it hands out are
//! tracked so callers (and tests) can confirm every track was stopped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{CaptureConstraints, CaptureDevice, CaptureError, CaptureStream, TrackKind};

/// Observer for one handed-out stream.
#[derive(Debug, Clone)]
pub struct IssuedStream {
    tracks: Vec<TrackKind>,
    active: Arc<AtomicBool>,
}

impl IssuedStream {
    pub fn tracks(&self) -> &[TrackKind] {
        &self.tracks
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// In-process `CaptureDevice` that grants or denies every request.
#[derive(Debug, Default)]
pub struct SimulatedCaptureDevice {
    denial: Option<CaptureError>,
    issued: Mutex<Vec<IssuedStream>>,
}

impl SimulatedCaptureDevice {
    /// Device that grants every request.
    pub fn granting() -> Self {
        Self::default()
    }

    /// Device that refuses permission for every request.
    pub fn denying() -> Self {
        Self::failing_with(CaptureError::PermissionDenied)
    }

    /// Device that fails every request with `error`.
    pub fn failing_with(error: CaptureError) -> Self {
        Self {
            denial: Some(error),
            issued: Mutex::new(Vec::new()),
        }
    }

    /// Every stream handed out so far, oldest first.
    pub fn issued(&self) -> Vec<IssuedStream> {
        self.issued
            .lock()
            .map(|issued| issued.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Number of streams that still have live tracks.
    pub fn active_streams(&self) -> usize {
        self.issued().iter().filter(|p| p.is_active()).count()
    }
}

#[async_trait]
impl CaptureDevice for SimulatedCaptureDevice {
    async fn acquire(
        &self,
        constraints: CaptureConstraints,
    ) -> Result<Box<dyn CaptureStream>, CaptureError> {
        if let Some(error) = &self.denial {
            return Err(error.clone());
        }

        let tracks = constraints.requested_tracks();
        if tracks.is_empty() {
            return Err(CaptureError::NothingRequested);
        }

        let active = Arc::new(AtomicBool::new(true));
        let record = IssuedStream {
            tracks: tracks.clone(),
            active: Arc::clone(&active),
        };
        match self.issued.lock() {
            Ok(mut issued) => issued.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }

        tracing::debug!(?tracks, "simulated capture stream opened");
        Ok(Box::new(SimulatedStream { tracks, active }))
    }
}

#[derive(Debug)]
struct SimulatedStream {
    tracks: Vec<TrackKind>,
    active: Arc<AtomicBool>,
}

impl CaptureStream for SimulatedStream {
    fn tracks(&self) -> Vec<TrackKind> {
        self.tracks.clone()
    }

    fn stop(&mut self) {
        if self.active.swap(false, Ordering::SeqCst) {
            tracing::debug!(tracks = ?self.tracks, "simulated capture stream stopped");
        }
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl Drop for SimulatedStream {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn granting_device_returns_requested_tracks() {
        let device = SimulatedCaptureDevice::granting();
        let stream = device.acquire(CaptureConstraints::audio_video()).await.unwrap();

        assert_eq!(stream.tracks(), vec![TrackKind::Video, TrackKind::Audio]);
        assert!(stream.is_active());
        assert_eq!(device.active_streams(), 1);
    }

    #[tokio::test]
    async fn denying_device_returns_permission_denied() {
        let device = SimulatedCaptureDevice::denying();
        let result = device.acquire(CaptureConstraints::audio_video()).await;

        assert_eq!(result.unwrap_err(), CaptureError::PermissionDenied);
        assert!(device.issued().is_empty());
    }

    #[tokio::test]
    async fn empty_constraints_are_rejected() {
        let device = SimulatedCaptureDevice::granting();
        let result = device
            .acquire(CaptureConstraints {
                video: false,
                audio: false,
            })
            .await;
        assert_eq!(result.unwrap_err(), CaptureError::NothingRequested);
    }

    #[tokio::test]
    async fn stop_is_observable_and_idempotent() {
        let device = SimulatedCaptureDevice::granting();
        let mut stream = device.acquire(CaptureConstraints::default()).await.unwrap();

        stream.stop();
        stream.stop();

        assert!(!stream.is_active());
        assert_eq!(device.active_streams(), 0);
    }

    #[tokio::test]
    async fn dropping_a_stream_stops_its_tracks() {
        let device = SimulatedCaptureDevice::granting();
        let stream = device.acquire(CaptureConstraints::default()).await.unwrap();
        drop(stream);

        let streams = device.issued();
        assert_eq!(streams.len(), 1);
        assert!(!streams[0].is_active());
    }
}
