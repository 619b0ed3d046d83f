//! StartSessionHandler - Command handler for opening a capture session.
//!
//! Acquisition is best-effort. A denied or missing device produces a
//! warning on the result instead of an error, and the session proceeds
//! without a stream.

use std::sync::Arc;

use crate::domain::foundation::CheckInId;
use crate::ports::{CaptureConstraints, CaptureDevice, CaptureError, CaptureStream};

/// Command to open a capture session.
#[derive(Debug, Clone, Copy)]
pub struct StartSessionCommand {
    pub constraints: CaptureConstraints,
}

/// Result of opening a capture session.
#[derive(Debug)]
pub struct StartSessionResult {
    pub check_in_id: CheckInId,
    pub stream: Option<Box<dyn CaptureStream>>,
    pub warning: Option<CaptureError>,
}

impl StartSessionResult {
    pub fn is_degraded(&self) -> bool {
        self.stream.is_none()
    }
}

/// Handler for starting sessions.
pub struct StartSessionHandler {
    device: Arc<dyn CaptureDevice>,
}

impl StartSessionHandler {
    pub fn new(device: Arc<dyn CaptureDevice>) -> Self {
        Self { device }
    }

    pub async fn handle(&self, cmd: StartSessionCommand) -> StartSessionResult {
        let check_in_id = CheckInId::new();

        match self.device.acquire(cmd.constraints).await {
            Ok(stream) => {
                tracing::info!(%check_in_id, tracks = ?stream.tracks(), "capture session started");
                StartSessionResult {
                    check_in_id,
                    stream: Some(stream),
                    warning: None,
                }
            }
            Err(error) => {
                tracing::warn!(%check_in_id, %error, "capture unavailable, continuing without stream");
                StartSessionResult {
                    check_in_id,
                    stream: None,
                    warning: Some(error),
                }
            }
        }
    }
}
