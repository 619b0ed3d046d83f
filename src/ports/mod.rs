//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CredentialVerifier` - Login gate
//! - `CaptureDevice` / `CaptureStream` - Camera and microphone acquisition
//! - `ReportGenerator` - Answers to report

mod capture_device;
mod credential_verifier;
mod report_generator;

pub use capture_device::{CaptureConstraints, CaptureDevice, CaptureError, CaptureStream, TrackKind};
pub use credential_verifier::CredentialVerifier;
pub use report_generator::ReportGenerator;
