//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - literal-credential login gate
//! - `capture` - simulated camera/microphone device
//! - `report` - randomized placeholder report generator
//! - `console` - terminal front end driving the check-in flow

pub mod auth;
pub mod capture;
pub mod console;
pub mod report;

pub use auth::StaticCredentialVerifier;
pub use capture::SimulatedCaptureDevice;
pub use console::ConsoleApp;
pub use report::RandomReportGenerator;
