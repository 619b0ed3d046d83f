//! Capture device adapters.

mod simulated;

pub use simulated::{IssuedStream, SimulatedCaptureDevice};
