//! Report module - emotion, risk tier and the evaluation outcome.

mod emotion;
#[allow(clippy::module_inception)]
mod report;
mod risk_tier;
mod signals;

pub use emotion::Emotion;
pub use report::{Report, ReportView};
pub use risk_tier::RiskTier;
pub use signals::{StressSignals, DEFAULT_SLEEP_QUALITY_THRESHOLD};
