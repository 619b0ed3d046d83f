//! Domain layer containing check-in logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, phases, errors)
//! - `questionnaire` - Screening questions, answer parsing and batch navigation
//! - `report` - Emotion, risk tier and the report shown after evaluation
//! - `navigation` - Page and home-view switching
//! - `dashboard` - Session history, upcoming schedule and resources

pub mod dashboard;
pub mod foundation;
pub mod navigation;
pub mod questionnaire;
pub mod report;
