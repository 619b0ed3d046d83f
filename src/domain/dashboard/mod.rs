//! Dashboard module - history, schedule and resources shown after login.

pub mod history;
pub mod resources;
pub mod schedule;

pub use history::{SessionHistory, SessionRecord};
pub use resources::{calming_resources, Resource, Shortcut};
pub use schedule::{countdown_label, standard_schedule, UpcomingSession};

use serde::Serialize;

use crate::domain::foundation::Timestamp;

/// Everything the home page shows, built once at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub history: SessionHistory,
    pub upcoming: Vec<UpcomingSession>,
    pub built_at: Timestamp,
}

impl DashboardSnapshot {
    pub fn build(now: Timestamp) -> Self {
        Self {
            history: SessionHistory::mock(&now),
            upcoming: standard_schedule(&now),
            built_at: now,
        }
    }

    pub fn resources(&self) -> &'static [Resource] {
        calming_resources()
    }
}
