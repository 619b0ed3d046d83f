use chrono::Duration;
use serde::Serialize;

use crate::domain::foundation::Timestamp;

/// Demo sessions and their offsets (hours) from login.
const STANDARD_SLOTS: [(&str, i64); 4] = [
    ("Alpha Check-in", 4),
    ("Bravo Evaluation", 28),
    ("Charlie Debrief", 52),
    ("Delta Wellness", 76),
];

/// A scheduled future session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingSession {
    pub name: String,
    pub starts_at: Timestamp,
}

impl UpcomingSession {
    pub fn new(name: impl Into<String>, starts_at: Timestamp) -> Self {
        Self {
            name: name.into(),
            starts_at,
        }
    }

    /// Countdown text relative to `now`.
    pub fn countdown_label(&self, now: &Timestamp) -> String {
        countdown_label(self.starts_at.duration_since(now))
    }
}

/// The four demo sessions, relative to `now`.
pub fn standard_schedule(now: &Timestamp) -> Vec<UpcomingSession> {
    STANDARD_SLOTS
        .iter()
        .map(|(name, hours)| UpcomingSession::new(*name, now.plus_hours(*hours)))
        .collect()
}

/// Formats a remaining duration as `in 3h 59m 59s`, or `in 1d 3h 0m 0s` once
/// a full day or more remains. Elapsed countdowns read `starting now`.
pub fn countdown_label(remaining: Duration) -> String {
    let total = remaining.num_seconds();
    if total <= 0 {
        return "starting now".to_string();
    }

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("in {}d {}h {}m {}s", days, hours, minutes, seconds)
    } else {
        format!("in {}h {}m {}s", hours, minutes, seconds)
    }
}

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;
