use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::domain::report::RiskTier;

/// Hour of day (UTC) at which the daily check-in happens.
pub const CHECK_IN_HOUR: u32 = 8;

/// Number of entries shown on the dashboard card.
pub const RECENT_LIMIT: usize = 3;

/// A past check-in as listed on the dashboard and history view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub at: Timestamp,
    pub risk_tier: RiskTier,
}

impl SessionRecord {
    pub fn new(at: Timestamp, risk_tier: RiskTier) -> Self {
        Self { at, risk_tier }
    }

    /// `Today, 08:00 UTC` for today's entry, `Oct 01, 2025 - 08:00 UTC` otherwise.
    pub fn label(&self, now: &Timestamp) -> String {
        if self.at.same_day_as(now) {
            format!("Today, {}", self.at.format_time())
        } else {
            self.at.format_long()
        }
    }
}

/// Session history, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionHistory {
    records: Vec<SessionRecord>,
}

impl SessionHistory {
    pub fn new(mut records: Vec<SessionRecord>) -> Self {
        records.sort_by(|a, b| b.at.cmp(&a.at));
        Self { records }
    }

    /// Fixed demo history: today plus five earlier check-ins.
    pub fn mock(now: &Timestamp) -> Self {
        let past = [
            ((2025, 10, 1), RiskTier::Stressed),
            ((2025, 9, 29), RiskTier::Normal),
            ((2025, 9, 27), RiskTier::Normal),
            ((2025, 9, 25), RiskTier::MissionRisk),
            ((2025, 9, 23), RiskTier::Normal),
        ];

        let today = now.with_hour(CHECK_IN_HOUR).unwrap_or(*now);
        let mut records = vec![SessionRecord::new(today, RiskTier::Normal)];
        records.extend(past.into_iter().filter_map(|((y, m, d), tier)| {
            Timestamp::at_utc(y, m, d, CHECK_IN_HOUR)
                .ok()
                .map(|at| SessionRecord::new(at, tier))
        }));
        Self::new(records)
    }

    /// The dashboard card's subset.
    pub fn recent(&self) -> &[SessionRecord] {
        &self.records[..self.records.len().min(RECENT_LIMIT)]
    }

    pub fn all(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
