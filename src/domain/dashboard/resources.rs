use serde::Serialize;

/// A calming or support resource listed in the resources view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
}

const CALMING_RESOURCES: [Resource; 4] = [
    Resource {
        title: "Box Breathing",
        description: "Inhale 4s, hold 4s, exhale 4s, hold 4s. Repeat for two minutes.",
    },
    Resource {
        title: "Guided Body Scan",
        description: "A ten-minute audio walk-through to release tension.",
    },
    Resource {
        title: "Earth View Window",
        description: "Spend five minutes at the cupola or with the Earth feed.",
    },
    Resource {
        title: "Message Home",
        description: "Queue a personal message for the next comms window.",
    },
];

pub fn calming_resources() -> &'static [Resource] {
    &CALMING_RESOURCES
}

/// Dashboard shortcut buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shortcut {
    StartSession,
    ViewLatestReport,
    CheckSchedule,
    Resources,
}

impl Shortcut {
    pub fn all() -> &'static [Shortcut] {
        &[
            Shortcut::StartSession,
            Shortcut::ViewLatestReport,
            Shortcut::CheckSchedule,
            Shortcut::Resources,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shortcut::StartSession => "Start Session",
            Shortcut::ViewLatestReport => "View Latest Report",
            Shortcut::CheckSchedule => "Check Schedule",
            Shortcut::Resources => "Resources",
        }
    }
}
