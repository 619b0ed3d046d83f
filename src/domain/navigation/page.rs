//! Page and home-view keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Top-level pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Login,
    AppShell,
    Session,
    Evaluation,
    Report,
}

impl Page {
    pub fn all() -> &'static [Page] {
        &[
            Page::Login,
            Page::AppShell,
            Page::Session,
            Page::Evaluation,
            Page::Report,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::AppShell => "app-shell",
            Page::Session => "session",
            Page::Evaluation => "evaluation",
            Page::Report => "report",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Page {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::all()
            .iter()
            .copied()
            .find(|p| p.key() == s)
            .ok_or_else(|| ValidationError::invalid_format("page", format!("unknown page '{}'", s)))
    }
}

/// Views inside the app shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HomeView {
    Dashboard,
    Upcoming,
    History,
    Resources,
}

impl HomeView {
    pub fn all() -> &'static [HomeView] {
        &[
            HomeView::Dashboard,
            HomeView::Upcoming,
            HomeView::History,
            HomeView::Resources,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            HomeView::Dashboard => "dashboard",
            HomeView::Upcoming => "upcoming",
            HomeView::History => "history",
            HomeView::Resources => "resources",
        }
    }
}

impl fmt::Display for HomeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for HomeView {
    type Err = ValidationError;

    /// Accepts `upcoming` as well as the `-view` suffixed form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.strip_suffix("-view").unwrap_or(s);
        HomeView::all()
            .iter()
            .copied()
            .find(|v| v.key() == key)
            .ok_or_else(|| ValidationError::invalid_format("view", format!("unknown view '{}'", s)))
    }
}
