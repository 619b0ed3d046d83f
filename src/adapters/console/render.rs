//! Plain-text renderers for each page.
//!
//! Every function here is pure: it takes domain values and returns the text
//! to print, so the layouts can be tested without a terminal.

use crate::domain::dashboard::{DashboardSnapshot, Shortcut};
use crate::domain::foundation::{CrewMember, DomainError, Timestamp};
use crate::domain::navigation::HomeView;
use crate::domain::questionnaire::{Question, QuestionKind, QuestionnaireEngine};
use crate::domain::report::ReportView;
use crate::ports::CaptureError;

const RULE: &str = "────────────────────────────────────────";

/// Rule, title line, rule.
fn banner(title: &str) -> String {
    format!("{RULE}\n {title}\n{RULE}\n")
}

pub fn login(error: Option<&str>) -> String {
    let mut out = banner("MAITRI  ·  Crew Wellness Check-In");
    if let Some(error) = error {
        out.push_str(&format!(" ! {}\n", error));
    }
    out.push_str(" Sign in with: login <username> <password>\n");
    out
}

/// The app shell with the active home view.
pub fn home(
    member: &CrewMember,
    view: HomeView,
    snapshot: &DashboardSnapshot,
    upcoming_labels: &[String],
    now: &Timestamp,
) -> String {
    let mut out = banner(&format!("Welcome, {}  ·  [{}]", member.display_name, view.key()));

    match view {
        HomeView::Dashboard => dashboard(&mut out, snapshot, upcoming_labels, now),
        HomeView::Upcoming => upcoming(&mut out, snapshot, upcoming_labels),
        HomeView::History => history(&mut out, snapshot, now),
        HomeView::Resources => resources(&mut out, snapshot),
    }

    out.push('\n');
    out.push_str(" Views: view dashboard | upcoming | history | resources\n");
    out
}

fn dashboard(out: &mut String, snapshot: &DashboardSnapshot, labels: &[String], now: &Timestamp) {
    if let (Some(next), Some(label)) = (snapshot.upcoming.first(), labels.first()) {
        out.push_str(&format!(" Next session: {} ({})\n", next.name, label));
    }

    out.push_str(" Recent check-ins:\n");
    for record in snapshot.history.recent() {
        out.push_str(&format!("   {:<28} {}\n", record.label(now), record.risk_tier.label()));
    }

    // Numbered to match `shortcut <n>`.
    out.push_str(" Shortcuts:\n");
    for (i, shortcut) in Shortcut::all().iter().enumerate() {
        out.push_str(&format!(
            "   {}. {:<20} -> shortcut {}  ({})\n",
            i + 1,
            shortcut.label(),
            i + 1,
            shortcut_command(*shortcut)
        ));
    }
}

fn shortcut_command(shortcut: Shortcut) -> &'static str {
    match shortcut {
        Shortcut::StartSession => "start",
        Shortcut::ViewLatestReport => "report",
        Shortcut::CheckSchedule => "view upcoming",
        Shortcut::Resources => "view resources",
    }
}

fn upcoming(out: &mut String, snapshot: &DashboardSnapshot, labels: &[String]) {
    out.push_str(" Upcoming sessions:\n");
    for (session, label) in snapshot.upcoming.iter().zip(labels) {
        out.push_str(&format!(
            "   {:<10} {:<26} {}\n",
            session.name,
            session.starts_at.format_long(),
            label
        ));
    }
}

fn history(out: &mut String, snapshot: &DashboardSnapshot, now: &Timestamp) {
    out.push_str(" Session history:\n");
    if snapshot.history.is_empty() {
        out.push_str("   No sessions yet.\n");
    }
    for record in snapshot.history.all() {
        out.push_str(&format!("   {:<28} {}\n", record.label(now), record.risk_tier.label()));
    }
}

fn resources(out: &mut String, snapshot: &DashboardSnapshot) {
    out.push_str(" Calming resources:\n");
    for resource in snapshot.resources() {
        out.push_str(&format!("   * {}: {}\n", resource.title, resource.description));
    }
}

/// Session page: countdown plus any capture warning.
pub fn session(remaining: u64, warning: Option<&CaptureError>, live: bool) -> String {
    let mut out = banner(&format!("Check-in session  ·  {}s remaining", remaining));
    match warning {
        Some(warning) => {
            out.push_str(&format!(" ! {}\n", DomainError::from(warning.clone())));
            out.push_str(" ! Continuing without camera and microphone.\n");
        }
        None if live => out.push_str(" Camera and microphone are live.\n"),
        None => {}
    }
    out.push_str(" Type 'finish' to end the session early.\n");
    out
}

/// One countdown line while the session page is open.
pub fn countdown(remaining: u64) -> String {
    format!(" … {remaining}s")
}

/// The current questionnaire batch with prefilled values and nav hints.
pub fn batch(engine: &QuestionnaireEngine) -> String {
    let mut out = banner(&format!(
        "Evaluation  ·  step {} of {}  ·  {} complete",
        engine.current_index() + 1,
        engine.batch_count(),
        engine.progress()
    ));

    for question in engine.current_batch().questions() {
        let prefill = engine.prefill(question).map(|v| v.to_string());
        question_block(&mut out, question, prefill.as_deref());
    }

    let mut hints = vec!["answer <id> <value>"];
    if !engine.is_first() {
        hints.push("back");
    }
    hints.push(if engine.is_last() { "submit" } else { "next" });
    out.push_str(&format!(" {}\n", hints.join("  |  ")));
    out
}

fn question_block(out: &mut String, question: &Question, prefill: Option<&str>) {
    out.push_str(&format!(" [{}] {}\n", question.id(), question.text()));

    match question.kind() {
        QuestionKind::YesNo => out.push_str("     Yes / No\n"),
        QuestionKind::Color { .. } => out.push_str("     #rrggbb color\n"),
        kind => {
            if let Some(options) = kind.options() {
                for (i, option) in options.iter().enumerate() {
                    out.push_str(&format!("     {}. {}\n", i + 1, option));
                }
            }
            if let Some((min, max)) = kind.bounds() {
                out.push_str(&format!("     {}..={}\n", min, max));
            }
        }
    }

    if let Some(value) = prefill {
        out.push_str(&format!("     current: {}\n", value));
    }
}

/// Report page panels.
pub fn report(view: &ReportView) -> String {
    let mut out = banner(&format!("Check-in report  ·  {}", view.generated_at));
    out.push_str(&format!(" Detected emotion: {}\n", view.emotion));
    out.push_str(&format!(" Risk level:       {}\n", view.risk_tier));
    out.push_str(&format!(" Recommendation:   {}\n", view.recommendation));

    if view.show_calming_resources {
        out.push_str("\n Calming resources are available: view resources\n");
    }
    if view.show_mission_control_alert {
        out.push_str("\n !! Mission Control has been notified.\n");
    }

    out.push_str("\n Type 'view dashboard' to return home.\n");
    out
}

/// The report view as pretty JSON, for handing off to other tools.
pub fn report_json(view: &ReportView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view).map(|json| json + "\n")
}

pub fn help() -> String {
    [
        " login <username> <password>   sign in",
        " logout                        sign out",
        " view <name>                   dashboard, upcoming, history, resources",
        " shortcut <n>                  run dashboard shortcut n (1-4)",
        " start                         begin a check-in session",
        " finish                        end the capture window early",
        " answer <id> <value>           answer a question (option number or text)",
        " next | back | submit          move through the evaluation",
        " report                        show the latest report",
        " export                        print the latest report as JSON",
        " help                          this list",
        " quit                          exit",
    ]
    .join("\n")
        + "\n"
}
