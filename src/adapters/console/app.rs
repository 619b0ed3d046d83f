//! Interactive terminal front end over [`CheckInFlow`].
//!
//! One task owns the flow. It selects over stdin lines and timer events, so
//! flow state is only ever touched from here.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use super::input::{resolve_answer, Command};
use super::render;
use crate::application::{CheckInFlow, FlowError, FlowEvent, FlowUpdate};
use crate::domain::dashboard::Shortcut;
use crate::domain::foundation::{CheckInPhase, DomainError, Timestamp};
use crate::domain::navigation::{HomeView, Page};
use crate::domain::questionnaire::{QuestionnaireError, RawInputs};

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Show(String),
    Quit,
}

pub struct ConsoleApp {
    flow: CheckInFlow,
    events: mpsc::UnboundedReceiver<FlowEvent>,
    /// Validated inputs for the batch on screen, not yet recorded.
    pending: RawInputs,
}

impl ConsoleApp {
    pub fn new(flow: CheckInFlow, events: mpsc::UnboundedReceiver<FlowEvent>) -> Self {
        Self {
            flow,
            events,
            pending: RawInputs::new(),
        }
    }

    pub fn flow(&self) -> &CheckInFlow {
        &self.flow
    }

    /// Reads commands from stdin until `quit` or end of input.
    pub async fn run(mut self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        write_out(&mut stdout, &render::login(None)).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match self.handle_line(&line).await {
                        Reply::Show(text) => write_out(&mut stdout, &text).await?,
                        Reply::Quit => break,
                    }
                }
                Some(event) = self.events.recv() => {
                    if let Some(text) = self.handle_event(event) {
                        write_out(&mut stdout, &text).await?;
                    }
                }
            }
        }

        self.flow.logout();
        tracing::info!("console closed");
        Ok(())
    }

    /// Runs one line of input against the flow.
    pub async fn handle_line(&mut self, line: &str) -> Reply {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => return Reply::Show(problem(e)),
        };

        let text = match command {
            Command::Empty => String::new(),
            Command::Help => render::help(),
            Command::Quit => return Reply::Quit,
            Command::Login { username, password } => {
                match self.flow.login(&username, &password).await {
                    Ok(_) => {
                        self.pending.clear();
                        self.home()
                    }
                    Err(e) => render::login(Some(&e.to_string())),
                }
            }
            Command::Logout => {
                self.flow.logout();
                self.pending.clear();
                render::login(None)
            }
            Command::View(name) => match name.parse::<HomeView>() {
                Ok(view) => match self.flow.view(view.key()) {
                    Ok(_) => self.home(),
                    Err(e) => flow_problem(e),
                },
                Err(e) => problem(DomainError::from(e)),
            },
            Command::Shortcut(number) => {
                match number.checked_sub(1).and_then(|i| Shortcut::all().get(i)) {
                    Some(shortcut) => self.shortcut(*shortcut).await,
                    None => problem(format!("No shortcut {number}. Pick 1 to {}.", Shortcut::all().len())),
                }
            }
            Command::Start => self.shortcut(Shortcut::StartSession).await,
            Command::Finish => match self.flow.finish_session() {
                Ok(()) => {
                    self.pending.clear();
                    render::batch(self.flow.engine())
                }
                Err(e) => flow_problem(e),
            },
            Command::Answer { question, value } => self.answer(&question, &value),
            Command::Next => self.next(),
            Command::Back => self.back(),
            Command::Submit => self.submit(),
            Command::Report => self.shortcut(Shortcut::ViewLatestReport).await,
            Command::Export => match self.flow.latest_report() {
                Some(report) => render::report_json(&report.view()).unwrap_or_else(problem),
                None => problem("No report yet. Submit an evaluation or type 'report'."),
            },
        };
        Reply::Show(text)
    }

    /// Applies a timer event; returns text when something visible changed.
    pub fn handle_event(&mut self, event: FlowEvent) -> Option<String> {
        match self.flow.apply(event)? {
            FlowUpdate::CaptureCountdown(remaining) if remaining % 5 == 0 || remaining <= 3 => {
                Some(render::countdown(remaining) + "\n")
            }
            FlowUpdate::CaptureCountdown(_) => None,
            FlowUpdate::EvaluationStarted => {
                self.pending.clear();
                Some(format!(" Time's up.\n{}", render::batch(self.flow.engine())))
            }
            // Dashboard labels refresh silently; they show on the next render.
            FlowUpdate::UpcomingCountdown { .. } => None,
        }
    }

    /// Runs a dashboard shortcut and renders whichever page it leads to.
    async fn shortcut(&mut self, shortcut: Shortcut) -> String {
        if let Err(e) = self.flow.activate_shortcut(shortcut).await {
            return flow_problem(e);
        }
        match shortcut {
            Shortcut::StartSession => {
                self.pending.clear();
                self.session_page()
            }
            Shortcut::ViewLatestReport => match self.flow.latest_report() {
                Some(report) => render::report(&report.view()),
                None => self.home(),
            },
            Shortcut::CheckSchedule | Shortcut::Resources => self.home(),
        }
    }

    fn answer(&mut self, id: &str, raw: &str) -> String {
        if !self.flow.phase().accepts_answers() {
            return flow_problem(FlowError::WrongPhase {
                operation: "record answers",
                phase: self.flow.phase(),
            });
        }
        let Some(question) = self.flow.engine().current_batch().question(id) else {
            return problem(DomainError::from(QuestionnaireError::QuestionNotInBatch(
                id.to_string(),
            )));
        };

        let resolved = resolve_answer(question, raw);
        match question.parse_answer(&resolved) {
            Ok(value) => {
                self.pending.insert(id.to_string(), resolved);
                format!(" ✓ {id} = {value}\n")
            }
            Err(e) => problem(DomainError::from(e)),
        }
    }

    fn next(&mut self) -> String {
        match self.flow.next_batch(&self.pending) {
            Ok(advanced) => {
                self.pending.clear();
                let page = render::batch(self.flow.engine());
                if advanced {
                    page
                } else {
                    format!("{page} This is the last step. Type 'submit' when ready.\n")
                }
            }
            Err(e) => flow_problem(e),
        }
    }

    /// Keeps what was typed on this batch, then steps back.
    fn back(&mut self) -> String {
        if !self.pending.is_empty() {
            if let Err(e) = self.flow.record_answers(&self.pending) {
                return flow_problem(e);
            }
        }
        match self.flow.previous_batch() {
            Ok(_) => {
                self.pending.clear();
                render::batch(self.flow.engine())
            }
            Err(e) => flow_problem(e),
        }
    }

    fn submit(&mut self) -> String {
        let text = match self.flow.submit_evaluation(self.pending.clone()) {
            Ok(report) => render::report(&report.view()),
            Err(e) => return flow_problem(e),
        };
        self.pending.clear();
        text
    }

    fn home(&self) -> String {
        let (Some(member), Some(snapshot)) = (self.flow.member(), self.flow.dashboard()) else {
            return render::login(None);
        };
        let view = self.flow.home_view().unwrap_or(HomeView::Dashboard);
        render::home(member, view, snapshot, self.flow.upcoming_labels(), &Timestamp::now())
    }

    fn session_page(&self) -> String {
        debug_assert_eq!(self.flow.page(), Some(Page::Session));
        render::session(
            self.flow.capture_remaining().unwrap_or(0),
            self.flow.capture_warning(),
            self.flow.has_live_stream(),
        )
    }

    /// True while an evaluation batch is on screen.
    pub fn is_evaluating(&self) -> bool {
        self.flow.phase() == CheckInPhase::Evaluating
    }

    /// Inputs typed on the current batch that are not yet recorded.
    pub fn pending(&self) -> &RawInputs {
        &self.pending
    }
}

fn problem(message: impl std::fmt::Display) -> String {
    format!(" ! {message}\n")
}

/// Flow errors print with their error code, e.g. `[WRONG_PHASE]`.
fn flow_problem(err: FlowError) -> String {
    problem(DomainError::from(err))
}

async fn write_out(stdout: &mut tokio::io::Stdout, text: &str) -> std::io::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::adapters::auth::StaticCredentialVerifier;
    use crate::adapters::capture::SimulatedCaptureDevice;
    use crate::adapters::report::RandomReportGenerator;
    use crate::application::{FlowDependencies, FlowSettings};
    use crate::domain::questionnaire::QuestionnaireEngine;

    fn app(capture: SimulatedCaptureDevice) -> ConsoleApp {
        let deps = FlowDependencies {
            verifier: Arc::new(StaticCredentialVerifier::default()),
            capture: Arc::new(capture),
            reports: Arc::new(RandomReportGenerator::with_seed(3)),
        };
        let settings = FlowSettings {
            capture_duration_secs: 60,
            tick_interval: Duration::from_millis(5),
            ..FlowSettings::default()
        };
        let (flow, events) = CheckInFlow::new(deps, QuestionnaireEngine::standard().unwrap(), settings);
        ConsoleApp::new(flow, events)
    }

    async fn shown(app: &mut ConsoleApp, line: &str) -> String {
        match app.handle_line(line).await {
            Reply::Show(text) => text,
            Reply::Quit => panic!("unexpected quit for '{line}'"),
        }
    }

    async fn into_evaluation(app: &mut ConsoleApp) {
        shown(app, "login vyomanaut gagan2025").await;
        shown(app, "start").await;
        shown(app, "finish").await;
        assert!(app.is_evaluating());
    }

    #[tokio::test]
    async fn bad_login_rerenders_login_with_error() {
        let mut app = app(SimulatedCaptureDevice::granting());
        let text = shown(&mut app, "login vyomanaut wrong").await;
        assert!(text.contains("! Invalid credentials. Please try again."));
        assert!(app.flow().member().is_none());
    }

    #[tokio::test]
    async fn login_shows_dashboard() {
        let mut app = app(SimulatedCaptureDevice::granting());
        let text = shown(&mut app, "login vyomanaut gagan2025").await;
        assert!(text.contains("Welcome, vyomanaut"));
        assert!(text.contains("Recent check-ins"));
    }

    #[tokio::test]
    async fn unknown_view_is_reported_and_ignored() {
        let mut app = app(SimulatedCaptureDevice::granting());
        shown(&mut app, "login vyomanaut gagan2025").await;

        let text = shown(&mut app, "view galaxy").await;
        assert!(text.contains("[INVALID_FORMAT]"));
        assert!(text.contains("unknown view 'galaxy'"));
        assert_eq!(app.flow().home_view(), Some(HomeView::Dashboard));
    }

    #[tokio::test]
    async fn view_before_login_asks_to_sign_in() {
        let mut app = app(SimulatedCaptureDevice::granting());
        let text = shown(&mut app, "view history").await;
        assert!(text.contains("Please log in first"));
    }

    #[tokio::test]
    async fn views_are_refused_during_evaluation() {
        let mut app = app(SimulatedCaptureDevice::granting());
        into_evaluation(&mut app).await;

        let text = shown(&mut app, "view dashboard").await;
        assert!(text.contains("[WRONG_PHASE]"));
        let text = shown(&mut app, "report").await;
        assert!(text.contains("[WRONG_PHASE]"));

        assert_eq!(app.flow().page(), Some(Page::Evaluation));
        assert!(shown(&mut app, "next").await.contains("step 2 of 4"));
    }

    #[tokio::test]
    async fn numbered_shortcuts_open_their_pages() {
        let mut app = app(SimulatedCaptureDevice::granting());
        shown(&mut app, "login vyomanaut gagan2025").await;

        let text = shown(&mut app, "shortcut 3").await;
        assert!(text.contains("Upcoming sessions"));
        assert_eq!(app.flow().home_view(), Some(HomeView::Upcoming));

        let text = shown(&mut app, "shortcut 4").await;
        assert!(text.contains("Calming resources"));
        assert_eq!(app.flow().home_view(), Some(HomeView::Resources));

        let text = shown(&mut app, "shortcut 2").await;
        assert!(text.contains("Check-in report"));
        assert_eq!(app.flow().page(), Some(Page::Report));

        let text = shown(&mut app, "shortcut 1").await;
        assert!(text.contains("60s remaining"));
        assert_eq!(app.flow().page(), Some(Page::Session));
    }

    #[tokio::test]
    async fn out_of_range_shortcut_changes_nothing() {
        let mut app = app(SimulatedCaptureDevice::granting());
        shown(&mut app, "login vyomanaut gagan2025").await;

        assert!(shown(&mut app, "shortcut 0").await.contains("No shortcut 0"));
        assert!(shown(&mut app, "shortcut 5").await.contains("Pick 1 to 4"));
        assert_eq!(app.flow().page(), Some(Page::AppShell));
    }

    #[tokio::test]
    async fn shortcut_errors_carry_the_flow_error_code() {
        let mut app = app(SimulatedCaptureDevice::granting());
        assert!(shown(&mut app, "shortcut 1").await.contains("[INVALID_CREDENTIALS]"));

        into_evaluation(&mut app).await;
        assert!(shown(&mut app, "shortcut 2").await.contains("[WRONG_PHASE]"));
        assert!(shown(&mut app, "shortcut 3").await.contains("[WRONG_PHASE]"));
        assert!(app.is_evaluating());
    }

    #[tokio::test]
    async fn denied_camera_warns_but_session_runs() {
        let mut app = app(SimulatedCaptureDevice::denying());
        shown(&mut app, "login vyomanaut gagan2025").await;

        let text = shown(&mut app, "start").await;
        assert!(text.contains("60s remaining"));
        assert!(text.contains("[CAPTURE_UNAVAILABLE]"));
        assert!(text.contains("Continuing without camera"));
    }

    #[tokio::test]
    async fn option_numbers_are_accepted_as_answers() {
        let mut app = app(SimulatedCaptureDevice::granting());
        into_evaluation(&mut app).await;

        let text = shown(&mut app, "answer stress-source 3").await;
        assert!(text.contains("stress-source = Team Dynamics"));
        assert_eq!(app.pending().get("stress-source").map(String::as_str), Some("Team Dynamics"));
    }

    #[tokio::test]
    async fn invalid_answers_are_not_buffered() {
        let mut app = app(SimulatedCaptureDevice::granting());
        into_evaluation(&mut app).await;

        let text = shown(&mut app, "answer rested-level 42").await;
        assert!(text.contains("[INVALID_ANSWER]"));
        assert!(text.contains("outside 1..=10"));
        assert!(app.pending().is_empty());

        let text = shown(&mut app, "answer sleep-hours 7").await;
        assert!(text.contains("[QUESTION_NOT_IN_BATCH]"));
        assert!(text.contains("not part of the current batch"));
    }

    #[tokio::test]
    async fn back_keeps_answers_typed_on_the_batch() {
        let mut app = app(SimulatedCaptureDevice::granting());
        into_evaluation(&mut app).await;

        shown(&mut app, "next").await;
        shown(&mut app, "answer overwhelmed yes").await;
        shown(&mut app, "back").await;
        let text = shown(&mut app, "next").await;

        assert!(text.contains("current: Yes"));
        assert!(app.flow().engine().answers().is_yes("overwhelmed"));
    }

    #[tokio::test]
    async fn submit_only_from_last_batch() {
        let mut app = app(SimulatedCaptureDevice::granting());
        into_evaluation(&mut app).await;

        let text = shown(&mut app, "submit").await;
        assert!(text.contains("Answer the remaining questions"));

        for _ in 0..3 {
            shown(&mut app, "next").await;
        }
        shown(&mut app, "answer trouble-sleeping no").await;
        let text = shown(&mut app, "submit").await;

        assert!(text.contains("Check-in report"));
        assert_eq!(app.flow().page(), Some(Page::Report));
        assert!(app.pending().is_empty());
    }

    #[tokio::test]
    async fn export_needs_a_report_first() {
        let mut app = app(SimulatedCaptureDevice::granting());
        shown(&mut app, "login vyomanaut gagan2025").await;
        assert!(shown(&mut app, "export").await.contains("No report yet"));

        shown(&mut app, "report").await;
        let json = shown(&mut app, "export").await;
        assert!(json.contains("\"risk_tier\""));
    }

    #[tokio::test]
    async fn capture_completion_event_opens_evaluation() {
        let mut app = app(SimulatedCaptureDevice::granting());
        shown(&mut app, "login vyomanaut gagan2025").await;
        shown(&mut app, "start").await;

        let text = loop {
            let event = app.events.recv().await.unwrap();
            if let Some(text) = app.handle_event(event) {
                if text.contains("Time's up") {
                    break text;
                }
            }
        };
        assert!(text.contains("step 1 of 4"));
        assert!(app.is_evaluating());
    }

    #[tokio::test]
    async fn quit_and_bad_commands() {
        let mut app = app(SimulatedCaptureDevice::granting());
        assert_eq!(app.handle_line("quit").await, Reply::Quit);
        assert!(shown(&mut app, "dance").await.contains("Unknown command 'dance'"));
    }
}
