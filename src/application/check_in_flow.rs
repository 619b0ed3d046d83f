//! CheckInFlow - the single owner of check-in state.
//!
//! Pages, the questionnaire, the capture session, dashboard countdowns and
//! the latest report all live here. Timers never touch this state: they push
//! [`FlowEvent`]s into an unbounded channel, and whoever owns the flow feeds
//! them back through [`CheckInFlow::apply`].
//!
//! ```ignore
//! let (mut flow, mut events) = CheckInFlow::new(deps, engine, settings);
//! flow.login("vyomanaut", "gagan2025").await?;
//! flow.start_session().await?;
//! while let Some(event) = events.recv().await {
//!     if let Some(update) = flow.apply(event) { render(update) }
//! }
//! ```
//!
//! Events carry the id of the check-in (or login) that spawned them, so a
//! tick from an abandoned session is dropped instead of acted on.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;

use super::handlers::{
    LoginCommand, LoginHandler, StartSessionCommand, StartSessionHandler, SubmitEvaluationCommand,
    SubmitEvaluationHandler,
};
use super::session_timer::{start_repeating, CountdownTimer, TimerEvent, TimerHandle};
use crate::domain::dashboard::{DashboardSnapshot, Shortcut};
use crate::domain::foundation::{
    AuthError, CheckInId, CheckInPhase, CrewMember, DomainError, ErrorCode, StateMachine, Timestamp,
};
use crate::domain::navigation::{HomeView, Page, ViewRouter};
use crate::domain::questionnaire::{AnswerSet, QuestionnaireEngine, QuestionnaireError, RawInputs};
use crate::domain::report::Report;
use crate::ports::{
    CaptureConstraints, CaptureDevice, CaptureError, CaptureStream, CredentialVerifier,
    ReportGenerator,
};

/// Default capture window length.
pub const DEFAULT_CAPTURE_SECS: u64 = 45;

/// Timing and capture settings for a flow.
#[derive(Debug, Clone, Copy)]
pub struct FlowSettings {
    pub capture_duration_secs: u64,
    /// Wall-clock length of one countdown second.
    pub tick_interval: Duration,
    pub constraints: CaptureConstraints,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            capture_duration_secs: DEFAULT_CAPTURE_SECS,
            tick_interval: Duration::from_secs(1),
            constraints: CaptureConstraints::audio_video(),
        }
    }
}

/// Ports the flow depends on.
#[derive(Clone)]
pub struct FlowDependencies {
    pub verifier: Arc<dyn CredentialVerifier>,
    pub capture: Arc<dyn CaptureDevice>,
    pub reports: Arc<dyn ReportGenerator>,
}

/// Timer output routed back into the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    CaptureTick { check_in: CheckInId, remaining: u64 },
    CaptureCompleted { check_in: CheckInId },
    CountdownTick { login: u64, slot: usize },
}

/// Visible change produced by applying a [`FlowEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowUpdate {
    CaptureCountdown(u64),
    EvaluationStarted,
    UpcomingCountdown { slot: usize, label: String },
}

/// Errors from flow operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),

    #[error("Please log in first")]
    NotSignedIn,

    #[error("Cannot {operation} in the {phase} phase")]
    WrongPhase {
        operation: &'static str,
        phase: CheckInPhase,
    },

    #[error("Answer the remaining questions before submitting")]
    NotOnLastBatch,
}

impl From<FlowError> for DomainError {
    fn from(err: FlowError) -> Self {
        let message = err.to_string();
        match err {
            FlowError::Questionnaire(e) => e.into(),
            FlowError::Auth(_) | FlowError::NotSignedIn => {
                DomainError::new(ErrorCode::InvalidCredentials, message)
            }
            FlowError::WrongPhase { phase, .. } => {
                DomainError::new(ErrorCode::WrongPhase, message).with_detail("phase", phase.to_string())
            }
            FlowError::NotOnLastBatch => DomainError::new(ErrorCode::WrongPhase, message),
        }
    }
}

struct ActiveCapture {
    id: CheckInId,
    stream: Option<Box<dyn CaptureStream>>,
    timer: TimerHandle,
    remaining: u64,
}

impl ActiveCapture {
    fn release(mut self) {
        self.timer.cancel();
        if let Some(stream) = self.stream.as_mut() {
            stream.stop();
        }
        tracing::debug!(check_in_id = %self.id, "capture released");
    }
}

/// Application service wiring login, capture, questionnaire and report.
pub struct CheckInFlow {
    login_handler: LoginHandler,
    start_handler: StartSessionHandler,
    submit_handler: SubmitEvaluationHandler,
    settings: FlowSettings,
    events: mpsc::UnboundedSender<FlowEvent>,

    pages: ViewRouter<Page>,
    home: ViewRouter<HomeView>,

    member: Option<CrewMember>,
    dashboard: Option<DashboardSnapshot>,
    countdowns: Vec<TimerHandle>,
    upcoming_labels: Vec<String>,
    login_epoch: u64,

    phase: CheckInPhase,
    engine: QuestionnaireEngine,
    capture: Option<ActiveCapture>,
    capture_warning: Option<CaptureError>,
    latest_report: Option<Report>,
}

impl CheckInFlow {
    /// Creates a flow on the login page, plus the receiving end of its
    /// event channel.
    ///
    /// The channel is unbounded and, while someone is signed in, receives one
    /// dashboard tick per upcoming session every tick interval. The owner must
    /// keep draining it into [`CheckInFlow::apply`]; dropping the receiver is
    /// fine, as senders ignore a closed channel.
    pub fn new(
        deps: FlowDependencies,
        engine: QuestionnaireEngine,
        settings: FlowSettings,
    ) -> (Self, mpsc::UnboundedReceiver<FlowEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let flow = Self {
            login_handler: LoginHandler::new(deps.verifier),
            start_handler: StartSessionHandler::new(deps.capture),
            submit_handler: SubmitEvaluationHandler::new(deps.reports),
            settings,
            events,
            pages: ViewRouter::with_views(Page::all(), Page::Login),
            home: ViewRouter::with_views(HomeView::all(), HomeView::Dashboard),
            member: None,
            dashboard: None,
            countdowns: Vec::new(),
            upcoming_labels: Vec::new(),
            login_epoch: 0,
            phase: CheckInPhase::Idle,
            engine,
            capture: None,
            capture_warning: None,
            latest_report: None,
        };
        (flow, rx)
    }

    // ───────────────────────────────────────────────────────────────
    // Login / logout
    // ───────────────────────────────────────────────────────────────

    /// Verifies credentials and opens the app shell on the dashboard.
    ///
    /// On failure the login page stays active and nothing else changes.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<&CrewMember, FlowError> {
        let now = Timestamp::now();
        let result = self
            .login_handler
            .handle(
                LoginCommand {
                    username: username.to_string(),
                    password: password.to_string(),
                },
                now,
            )
            .await?;

        if self.member.is_some() {
            self.logout();
        }

        self.login_epoch += 1;
        self.upcoming_labels = result
            .dashboard
            .upcoming
            .iter()
            .map(|s| s.countdown_label(&now))
            .collect();
        self.start_countdowns(result.dashboard.upcoming.len());
        self.dashboard = Some(result.dashboard);

        self.home.show(HomeView::Dashboard);
        self.pages.show(Page::AppShell);
        Ok(self.member.insert(result.member))
    }

    fn start_countdowns(&mut self, slots: usize) {
        let login = self.login_epoch;
        self.countdowns = (0..slots)
            .map(|slot| {
                let tx = self.events.clone();
                start_repeating(self.settings.tick_interval, move || {
                    let _ = tx.send(FlowEvent::CountdownTick { login, slot });
                })
            })
            .collect();
    }

    /// Cancels every timer, releases any capture and returns to login.
    pub fn logout(&mut self) {
        for timer in self.countdowns.drain(..) {
            timer.cancel();
        }
        if let Some(capture) = self.capture.take() {
            capture.release();
        }

        if let Some(member) = self.member.take() {
            tracing::info!(member = %member.id.as_str(), "crew member logged out");
        }
        self.login_epoch += 1;
        self.dashboard = None;
        self.upcoming_labels.clear();
        self.phase = CheckInPhase::Idle;
        self.engine.reset();
        self.capture_warning = None;
        self.latest_report = None;
        self.pages.show(Page::Login);
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Switches the home view by name and brings the app shell forward.
    ///
    /// Returns `Ok(false)` for an unknown name, leaving every view as it was.
    /// An open capture or evaluation cannot be left this way.
    pub fn view(&mut self, name: &str) -> Result<bool, FlowError> {
        self.require_member()?;
        self.require_settled("leave the check-in")?;
        if !self.home.show_named(name) {
            return Ok(false);
        }
        Ok(self.pages.show(Page::AppShell))
    }

    /// Runs a dashboard shortcut.
    pub async fn activate_shortcut(&mut self, shortcut: Shortcut) -> Result<(), FlowError> {
        tracing::debug!(shortcut = shortcut.label(), "shortcut activated");
        match shortcut {
            Shortcut::StartSession => self.start_session().await.map(|_| ()),
            Shortcut::ViewLatestReport => self.view_latest_report().map(|_| ()),
            Shortcut::CheckSchedule => self.view(HomeView::Upcoming.key()).map(|_| ()),
            Shortcut::Resources => self.view(HomeView::Resources.key()).map(|_| ()),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Capture session
    // ───────────────────────────────────────────────────────────────

    /// Opens the session page, acquires capture best-effort and starts the
    /// countdown. A denied device leaves a warning and no stream.
    pub async fn start_session(&mut self) -> Result<CheckInId, FlowError> {
        self.require_member()?;
        let next = self
            .phase
            .transition_to(CheckInPhase::Capturing)
            .map_err(|_| self.wrong_phase("start a session"))?;

        self.pages.show(Page::Session);
        let started = self
            .start_handler
            .handle(StartSessionCommand {
                constraints: self.settings.constraints,
            })
            .await;

        let id = started.check_in_id;
        let tx = self.events.clone();
        let timer = CountdownTimer::new(self.settings.capture_duration_secs)
            .with_tick_interval(self.settings.tick_interval)
            .start(move |event| {
                let event = match event {
                    TimerEvent::Tick { remaining } => FlowEvent::CaptureTick { check_in: id, remaining },
                    TimerEvent::Completed => FlowEvent::CaptureCompleted { check_in: id },
                };
                let _ = tx.send(event);
            });

        self.capture_warning = started.warning;
        self.capture = Some(ActiveCapture {
            id,
            stream: started.stream,
            timer,
            remaining: self.settings.capture_duration_secs,
        });
        self.phase = next;
        Ok(id)
    }

    /// Ends the capture window early and opens the evaluation.
    pub fn finish_session(&mut self) -> Result<(), FlowError> {
        if !self.phase.is_capturing() {
            return Err(self.wrong_phase("finish a session"));
        }
        self.begin_evaluation();
        Ok(())
    }

    fn begin_evaluation(&mut self) {
        if let Some(capture) = self.capture.take() {
            capture.release();
        }
        self.engine.reset();
        self.phase = CheckInPhase::Evaluating;
        self.pages.show(Page::Evaluation);
        tracing::info!("evaluation started");
    }

    /// Applies a timer event. Events from abandoned sessions or logins are
    /// ignored.
    pub fn apply(&mut self, event: FlowEvent) -> Option<FlowUpdate> {
        match event {
            FlowEvent::CaptureTick { check_in, remaining } => {
                let capture = self.capture.as_mut().filter(|c| c.id == check_in)?;
                capture.remaining = remaining;
                Some(FlowUpdate::CaptureCountdown(remaining))
            }
            FlowEvent::CaptureCompleted { check_in } => {
                if !self.capture.as_ref().is_some_and(|c| c.id == check_in) {
                    tracing::debug!(%check_in, "ignoring stale capture completion");
                    return None;
                }
                self.begin_evaluation();
                Some(FlowUpdate::EvaluationStarted)
            }
            FlowEvent::CountdownTick { login, slot } => {
                if login != self.login_epoch {
                    return None;
                }
                let session = self.dashboard.as_ref()?.upcoming.get(slot)?;
                let label = session.countdown_label(&Timestamp::now());
                let current = self.upcoming_labels.get_mut(slot)?;
                current.clone_from(&label);
                Some(FlowUpdate::UpcomingCountdown { slot, label })
            }
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Questionnaire
    // ───────────────────────────────────────────────────────────────

    pub fn record_answers(&mut self, inputs: &RawInputs) -> Result<&AnswerSet, FlowError> {
        self.require_evaluating("record answers")?;
        Ok(self.engine.record_current_batch_answers(inputs)?)
    }

    /// Records the on-screen inputs, then advances. Invalid inputs keep the
    /// batch on screen.
    pub fn next_batch(&mut self, inputs: &RawInputs) -> Result<bool, FlowError> {
        self.require_evaluating("move to the next questions")?;
        self.engine.record_current_batch_answers(inputs)?;
        Ok(self.engine.advance())
    }

    pub fn previous_batch(&mut self) -> Result<bool, FlowError> {
        self.require_evaluating("go back")?;
        Ok(self.engine.retreat())
    }

    /// Records the last batch, generates the report and shows it.
    pub fn submit_evaluation(&mut self, final_inputs: RawInputs) -> Result<&Report, FlowError> {
        self.require_evaluating("submit")?;
        if !self.engine.is_last() {
            return Err(FlowError::NotOnLastBatch);
        }

        let result = self
            .submit_handler
            .handle(&mut self.engine, SubmitEvaluationCommand { final_inputs })?;

        self.phase = CheckInPhase::Reported;
        self.pages.show(Page::Report);
        Ok(self.latest_report.insert(result.report))
    }

    /// Generates a report from the answers collected so far and shows it.
    pub fn view_latest_report(&mut self) -> Result<&Report, FlowError> {
        self.require_member()?;
        self.require_settled("view a report")?;

        let report = self.submit_handler.latest(self.engine.answers());
        self.pages.show(Page::Report);
        Ok(self.latest_report.insert(report))
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub fn page(&self) -> Option<Page> {
        self.pages.active()
    }

    pub fn home_view(&self) -> Option<HomeView> {
        self.home.active()
    }

    pub fn phase(&self) -> CheckInPhase {
        self.phase
    }

    pub fn member(&self) -> Option<&CrewMember> {
        self.member.as_ref()
    }

    pub fn dashboard(&self) -> Option<&DashboardSnapshot> {
        self.dashboard.as_ref()
    }

    pub fn upcoming_labels(&self) -> &[String] {
        &self.upcoming_labels
    }

    /// Number of dashboard countdowns still running.
    pub fn running_countdowns(&self) -> usize {
        self.countdowns.iter().filter(|t| !t.is_finished()).count()
    }

    pub fn engine(&self) -> &QuestionnaireEngine {
        &self.engine
    }

    /// Seconds left in the capture window, if one is open.
    pub fn capture_remaining(&self) -> Option<u64> {
        self.capture.as_ref().map(|c| c.remaining)
    }

    pub fn capture_warning(&self) -> Option<&CaptureError> {
        self.capture_warning.as_ref()
    }

    pub fn has_live_stream(&self) -> bool {
        self.capture
            .as_ref()
            .and_then(|c| c.stream.as_ref())
            .is_some_and(|s| s.is_active())
    }

    pub fn latest_report(&self) -> Option<&Report> {
        self.latest_report.as_ref()
    }

    // ───────────────────────────────────────────────────────────────
    // Guards
    // ───────────────────────────────────────────────────────────────

    fn require_member(&self) -> Result<(), FlowError> {
        match self.member {
            Some(_) => Ok(()),
            None => Err(FlowError::NotSignedIn),
        }
    }

    fn require_evaluating(&self, operation: &'static str) -> Result<(), FlowError> {
        self.require_member()?;
        if self.phase.accepts_answers() {
            Ok(())
        } else {
            Err(self.wrong_phase(operation))
        }
    }

    /// Capture and evaluation own the screen until they finish.
    fn require_settled(&self, operation: &'static str) -> Result<(), FlowError> {
        match self.phase {
            CheckInPhase::Capturing | CheckInPhase::Evaluating => Err(self.wrong_phase(operation)),
            CheckInPhase::Idle | CheckInPhase::Reported => Ok(()),
        }
    }

    fn wrong_phase(&self, operation: &'static str) -> FlowError {
        FlowError::WrongPhase {
            operation,
            phase: self.phase,
        }
    }
}

impl Drop for CheckInFlow {
    fn drop(&mut self) {
        if let Some(capture) = self.capture.take() {
            capture.release();
        }
    }
}
