//! Integration tests for the full check-in flow.
//!
//! These tests drive `CheckInFlow` the way the console does:
//! 1. Log in through the static credential gate
//! 2. Start a capture session (granted or denied)
//! 3. Feed timer events back through `apply` until the evaluation opens
//! 4. Walk the questionnaire and submit for a report
//!
//! Timers tick every few milliseconds so a whole session runs in well under
//! a second.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::timeout;

use maitri::adapters::{RandomReportGenerator, SimulatedCaptureDevice, StaticCredentialVerifier};
use maitri::application::{CheckInFlow, FlowDependencies, FlowEvent, FlowSettings, FlowUpdate};
use maitri::domain::foundation::CheckInPhase;
use maitri::domain::navigation::{HomeView, Page};
use maitri::domain::questionnaire::{QuestionnaireEngine, RawInputs};
use maitri::domain::report::RiskTier;
use maitri::ports::CaptureError;

// =============================================================================
// Test Infrastructure
// =============================================================================

const TICK: Duration = Duration::from_millis(5);

struct Harness {
    flow: CheckInFlow,
    events: UnboundedReceiver<FlowEvent>,
    capture: Arc<SimulatedCaptureDevice>,
}

impl Harness {
    fn new(capture: SimulatedCaptureDevice, capture_secs: u64) -> Self {
        let capture = Arc::new(capture);
        let deps = FlowDependencies {
            verifier: Arc::new(StaticCredentialVerifier::default()),
            capture: capture.clone(),
            reports: Arc::new(RandomReportGenerator::with_seed(2025)),
        };
        let settings = FlowSettings {
            capture_duration_secs: capture_secs,
            tick_interval: TICK,
            ..FlowSettings::default()
        };
        let (flow, events) =
            CheckInFlow::new(deps, QuestionnaireEngine::standard().unwrap(), settings);
        Self { flow, events, capture }
    }

    async fn login(&mut self) {
        self.flow.login("vyomanaut", "gagan2025").await.unwrap();
    }

    /// Pumps events into the flow until the capture window closes, returning
    /// every capture countdown value seen on the way.
    async fn run_capture_to_completion(&mut self) -> Vec<u64> {
        let mut seen = Vec::new();
        let pump = async {
            while let Some(event) = self.events.recv().await {
                match self.flow.apply(event) {
                    Some(FlowUpdate::CaptureCountdown(remaining)) => seen.push(remaining),
                    Some(FlowUpdate::EvaluationStarted) => return,
                    _ => {}
                }
            }
        };
        timeout(Duration::from_secs(5), pump)
            .await
            .expect("capture window never completed");
        seen
    }
}

fn inputs(pairs: &[(&str, &str)]) -> RawInputs {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<HashMap<_, _>>()
}

// =============================================================================
// Login and navigation
// =============================================================================

#[tokio::test]
async fn login_opens_dashboard_with_running_countdowns() {
    let mut h = Harness::new(SimulatedCaptureDevice::granting(), 3);
    assert_eq!(h.flow.page(), Some(Page::Login));

    h.login().await;

    assert_eq!(h.flow.page(), Some(Page::AppShell));
    assert_eq!(h.flow.home_view(), Some(HomeView::Dashboard));
    assert_eq!(h.flow.upcoming_labels().len(), 4);
    assert_eq!(h.flow.running_countdowns(), 4);
}

#[tokio::test]
async fn unknown_view_key_leaves_current_view() {
    let mut h = Harness::new(SimulatedCaptureDevice::granting(), 3);
    h.login().await;

    assert_eq!(h.flow.view("history"), Ok(true));
    assert_eq!(h.flow.view("telemetry"), Ok(false));
    assert_eq!(h.flow.home_view(), Some(HomeView::History));
}

#[tokio::test]
async fn countdown_events_refresh_upcoming_labels() {
    let mut h = Harness::new(SimulatedCaptureDevice::granting(), 3);
    h.login().await;

    let update = timeout(Duration::from_secs(2), async {
        loop {
            let event = h.events.recv().await.unwrap();
            if let Some(update) = h.flow.apply(event) {
                break update;
            }
        }
    })
    .await
    .unwrap();

    match update {
        FlowUpdate::UpcomingCountdown { slot, label } => {
            assert!(label.starts_with("in "));
            assert_eq!(h.flow.upcoming_labels()[slot], label);
        }
        other => panic!("expected a dashboard countdown, got {other:?}"),
    }
}

#[tokio::test]
async fn logout_cancels_countdowns_and_capture() {
    let mut h = Harness::new(SimulatedCaptureDevice::granting(), 60);
    h.login().await;
    h.flow.start_session().await.unwrap();
    assert_eq!(h.capture.active_streams(), 1);

    h.flow.logout();
    tokio::time::sleep(TICK * 4).await;

    assert_eq!(h.flow.running_countdowns(), 0);
    assert_eq!(h.capture.active_streams(), 0);
    assert_eq!(h.flow.page(), Some(Page::Login));
    assert_eq!(h.flow.phase(), CheckInPhase::Idle);
    assert!(h.flow.upcoming_labels().is_empty());
}

// =============================================================================
// Capture session
// =============================================================================

#[tokio::test]
async fn capture_countdown_runs_down_to_zero_then_opens_evaluation() {
    let mut h = Harness::new(SimulatedCaptureDevice::granting(), 4);
    h.login().await;
    h.flow.start_session().await.unwrap();
    assert_eq!(h.flow.page(), Some(Page::Session));
    assert!(h.flow.has_live_stream());

    let seen = h.run_capture_to_completion().await;

    assert_eq!(seen, vec![4, 3, 2, 1, 0]);
    assert_eq!(h.flow.page(), Some(Page::Evaluation));
    assert_eq!(h.flow.phase(), CheckInPhase::Evaluating);
    assert_eq!(h.flow.engine().current_index(), 0);
    assert_eq!(h.capture.active_streams(), 0);
}

#[tokio::test]
async fn denied_capture_degrades_but_keeps_the_timer() {
    let mut h = Harness::new(SimulatedCaptureDevice::denying(), 2);
    h.login().await;

    h.flow.start_session().await.unwrap();

    assert_eq!(h.flow.capture_warning(), Some(&CaptureError::PermissionDenied));
    assert!(!h.flow.has_live_stream());
    assert_eq!(h.flow.page(), Some(Page::Session));

    h.run_capture_to_completion().await;
    assert_eq!(h.flow.phase(), CheckInPhase::Evaluating);
}

#[tokio::test]
async fn finishing_early_stops_every_track() {
    let mut h = Harness::new(SimulatedCaptureDevice::granting(), 60);
    h.login().await;
    h.flow.start_session().await.unwrap();

    h.flow.finish_session().unwrap();

    let issued = h.capture.issued();
    assert_eq!(issued.len(), 1);
    assert_eq!(issued[0].tracks().len(), 2);
    assert!(!issued[0].is_active());
    assert_eq!(h.flow.page(), Some(Page::Evaluation));
    assert_eq!(h.flow.capture_remaining(), None);
}

#[tokio::test]
async fn cannot_start_a_second_session_while_capturing() {
    let mut h = Harness::new(SimulatedCaptureDevice::granting(), 60);
    h.login().await;
    h.flow.start_session().await.unwrap();

    assert!(h.flow.start_session().await.is_err());
    assert_eq!(h.capture.issued().len(), 1);
}

// =============================================================================
// Evaluation and report
// =============================================================================

#[tokio::test]
async fn back_navigation_restores_recorded_answers() {
    let mut h = Harness::new(SimulatedCaptureDevice::granting(), 60);
    h.login().await;
    h.flow.start_session().await.unwrap();
    h.flow.finish_session().unwrap();

    let first = inputs(&[("feel-emoji", "😊"), ("stress-source", "Workload"), ("rested-level", "7")]);
    assert!(h.flow.next_batch(&first).unwrap());
    assert!(h.flow.previous_batch().unwrap());

    let engine = h.flow.engine();
    let rested = engine.current_batch().question("rested-level").unwrap();
    assert_eq!(engine.prefill(rested).and_then(|v| v.as_number()), Some(7));
    assert_eq!(engine.progress().value(), 25);
}

#[tokio::test]
async fn invalid_batch_input_keeps_the_batch_on_screen() {
    let mut h = Harness::new(SimulatedCaptureDevice::granting(), 60);
    h.login().await;
    h.flow.start_session().await.unwrap();
    h.flow.finish_session().unwrap();

    let bad = inputs(&[("stress-source", "Workload"), ("rested-level", "11")]);
    assert!(h.flow.next_batch(&bad).is_err());

    assert_eq!(h.flow.engine().current_index(), 0);
    assert!(h.flow.engine().answers().is_empty());
}

#[tokio::test]
async fn full_check_in_produces_consistent_report() {
    let mut h = Harness::new(SimulatedCaptureDevice::granting(), 60);
    h.login().await;
    h.flow.start_session().await.unwrap();
    h.flow.finish_session().unwrap();

    h.flow
        .next_batch(&inputs(&[("feel-emoji", "😔"), ("stress-source", "Isolation")]))
        .unwrap();
    h.flow
        .next_batch(&inputs(&[("overwhelmed", "Yes"), ("mood-color", "#223344")]))
        .unwrap();
    h.flow
        .next_batch(&inputs(&[("sleep-hours", "4"), ("sleep-quality", "2")]))
        .unwrap();

    let report = h
        .flow
        .submit_evaluation(inputs(&[("trouble-sleeping", "Yes")]))
        .unwrap()
        .clone();

    // Overwhelmed alone forces an elevated tier.
    assert!(RiskTier::ELEVATED.contains(&report.risk_tier()));
    let view = report.view();
    assert!(view.show_calming_resources);
    assert_eq!(
        view.show_mission_control_alert,
        report.risk_tier() == RiskTier::MissionRisk
    );
    assert_eq!(h.flow.page(), Some(Page::Report));
    assert_eq!(h.flow.phase(), CheckInPhase::Reported);
    assert_eq!(h.flow.latest_report(), Some(&report));
}

#[tokio::test]
async fn a_new_session_can_follow_a_report() {
    let mut h = Harness::new(SimulatedCaptureDevice::granting(), 60);
    h.login().await;
    h.flow.start_session().await.unwrap();
    h.flow.finish_session().unwrap();
    while h.flow.next_batch(&RawInputs::new()).unwrap() {}
    h.flow.submit_evaluation(RawInputs::new()).unwrap();

    h.flow.start_session().await.unwrap();

    assert_eq!(h.flow.phase(), CheckInPhase::Capturing);
    assert_eq!(h.capture.issued().len(), 2);
}
