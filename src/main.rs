use std::sync::Arc;

use maitri::adapters::{
    ConsoleApp, RandomReportGenerator, SimulatedCaptureDevice, StaticCredentialVerifier,
};
use maitri::application::{CheckInFlow, FlowDependencies, FlowSettings};
use maitri::config::AppConfig;
use maitri::domain::questionnaire::QuestionnaireEngine;
use maitri::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.app)?;

    let capture = if config.features.simulate_camera_denied {
        SimulatedCaptureDevice::denying()
    } else {
        SimulatedCaptureDevice::granting()
    };
    let deps = FlowDependencies {
        verifier: Arc::new(StaticCredentialVerifier::new(
            config.auth.username.clone(),
            config.auth.password.clone(),
        )),
        capture: Arc::new(capture),
        reports: Arc::new(
            RandomReportGenerator::from_optional_seed(config.report.seed)
                .with_sleep_quality_threshold(config.report.sleep_quality_threshold),
        ),
    };

    let engine = QuestionnaireEngine::standard()?
        .with_answer_restoration(config.features.restore_previous_answers);
    let settings = FlowSettings {
        capture_duration_secs: config.session.capture_duration_secs,
        tick_interval: config.session.tick_interval(),
        constraints: config.session.constraints(),
    };

    tracing::info!(
        environment = ?config.app.environment,
        capture_secs = settings.capture_duration_secs,
        "starting MAITRI console"
    );

    let (flow, events) = CheckInFlow::new(deps, engine, settings);
    ConsoleApp::new(flow, events).run().await?;
    Ok(())
}
