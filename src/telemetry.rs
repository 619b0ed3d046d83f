//! Tracing subscriber setup.
//!
//! Logs go to stderr so they never interleave with the console UI on stdout.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppSettings;

/// Installs the global subscriber: `EnvFilter` from `log_level`, text or JSON
/// formatting per `log_json`.
pub fn init_tracing(settings: &AppSettings) -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let json_layer = settings
        .log_json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!settings.log_json).then(|| {
        fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
}
