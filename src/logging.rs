//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber.
///
/// `RUST_LOG` directives take precedence over `default_level`. A `format` of
/// `json` emits one JSON object per event; anything else emits
/// human-readable text.
pub fn init(default_level: &str, format: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let json = format.eq_ignore_ascii_case("json");

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_current_span(true)))
        .with((!json).then(|| fmt::layer().with_target(true)))
        .init();
}
