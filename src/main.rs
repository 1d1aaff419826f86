//! GoFast Run Extractor — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.
//!
//! See `README.md` for quickstart.

mod api;
mod bundle;
mod club_directory;
mod extract;
mod fields;
mod metrics;
mod synthesize;

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - EXTRACTOR_DEV_LOG=1
fn enable_dev_tracing() {
    let dev_flag = std::env::var("EXTRACTOR_DEV_LOG")
        .ok()
        .is_some_and(|v| v == "1");

    let is_dev_env = cfg!(debug_assertions)
        || matches!(
            std::env::var("SHUTTLE_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        );

    if !(dev_flag && is_dev_env) {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("extractor=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    // This enables CLUB_DIRECTORY_PATH / EXTRACTOR_DEV_LOG from .env.
    let _ = dotenvy::dotenv();

    // Initialize dev tracing early (no-op in production).
    enable_dev_tracing();

    // Club directory backs runClubId → contextual-city resolution.
    let state = api::AppState::from_env();

    // Prometheus recorder + /metrics endpoint.
    let metrics = metrics::Metrics::init();

    let router = api::router(state).merge(metrics.router());

    Ok(router.into())
}
