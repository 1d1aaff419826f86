use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use shuttle_axum::axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::bundle::RawSourceBundle;
use crate::club_directory::ClubDirectory;
use crate::extract::{extract_and_describe, ExtractError};
use crate::fields::ExtractedRunFields;

#[derive(Clone)]
pub struct AppState {
    clubs: Arc<RwLock<ClubDirectory>>,
}

impl AppState {
    /// Build state from the environment (club directory path override via
    /// `CLUB_DIRECTORY_PATH`).
    pub fn from_env() -> Self {
        Self {
            clubs: Arc::new(RwLock::new(ClubDirectory::load_from_env())),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/generate", post(generate))
        .route("/debug/club-city", get(debug_club_city))
        .route("/admin/reload-clubs", get(admin_reload_clubs))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Request body of POST /generate. Unknown fields (e.g. `igPostGraphic`)
/// are accepted and ignored.
#[derive(serde::Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct GenerateReq {
    strava_url: Option<String>,
    strava_text: Option<String>,
    web_url: Option<String>,
    web_text: Option<String>,
    ig_post_text: Option<String>,
    run_club_id: Option<String>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResp {
    success: bool,
    run_data: ExtractedRunFields,
}

#[derive(serde::Serialize)]
struct GenerateErr {
    success: bool,
    error: String,
}

async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateReq>,
) -> Result<Json<GenerateResp>, (StatusCode, Json<GenerateErr>)> {
    metrics::counter!("generate_requests_total").increment(1);

    // runClubId → contextual city, resolved here so the core stays pure.
    let contextual_city = req.run_club_id.as_deref().and_then(|id| {
        let clubs = state.clubs.read().expect("rwlock poisoned");
        clubs.city_for(id)
    });

    let bundle = RawSourceBundle {
        strava_url: req.strava_url,
        strava_text: req.strava_text,
        web_url: req.web_url,
        web_text: req.web_text,
        social_post_text: req.ig_post_text,
        contextual_city,
    };

    match extract_and_describe(&bundle) {
        Ok(run_data) => {
            dev_log_generate(&bundle, &run_data);
            Ok(Json(GenerateResp {
                success: true,
                run_data,
            }))
        }
        Err(err @ ExtractError::NoInput) => {
            metrics::counter!("generate_no_input_total").increment(1);
            Err((
                StatusCode::BAD_REQUEST,
                Json(GenerateErr {
                    success: false,
                    error: err.to_string(),
                }),
            ))
        }
    }
}

async fn debug_club_city(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
) -> String {
    let club = q.get("club").cloned().unwrap_or_default();
    let city = {
        let g = state.clubs.read().expect("rwlock poisoned");
        g.city_for(&club)
    };
    format!("club='{}' -> city={:?}", club, city)
}

async fn admin_reload_clubs(State(state): State<AppState>) -> String {
    let fresh = ClubDirectory::load_from_env();
    match state.clubs.write() {
        Ok(mut c) => {
            *c = fresh;
            "reloaded".to_string()
        }
        Err(_) => "failed: lock poisoned".to_string(),
    }
}

/* ----------------------------
Anonymized dev logging
---------------------------- */

/// Dev logging gate: EXTRACTOR_DEV_LOG=1 AND a dev environment (debug
/// build or SHUTTLE_ENV in {local, development, dev}).
pub(crate) fn dev_logging_enabled() -> bool {
    let on = std::env::var("EXTRACTOR_DEV_LOG").ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// Short anonymized id for a piece of pasted text.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Minimal dev logger for generate calls. Never logs raw pasted text,
/// only a hashed id and how many fields resolved.
fn dev_log_generate(bundle: &RawSourceBundle, fields: &ExtractedRunFields) {
    if !dev_logging_enabled() {
        return;
    }
    let id = anon_hash(&bundle.combined_text());
    info!(
        target: "extractor",
        %id,
        resolved = fields.resolved_count(),
        has_title = fields.title.is_some(),
        has_point = fields.meet_up_point.is_some(),
        "generate"
    );
}
