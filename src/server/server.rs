use std::time::{Duration, Instant};

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Local;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{error, warn};

use super::state::{GuardedProvider, ServerState};
use super::{log_requests, ServerConfig};
use crate::config::AppConfig;
use crate::rotation::{baseline_report, compute_probability, performance_report};

#[cfg(feature = "slowdown")]
use super::slowdown_request;

#[derive(Serialize)]
struct ServerStats {
    pub status: &'static str,
    pub service: &'static str,
    pub uptime: String,
    pub endpoints: Vec<&'static str>,
}

#[derive(Serialize)]
struct ErrorBody {
    pub error: String,
    pub details: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        status: "ok",
        service: "likelyhood-server",
        uptime: format_uptime(state.start_time.elapsed()),
        endpoints: vec!["/api/harry-hood-stats"],
    };
    Json(stats)
}

/// The stats endpoint. History-fetch failure is a 500; upcoming-fetch
/// failure degrades to an empty schedule.
async fn harry_hood_stats(State(state): State<ServerState>) -> Response {
    let target = state.config.target_song.clone();

    let history = match state.provider.recent_setlists().await {
        Ok(history) => history,
        Err(err) => {
            error!("Error fetching setlist history: {}", err);
            let body = ErrorBody {
                error: "Failed to fetch setlist statistics".to_string(),
                details: err.to_string(),
            };
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }
    };

    let result = compute_probability(&history, &target);
    if result.last_occurrence.is_none() {
        // Not found in this window of recent shows
        return Json(baseline_report(&target)).into_response();
    }

    let upcoming = match state.provider.upcoming_shows().await {
        Ok(upcoming) => upcoming,
        Err(err) => {
            warn!("Fetching upcoming shows failed: {}", err);
            Vec::new()
        }
    };

    let today = Local::now().date_naive();
    let report = performance_report(
        &history,
        &result,
        upcoming,
        &target,
        today,
        &mut rand::rng(),
    );
    Json(report).into_response()
}

pub fn make_app(config: ServerConfig, provider: GuardedProvider) -> Router {
    let state = ServerState {
        config: config.clone(),
        start_time: Instant::now(),
        provider,
    };

    let api_routes: Router = Router::new()
        .route("/harry-hood-stats", get(harry_hood_stats))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    // CORS stays permissive, the frontend is served from another origin
    let mut app: Router = home_router
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive());

    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(slowdown_request));
    }
    app = app.layer(middleware::from_fn_with_state(state, log_requests));

    app
}

pub async fn run_server(config: &AppConfig, provider: GuardedProvider) -> anyhow::Result<()> {
    let server_config = ServerConfig {
        port: config.port,
        requests_logging_level: config.logging_level.clone(),
        frontend_dir_path: config.frontend_dir_path.clone(),
        target_song: config.target_song.clone(),
    };
    let app = make_app(server_config, provider);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", config.port)).await?;

    Ok(axum::serve(listener, app).await?)
}
