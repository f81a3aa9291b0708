use avalon_db::repositories::GameRepo;
use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Games not yet archived; absent when the games table cannot be read,
    /// e.g. before migrations have run.
    pub active_games: Option<i64>,
}

/// GET /health -- returns service and database health plus lobby size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = avalon_db::health_check(&state.pool).await.is_ok();
    let active_games = match GameRepo::count_active(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Could not count active games");
            None
        }
    };

    let status = if db_healthy && active_games.is_some() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        active_games,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
