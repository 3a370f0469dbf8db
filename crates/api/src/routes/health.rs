use axum::extract::State;
use axum::{routing::get, Json, Router};
use pokevote_db::repositories::PokemonRepo;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, `unseeded` (reachable but empty catalog), or `degraded`.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Number of catalog entries; absent when the database is unreachable.
    pub catalog_entries: Option<i64>,
}

/// GET /health -- service, database, and catalog health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog_entries = match PokemonRepo::count(&state.pool, None).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            None
        }
    };

    let status = match catalog_entries {
        None => "degraded",
        Some(0) => "unseeded",
        Some(_) => "ok",
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy: catalog_entries.is_some(),
        catalog_entries,
    })
}

/// Mount health check routes (intended for root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
