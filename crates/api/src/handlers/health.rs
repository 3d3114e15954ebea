//! Service banner and store-connectivity diagnostics.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Response for the root banner.
#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// Response for `GET /test`.
#[derive(Serialize)]
pub struct DiagnosticsResponse {
    /// Always reports the process as running; this endpoint never fails.
    pub backend: &'static str,
    /// Store status: `connected` or a truncated error summary.
    pub database: String,
    /// Coarse connection state: `connected` or `not connected`.
    pub connection_status: &'static str,
    /// Presence flag for the `DATABASE_URL` env var.
    pub database_url: &'static str,
    /// Presence flag for the `DATABASE_NAME` env var (the connection itself
    /// takes its database name from the URL).
    pub database_name: &'static str,
    /// Table names visible in the store, capped at 10.
    pub collections: Vec<String>,
}

/// GET /
///
/// Service banner.
pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Dealdesk Backend",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /test
///
/// Store-connectivity diagnostics. Store errors are caught and summarized in
/// the body so the endpoint itself always succeeds.
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let (database, connection_status, collections) = match dealdesk_db::list_tables(&state.pool)
        .await
    {
        Ok(tables) => (
            "connected".to_string(),
            "connected",
            tables.into_iter().take(10).collect(),
        ),
        Err(err) => (
            format!("error: {}", truncate(&err.to_string(), 80)),
            "not connected",
            vec![],
        ),
    };

    Json(DiagnosticsResponse {
        backend: "running",
        database,
        connection_status,
        database_url: env_flag("DATABASE_URL"),
        database_name: env_flag("DATABASE_NAME"),
        collections,
    })
}

fn env_flag(name: &str) -> &'static str {
    if std::env::var(name).is_ok() {
        "set"
    } else {
        "not set"
    }
}

/// Truncate on a char boundary so error summaries stay bounded.
fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
