//! Integration tests for the banner and diagnostics endpoints and general
//! HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET / returns the service banner
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn banner_returns_message_and_version(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Dealdesk Backend");
    assert!(json["version"].is_string());
}

// ---------------------------------------------------------------------------
// Test: GET /test reports store connectivity and table names
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn diagnostics_reports_connected_store(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/test").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["backend"], "running");
    assert_eq!(json["database"], "connected");
    assert_eq!(json["connection_status"], "connected");
    // DATABASE_URL must be set for the sqlx test harness to run at all.
    assert_eq!(json["database_url"], "set");

    let tables: Vec<&str> = json["collections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    for table in ["deals", "invoices", "mous", "receipts"] {
        assert!(tables.contains(&table), "missing table {table}");
    }
}

// ---------------------------------------------------------------------------
// Test: unknown route returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );
}
