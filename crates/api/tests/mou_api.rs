//! Integration tests for the MOU lifecycle endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

fn mou_payload(client_name: &str, project_name: &str) -> serde_json::Value {
    json!({
        "my_details": {"name": "Dimiro Networks", "email": "hello@example.com"},
        "client_details": {"client_name": client_name, "company": "Acme Holdings", "contact": "ceo@acme.test"},
        "project": {"name": project_name, "description": "Marketing site rebuild"},
        "terms": {"fee": "5000 USD", "duration": "6 weeks"}
    })
}

// ---------------------------------------------------------------------------
// Test: create MOU returns a token that resolves to a "sent" record
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_mou_token_resolves_to_sent_record(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/mou", mou_payload("Acme", "Website")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["mou_id"].is_i64());
    let token = json["sign_url_token"].as_str().unwrap().to_string();
    assert_eq!(token.len(), 32);

    let response = get(app, &format!("/api/mou/{token}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let mou = body_json(response).await;
    assert_eq!(mou["status"], "sent");
    assert_eq!(mou["sign_token"], token.as_str());
    assert_eq!(mou["client_details"]["client_name"], "Acme");
    assert!(mou["signed_at"].is_null());
}

// ---------------------------------------------------------------------------
// Test: MOU creation never reuses an existing deal
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_mou_always_inserts_a_new_deal(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    for _ in 0..2 {
        let response = post_json(app.clone(), "/api/mou", mou_payload("Acme", "Website")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let deal_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM deals")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(deal_count, 2);
}

// ---------------------------------------------------------------------------
// Test: client name falls back to the "name" key
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_mou_client_name_falls_back_to_name_key(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let payload = json!({
        "my_details": {},
        "client_details": {"name": "Globex"},
        "project": {"name": "Rebrand"},
        "terms": {}
    });
    let response = post_json(app, "/api/mou", payload).await;
    assert_eq!(response.status(), StatusCode::OK);

    let client_name: String = sqlx::query_scalar("SELECT client_name FROM deals")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(client_name, "Globex");
}

// ---------------------------------------------------------------------------
// Test: signing without agreement is rejected and mutates nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn sign_without_agreement_returns_400_and_keeps_state(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/mou", mou_payload("Acme", "Website")).await;
    let token = body_json(response).await["sign_url_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = post_json(
        app.clone(),
        &format!("/api/mou/{token}/sign"),
        json!({"name": "Jane Doe", "title": "CEO", "agree": false}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Agreement checkbox is required");

    let response = get(app, &format!("/api/mou/{token}")).await;
    let mou = body_json(response).await;
    assert_eq!(mou["status"], "sent");
    assert!(mou["client_signature_name"].is_null());
    assert!(mou["signed_at"].is_null());
}

// ---------------------------------------------------------------------------
// Test: signing transitions sent -> signed and records the signer
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn sign_transitions_sent_to_signed(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/mou", mou_payload("Acme", "Website")).await;
    let token = body_json(response).await["sign_url_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = post_json(
        app.clone(),
        &format!("/api/mou/{token}/sign"),
        json!({"name": "Jane Doe", "title": "CEO", "agree": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "signed");

    let response = get(app, &format!("/api/mou/{token}")).await;
    let mou = body_json(response).await;
    assert_eq!(mou["status"], "signed");
    assert_eq!(mou["client_signature_name"], "Jane Doe");
    assert_eq!(mou["client_signature_title"], "CEO");
    assert!(mou["signed_at"].is_string());
}

// ---------------------------------------------------------------------------
// Test: signing an unknown token yields 404 and creates nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn sign_unknown_token_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        app,
        "/api/mou/ffffffffffffffffffffffffffffffff/sign",
        json!({"name": "Jane Doe", "title": "CEO", "agree": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "MOU not found");

    let mou_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mous")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(mou_count, 0);
}

// ---------------------------------------------------------------------------
// Test: fetching an unknown token yields 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn get_unknown_mou_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/mou/ffffffffffffffffffffffffffffffff").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "MOU not found");
}
