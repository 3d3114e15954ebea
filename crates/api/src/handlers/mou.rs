//! Handlers for the MOU lifecycle: create, fetch by token, sign.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use dealdesk_core::error::CoreError;
use dealdesk_core::token;
use dealdesk_core::types::DbId;
use dealdesk_db::models::deal::CreateDeal;
use dealdesk_db::models::mou::{CreateMou, CreateMouRequest, SignMouRequest};
use dealdesk_db::repositories::{DealRepo, MouRepo};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for `POST /api/mou`.
#[derive(Serialize)]
pub struct CreateMouResponse {
    pub mou_id: DbId,
    pub sign_url_token: String,
}

/// Response for `POST /api/mou/{token}/sign`.
#[derive(Serialize)]
pub struct SignMouResponse {
    pub status: &'static str,
}

/// POST /api/mou
///
/// Creates a deal and an MOU in one shot. A fresh deal row is inserted every
/// time, even when one already exists for the client + project pair; only
/// invoice creation deduplicates deals.
pub async fn create_mou(
    State(state): State<AppState>,
    Json(input): Json<CreateMouRequest>,
) -> AppResult<impl IntoResponse> {
    let sign_token = token::new_token();

    // Client name comes from the opaque details blob: "client_name" when
    // present and non-empty, else "name", else empty string.
    let client_name = blob_str(&input.client_details, "client_name")
        .filter(|s| !s.is_empty())
        .or_else(|| blob_str(&input.client_details, "name"))
        .unwrap_or_default();

    let deal = DealRepo::create(
        &state.pool,
        &CreateDeal {
            client_name,
            client_company: blob_str(&input.client_details, "company"),
            client_contact: blob_str(&input.client_details, "contact"),
            project_name: blob_str(&input.project, "name").unwrap_or_default(),
            project_description: blob_str(&input.project, "description"),
        },
    )
    .await?;

    let mou = MouRepo::create(
        &state.pool,
        &CreateMou {
            deal_id: deal.id,
            my_details: input.my_details,
            client_details: input.client_details,
            project: input.project,
            terms: input.terms,
            sign_token: sign_token.clone(),
        },
    )
    .await?;

    tracing::info!(mou_id = mou.id, deal_id = deal.id, "MOU created");

    Ok(Json(CreateMouResponse {
        mou_id: mou.id,
        sign_url_token: sign_token,
    }))
}

/// GET /api/mou/{token}
///
/// Returns the full MOU record for a sign token.
pub async fn get_mou(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mou = MouRepo::find_by_token(&state.pool, &token)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "MOU" }))?;

    Ok(Json(mou))
}

/// POST /api/mou/{token}/sign
///
/// Records the client signature. Requires `agree == true`; the update is a
/// single atomic find-and-update keyed on the token.
pub async fn sign_mou(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(input): Json<SignMouRequest>,
) -> AppResult<impl IntoResponse> {
    if !input.agree {
        return Err(AppError::BadRequest(
            "Agreement checkbox is required".to_string(),
        ));
    }

    let mou = MouRepo::sign(&state.pool, &token, &input.name, &input.title)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "MOU" }))?;

    tracing::info!(mou_id = mou.id, "MOU signed");

    Ok(Json(SignMouResponse { status: "signed" }))
}

/// Read a string value out of an opaque JSON blob by key.
fn blob_str(blob: &Value, key: &str) -> Option<String> {
    blob.get(key)
        .and_then(Value::as_str)
        .map(ToString::to_string)
}
