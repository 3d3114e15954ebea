//! Handler for the deal snapshot: the derived, read-only status summary of a
//! deal's MOU / Invoice / Receipt progression.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use dealdesk_core::error::CoreError;
use dealdesk_core::snapshot::{self, DocumentStatus};
use dealdesk_db::repositories::{DealRepo, InvoiceRepo, MouRepo, ReceiptRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/deal/snapshot`.
#[derive(Debug, Deserialize)]
pub struct SnapshotParams {
    pub client_name: String,
    pub project_name: String,
}

/// Response for `GET /api/deal/snapshot`.
#[derive(Serialize)]
pub struct SnapshotResponse {
    pub client_name: String,
    pub project_name: String,
    pub mou: DocumentStatus,
    pub invoice: DocumentStatus,
    pub receipt_available: bool,
    pub next_step: String,
}

/// GET /api/deal/snapshot?client_name=&project_name=
///
/// Finds the deal for the pair, then independently the most recent MOU and
/// invoice for it, and the most recent receipt for that invoice's token.
/// Status projection and the next-step hint live in `dealdesk_core::snapshot`.
pub async fn deal_snapshot(
    State(state): State<AppState>,
    Query(params): Query<SnapshotParams>,
) -> AppResult<impl IntoResponse> {
    let deal =
        DealRepo::find_by_client_project(&state.pool, &params.client_name, &params.project_name)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Deal" }))?;

    let mou = MouRepo::latest_for_deal(&state.pool, deal.id).await?;
    let invoice = InvoiceRepo::latest_for_deal(&state.pool, deal.id).await?;
    let receipt = match &invoice {
        Some(inv) => ReceiptRepo::latest_for_invoice_token(&state.pool, &inv.view_token).await?,
        None => None,
    };

    let mou_status = snapshot::document_status(
        mou.as_ref().map(|m| m.status.as_str()),
        mou.as_ref().map(|m| m.sign_token.as_str()),
        "/sign",
    );
    let invoice_status = snapshot::document_status(
        invoice.as_ref().map(|i| i.status.as_str()),
        invoice.as_ref().map(|i| i.view_token.as_str()),
        "/invoice",
    );

    let receipt_available = receipt.is_some();
    let next_step =
        snapshot::next_step(&mou_status.status, &invoice_status.status, receipt_available);

    Ok(Json(SnapshotResponse {
        client_name: params.client_name,
        project_name: params.project_name,
        mou: mou_status,
        invoice: invoice_status,
        receipt_available,
        next_step: next_step.to_string(),
    }))
}
