//! Handlers for the invoice lifecycle: create, fetch by token, mark paid.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use dealdesk_core::error::CoreError;
use dealdesk_core::token;
use dealdesk_core::types::DbId;
use dealdesk_db::models::deal::CreateDeal;
use dealdesk_db::models::invoice::{CreateInvoice, CreateInvoiceRequest, MarkPaidRequest};
use dealdesk_db::models::receipt::CreateReceipt;
use dealdesk_db::repositories::{DealRepo, InvoiceRepo, ReceiptRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for `POST /api/invoice`.
#[derive(Serialize)]
pub struct CreateInvoiceResponse {
    pub invoice_id: DbId,
    pub view_url_token: String,
}

/// Response for `POST /api/invoice/{token}/paid`.
#[derive(Serialize)]
pub struct MarkPaidResponse {
    pub status: &'static str,
    pub receipt_id: DbId,
}

/// POST /api/invoice
///
/// Creates an invoice against the deal matching the client + project pair,
/// inserting a deal only when none exists. Unlike MOU creation, this path
/// deduplicates deals.
pub async fn create_invoice(
    State(state): State<AppState>,
    Json(input): Json<CreateInvoiceRequest>,
) -> AppResult<impl IntoResponse> {
    let view_token = token::new_token();

    let deal_id = match DealRepo::find_by_client_project(
        &state.pool,
        &input.client_name,
        &input.project_name,
    )
    .await?
    {
        Some(deal) => deal.id,
        None => {
            let deal = DealRepo::create(
                &state.pool,
                &CreateDeal {
                    client_name: input.client_name.clone(),
                    project_name: input.project_name.clone(),
                    ..Default::default()
                },
            )
            .await?;
            deal.id
        }
    };

    let invoice = InvoiceRepo::create(
        &state.pool,
        &CreateInvoice {
            deal_id,
            my_details: input.my_details,
            client_name: input.client_name,
            project_name: input.project_name,
            invoice_number: input.invoice_number,
            invoice_date: input.invoice_date,
            due_date: input.due_date,
            amount: input.amount,
            currency: input.currency,
            bank_details: input.bank_details,
            payment_reference: input.payment_reference,
            view_token: view_token.clone(),
        },
    )
    .await?;

    tracing::info!(invoice_id = invoice.id, deal_id, "Invoice created");

    Ok(Json(CreateInvoiceResponse {
        invoice_id: invoice.id,
        view_url_token: view_token,
    }))
}

/// GET /api/invoice/{token}
///
/// Returns the full invoice record for a view token.
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<impl IntoResponse> {
    let invoice = InvoiceRepo::find_by_token(&state.pool, &token)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Invoice" }))?;

    Ok(Json(invoice))
}

/// POST /api/invoice/{token}/paid
///
/// Marks the invoice paid and records a receipt. The update and the receipt
/// insert are two independent store operations, not a transaction: a crash
/// between them leaves a paid invoice with no receipt, which the caller must
/// detect by re-fetching. Marking an already-paid invoice again inserts a
/// second receipt.
pub async fn mark_invoice_paid(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(input): Json<MarkPaidRequest>,
) -> AppResult<impl IntoResponse> {
    let invoice = InvoiceRepo::find_by_token(&state.pool, &token)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Invoice" }))?;

    let payment_date = input
        .payment_date
        .unwrap_or_else(|| Utc::now().date_naive().to_string());

    InvoiceRepo::mark_paid(
        &state.pool,
        &token,
        &payment_date,
        &input.payment_method,
        input.amount_received,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "Invoice" }))?;

    let receipt = ReceiptRepo::create(
        &state.pool,
        &CreateReceipt {
            invoice_token: token,
            deal_id: invoice.deal_id,
            my_details: invoice.my_details,
            client_name: invoice.client_name,
            project_name: invoice.project_name,
            invoice_number: invoice.invoice_number,
            original_amount: invoice.amount,
            amount_paid: input.amount_received,
            payment_date,
            payment_method: input.payment_method,
            payment_reference: input.payment_reference,
        },
    )
    .await?;

    tracing::info!(
        invoice_id = invoice.id,
        receipt_id = receipt.id,
        "Invoice marked paid"
    );

    Ok(Json(MarkPaidResponse {
        status: "paid",
        receipt_id: receipt.id,
    }))
}
