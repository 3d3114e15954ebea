//! Invoice model and request DTOs.

use dealdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `invoices` table.
///
/// `view_token` is the sole lookup key for the public view page. Dates are
/// stored as the caller-supplied strings, not parsed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub deal_id: DbId,
    pub my_details: serde_json::Value,
    pub client_name: String,
    pub project_name: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub bank_details: serde_json::Value,
    pub payment_reference: String,
    /// `draft` | `sent` | `paid`; only ever transitions `sent -> paid`.
    pub status: String,
    pub view_token: String,
    pub paid_at: Option<String>,
    pub payment_method: Option<String>,
    pub amount_received: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields for inserting a new invoice. Status takes its column default (`sent`).
#[derive(Debug, Clone)]
pub struct CreateInvoice {
    pub deal_id: DbId,
    pub my_details: serde_json::Value,
    pub client_name: String,
    pub project_name: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub bank_details: serde_json::Value,
    pub payment_reference: String,
    pub view_token: String,
}

/// Request payload for `POST /api/invoice`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoiceRequest {
    pub my_details: serde_json::Value,
    pub client_name: String,
    pub project_name: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub bank_details: serde_json::Value,
    pub payment_reference: String,
}

/// Request payload for `POST /api/invoice/{token}/paid`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkPaidRequest {
    /// ISO date string; defaults to today's UTC date when omitted.
    pub payment_date: Option<String>,
    pub payment_method: String,
    pub amount_received: f64,
    pub payment_reference: String,
}
