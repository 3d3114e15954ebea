//! Receipt model: immutable proof-of-payment records.

use dealdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `receipts` table.
///
/// References the originating invoice by its `view_token` rather than its id.
/// Never updated after creation; repeated mark-paid calls on the same invoice
/// produce duplicate rows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Receipt {
    pub id: DbId,
    pub invoice_token: String,
    pub deal_id: DbId,
    pub my_details: serde_json::Value,
    pub client_name: String,
    pub project_name: String,
    pub invoice_number: String,
    pub original_amount: f64,
    pub amount_paid: f64,
    pub payment_date: String,
    pub payment_method: String,
    pub payment_reference: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields for inserting a new receipt, copied from the invoice being paid
/// and the mark-paid request.
#[derive(Debug, Clone)]
pub struct CreateReceipt {
    pub invoice_token: String,
    pub deal_id: DbId,
    pub my_details: serde_json::Value,
    pub client_name: String,
    pub project_name: String,
    pub invoice_number: String,
    pub original_amount: f64,
    pub amount_paid: f64,
    pub payment_date: String,
    pub payment_method: String,
    pub payment_reference: String,
}
