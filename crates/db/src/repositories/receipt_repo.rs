//! Repository for the `receipts` table.

use dealdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::receipt::{CreateReceipt, Receipt};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, invoice_token, deal_id, my_details, client_name, project_name, \
     invoice_number, original_amount, amount_paid, payment_date, payment_method, \
     payment_reference, created_at, updated_at";

/// Provides create/read operations for receipts. Receipts are never updated.
pub struct ReceiptRepo;

impl ReceiptRepo {
    /// Insert a new receipt, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReceipt) -> Result<Receipt, sqlx::Error> {
        let query = format!(
            "INSERT INTO receipts (invoice_token, deal_id, my_details, client_name,
                project_name, invoice_number, original_amount, amount_paid,
                payment_date, payment_method, payment_reference)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Receipt>(&query)
            .bind(&input.invoice_token)
            .bind(input.deal_id)
            .bind(&input.my_details)
            .bind(&input.client_name)
            .bind(&input.project_name)
            .bind(&input.invoice_number)
            .bind(input.original_amount)
            .bind(input.amount_paid)
            .bind(&input.payment_date)
            .bind(&input.payment_method)
            .bind(&input.payment_reference)
            .fetch_one(pool)
            .await
    }

    /// Find a receipt by its internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Receipt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM receipts WHERE id = $1");
        sqlx::query_as::<_, Receipt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Most recently created receipt for an invoice token, if any. Duplicates
    /// are possible since mark-paid inserts unconditionally.
    pub async fn latest_for_invoice_token(
        pool: &PgPool,
        invoice_token: &str,
    ) -> Result<Option<Receipt>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM receipts
             WHERE invoice_token = $1
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Receipt>(&query)
            .bind(invoice_token)
            .fetch_optional(pool)
            .await
    }
}
