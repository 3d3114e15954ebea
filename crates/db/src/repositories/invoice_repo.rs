//! Repository for the `invoices` table.

use dealdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::invoice::{CreateInvoice, Invoice};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, deal_id, my_details, client_name, project_name, invoice_number, \
     invoice_date, due_date, amount, currency, bank_details, payment_reference, \
     status, view_token, paid_at, payment_method, amount_received, \
     created_at, updated_at";

/// Provides CRUD operations for invoices.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert a new invoice, returning the created row. Status defaults to `sent`.
    pub async fn create(pool: &PgPool, input: &CreateInvoice) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices (deal_id, my_details, client_name, project_name,
                invoice_number, invoice_date, due_date, amount, currency,
                bank_details, payment_reference, view_token)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(input.deal_id)
            .bind(&input.my_details)
            .bind(&input.client_name)
            .bind(&input.project_name)
            .bind(&input.invoice_number)
            .bind(&input.invoice_date)
            .bind(&input.due_date)
            .bind(input.amount)
            .bind(&input.currency)
            .bind(&input.bank_details)
            .bind(&input.payment_reference)
            .bind(&input.view_token)
            .fetch_one(pool)
            .await
    }

    /// Find an invoice by its view token.
    pub async fn find_by_token(pool: &PgPool, token: &str) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices WHERE view_token = $1");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Mark the invoice with the given token as paid, recording the payment
    /// fields. Returns `None` if no invoice has that token.
    ///
    /// No guard against an already-paid invoice: marking twice overwrites the
    /// payment fields and the caller will insert a second receipt.
    pub async fn mark_paid(
        pool: &PgPool,
        token: &str,
        paid_at: &str,
        payment_method: &str,
        amount_received: f64,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "UPDATE invoices SET
                status = 'paid',
                paid_at = $2,
                payment_method = $3,
                amount_received = $4,
                updated_at = now()
             WHERE view_token = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(token)
            .bind(paid_at)
            .bind(payment_method)
            .bind(amount_received)
            .fetch_optional(pool)
            .await
    }

    /// Most recently created invoice for a deal, if any. Ties on `created_at`
    /// break by highest id.
    pub async fn latest_for_deal(
        pool: &PgPool,
        deal_id: DbId,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM invoices
             WHERE deal_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(deal_id)
            .fetch_optional(pool)
            .await
    }
}
