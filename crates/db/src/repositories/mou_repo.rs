//! Repository for the `mous` table.

use dealdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::mou::{CreateMou, Mou};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, deal_id, my_details, client_details, project, terms, status, \
     sign_token, signed_at, client_signature_name, client_signature_title, \
     created_at, updated_at";

/// Provides CRUD operations for MOUs.
pub struct MouRepo;

impl MouRepo {
    /// Insert a new MOU, returning the created row. Status defaults to `sent`.
    pub async fn create(pool: &PgPool, input: &CreateMou) -> Result<Mou, sqlx::Error> {
        let query = format!(
            "INSERT INTO mous (deal_id, my_details, client_details, project, terms, sign_token)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mou>(&query)
            .bind(input.deal_id)
            .bind(&input.my_details)
            .bind(&input.client_details)
            .bind(&input.project)
            .bind(&input.terms)
            .bind(&input.sign_token)
            .fetch_one(pool)
            .await
    }

    /// Find an MOU by its sign token.
    pub async fn find_by_token(pool: &PgPool, token: &str) -> Result<Option<Mou>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mous WHERE sign_token = $1");
        sqlx::query_as::<_, Mou>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Atomically mark the MOU with the given token as signed, recording the
    /// signer's name, title, and the signing timestamp.
    ///
    /// Returns `None` if no MOU has that token. This is the single
    /// find-and-update in the system; everything else is independent reads
    /// and writes.
    pub async fn sign(
        pool: &PgPool,
        token: &str,
        signer_name: &str,
        signer_title: &str,
    ) -> Result<Option<Mou>, sqlx::Error> {
        let query = format!(
            "UPDATE mous SET
                status = 'signed',
                client_signature_name = $2,
                client_signature_title = $3,
                signed_at = now(),
                updated_at = now()
             WHERE sign_token = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mou>(&query)
            .bind(token)
            .bind(signer_name)
            .bind(signer_title)
            .fetch_optional(pool)
            .await
    }

    /// Most recently created MOU for a deal, if any. Ties on `created_at`
    /// break by highest id.
    pub async fn latest_for_deal(pool: &PgPool, deal_id: DbId) -> Result<Option<Mou>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mous
             WHERE deal_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Mou>(&query)
            .bind(deal_id)
            .fetch_optional(pool)
            .await
    }
}
