//! Repository for the `deals` table.

use sqlx::PgPool;

use crate::models::deal::{CreateDeal, Deal};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_name, client_company, client_contact, project_name, \
     project_description, my_name, my_contact, status, created_at, updated_at";

/// Provides CRUD operations for deals.
pub struct DealRepo;

impl DealRepo {
    /// Insert a new deal, returning the created row.
    ///
    /// Owner name and status fall back to their column defaults.
    pub async fn create(pool: &PgPool, input: &CreateDeal) -> Result<Deal, sqlx::Error> {
        let query = format!(
            "INSERT INTO deals (client_name, client_company, client_contact, project_name, project_description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Deal>(&query)
            .bind(&input.client_name)
            .bind(&input.client_company)
            .bind(&input.client_contact)
            .bind(&input.project_name)
            .bind(&input.project_description)
            .fetch_one(pool)
            .await
    }

    /// Find a deal by exact client + project name match.
    ///
    /// When duplicates exist (MOU creation inserts a fresh deal every time),
    /// returns the earliest one.
    pub async fn find_by_client_project(
        pool: &PgPool,
        client_name: &str,
        project_name: &str,
    ) -> Result<Option<Deal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM deals
             WHERE client_name = $1 AND project_name = $2
             ORDER BY created_at ASC, id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, Deal>(&query)
            .bind(client_name)
            .bind(project_name)
            .fetch_optional(pool)
            .await
    }
}
