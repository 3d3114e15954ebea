//! Deal model: the identity anchor linking one client to one project.

use dealdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `deals` table.
///
/// Deals are created implicitly the first time an MOU or Invoice is created
/// for a client + project pair; no handler ever deletes one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Deal {
    pub id: DbId,
    pub client_name: String,
    pub client_company: Option<String>,
    pub client_contact: Option<String>,
    pub project_name: String,
    pub project_description: Option<String>,
    pub my_name: String,
    pub my_contact: Option<String>,
    /// `active` | `archived`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields for inserting a new deal. Owner name and status take their
/// column defaults.
#[derive(Debug, Clone, Default)]
pub struct CreateDeal {
    pub client_name: String,
    pub client_company: Option<String>,
    pub client_contact: Option<String>,
    pub project_name: String,
    pub project_description: Option<String>,
}
