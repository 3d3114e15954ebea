//! MOU model and request DTOs.

use dealdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `mous` table.
///
/// The detail fields are opaque JSON blobs; the application imposes no shape
/// on them beyond what the client sent. `sign_token` is the sole lookup key
/// for the public signing page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mou {
    pub id: DbId,
    pub deal_id: DbId,
    pub my_details: serde_json::Value,
    pub client_details: serde_json::Value,
    pub project: serde_json::Value,
    pub terms: serde_json::Value,
    /// `draft` | `sent` | `signed`; only ever transitions `sent -> signed`.
    pub status: String,
    pub sign_token: String,
    pub signed_at: Option<Timestamp>,
    pub client_signature_name: Option<String>,
    pub client_signature_title: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields for inserting a new MOU. Status takes its column default (`sent`).
#[derive(Debug, Clone)]
pub struct CreateMou {
    pub deal_id: DbId,
    pub my_details: serde_json::Value,
    pub client_details: serde_json::Value,
    pub project: serde_json::Value,
    pub terms: serde_json::Value,
    pub sign_token: String,
}

/// Request payload for `POST /api/mou`.
///
/// Every field is a free-form key/value map. The client name is read from
/// `client_details` (key `client_name`, falling back to `name`) and the
/// project name from `project` (key `name`).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMouRequest {
    pub my_details: serde_json::Value,
    pub client_details: serde_json::Value,
    pub project: serde_json::Value,
    pub terms: serde_json::Value,
}

/// Request payload for `POST /api/mou/{token}/sign`.
#[derive(Debug, Clone, Deserialize)]
pub struct SignMouRequest {
    pub name: String,
    pub title: String,
    pub agree: bool,
}
