use axum::routing::{get, post};
use axum::Router;

use crate::handlers::invoice;
use crate::state::AppState;

/// Invoice routes mounted at `/api`.
///
/// ```text
/// POST /invoice                 -> create_invoice
/// GET  /invoice/{token}         -> get_invoice
/// POST /invoice/{token}/paid    -> mark_invoice_paid
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/invoice", post(invoice::create_invoice))
        .route("/invoice/{token}", get(invoice::get_invoice))
        .route("/invoice/{token}/paid", post(invoice::mark_invoice_paid))
}
