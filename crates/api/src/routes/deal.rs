use axum::routing::get;
use axum::Router;

use crate::handlers::deal;
use crate::state::AppState;

/// Deal routes mounted at `/api`.
///
/// ```text
/// GET /deal/snapshot    -> deal_snapshot
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/deal/snapshot", get(deal::deal_snapshot))
}
