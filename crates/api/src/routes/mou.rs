use axum::routing::{get, post};
use axum::Router;

use crate::handlers::mou;
use crate::state::AppState;

/// MOU routes mounted at `/api`.
///
/// ```text
/// POST /mou                 -> create_mou
/// GET  /mou/{token}         -> get_mou
/// POST /mou/{token}/sign    -> sign_mou
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mou", post(mou::create_mou))
        .route("/mou/{token}", get(mou::get_mou))
        .route("/mou/{token}/sign", post(mou::sign_mou))
}
