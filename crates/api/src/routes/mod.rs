//! Route definitions.

pub mod deal;
pub mod health;
pub mod invoice;
pub mod mou;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /mou                          create MOU (POST)
/// /mou/{token}                  fetch MOU by sign token (GET)
/// /mou/{token}/sign             sign MOU (POST)
///
/// /invoice                      create invoice (POST)
/// /invoice/{token}              fetch invoice by view token (GET)
/// /invoice/{token}/paid         mark invoice paid (POST)
///
/// /deal/snapshot                derived deal status (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(mou::router())
        .merge(invoice::router())
        .merge(deal::router())
}
