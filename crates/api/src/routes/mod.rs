//! Route definitions.

pub mod applicants;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /applicants                 list, create
/// /applicants/directory       joined compact listing
/// /applicants/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/applicants", applicants::router())
}
