//! Route definitions for the applicant registry.

use axum::routing::get;
use axum::Router;

use crate::handlers::applicants;
use crate::state::AppState;

/// Routes mounted at `/applicants`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /directory    -> directory
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(applicants::list).post(applicants::create))
        .route("/directory", get(applicants::directory))
        .route(
            "/{id}",
            get(applicants::get_by_id)
                .put(applicants::update)
                .delete(applicants::delete),
        )
}
