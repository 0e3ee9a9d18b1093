//! Handlers for the `/applicants` resource.
//!
//! The create and update paths run the intake form through trimming and
//! validation before anything touches the database; the repository then
//! performs the whole multi-table write in one transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use talaan_core::error::CoreError;
use talaan_core::intake::ApplicantIntake;
use talaan_core::types::DbId;
use talaan_db::models::aggregate::NewApplicantAggregate;
use talaan_db::repositories::ApplicantRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/applicants
///
/// List all applicants as flat summaries, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summaries = ApplicantRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: summaries }))
}

/// GET /api/v1/applicants/directory
///
/// Compact listing joined with the home-address city and province.
pub async fn directory(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = ApplicantRepo::list_directory(&state.pool).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/applicants/{id}
///
/// Get one applicant with every dependent section assembled.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let aggregate = ApplicantRepo::find_aggregate(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Applicant",
            id,
        }))?;
    Ok(Json(DataResponse { data: aggregate }))
}

/// POST /api/v1/applicants
///
/// Register a new applicant. Validation failures report every violation in
/// one message and nothing is written; a duplicate email is a conflict.
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<ApplicantIntake>,
) -> AppResult<impl IntoResponse> {
    let form = form.trimmed();

    let errors = form.validate();
    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(errors.join(", "))));
    }

    if ApplicantRepo::email_exists(&state.pool, &form.email).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "An applicant with email {} already exists",
            form.email
        ))));
    }

    let aggregate = NewApplicantAggregate::from_intake(&form);
    let applicant = ApplicantRepo::create(&state.pool, &aggregate).await?;
    tracing::info!(applicant_id = applicant.applicant_id, "Registered applicant");

    Ok((StatusCode::CREATED, Json(DataResponse { data: applicant })))
}

/// PUT /api/v1/applicants/{id}
///
/// Amend an existing applicant. Format rules apply only to fields that were
/// filled in; the update fan-out runs in one transaction.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(form): Json<ApplicantIntake>,
) -> AppResult<impl IntoResponse> {
    let form = form.trimmed();

    let errors = form.validate_for_update();
    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(errors.join(", "))));
    }

    let aggregate = NewApplicantAggregate::from_intake(&form);
    let updated = ApplicantRepo::update(&state.pool, id, &aggregate).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Applicant",
            id,
        }));
    }

    let aggregate = ApplicantRepo::find_aggregate(&state.pool, id)
        .await?
        .expect("just updated");
    Ok(Json(DataResponse { data: aggregate }))
}

/// DELETE /api/v1/applicants/{id}
///
/// Remove the applicant and every dependent row in one transaction.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ApplicantRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Applicant",
            id,
        }))
    }
}
