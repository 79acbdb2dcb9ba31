//! Handlers for the `/loans` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use curator_core::error::CoreError;
use curator_core::types::DbId;
use curator_db::models::loan::{CreateLoan, UpdateLoan};
use curator_db::repositories::LoanRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/loans
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let loans = LoanRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: loans }))
}

/// POST /api/v1/loans
///
/// Responds 409 `ARTEFACT_UNAVAILABLE` when the artefact is already lent.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLoan>,
) -> AppResult<impl IntoResponse> {
    let loan = LoanRepo::create(&state.pool, &input).await?;
    state.artefact_cache.invalidate();
    Ok((StatusCode::CREATED, Json(DataResponse { data: loan })))
}

/// GET /api/v1/loans/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let loan = LoanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Loan", id }))?;
    Ok(Json(DataResponse { data: loan }))
}

/// PUT /api/v1/loans/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLoan>,
) -> AppResult<impl IntoResponse> {
    let loan = LoanRepo::update(&state.pool, id, &input).await?;
    state.artefact_cache.invalidate();
    Ok(Json(DataResponse { data: loan }))
}

/// DELETE /api/v1/loans/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    LoanRepo::delete(&state.pool, id).await?;
    state.artefact_cache.invalidate();
    Ok(StatusCode::NO_CONTENT)
}
