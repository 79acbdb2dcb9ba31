//! Handlers for the `/internal-classifiers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use curator_core::error::CoreError;
use curator_core::types::DbId;
use curator_db::models::internal_classifier::{
    CreateInternalClassifier, UpdateInternalClassifier,
};
use curator_db::repositories::InternalClassifierRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_name;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/internal-classifiers
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let classifiers = InternalClassifierRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: classifiers }))
}

/// POST /api/v1/internal-classifiers
///
/// A repeated (name, number) pair is a 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInternalClassifier>,
) -> AppResult<impl IntoResponse> {
    require_name("Internal classifier", &input.name)?;
    let created = InternalClassifierRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/internal-classifiers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = InternalClassifierRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InternalClassifier",
            id,
        }))?;
    Ok(Json(DataResponse { data: found }))
}

/// PUT /api/v1/internal-classifiers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInternalClassifier>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        require_name("Internal classifier", name)?;
    }
    let updated = InternalClassifierRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InternalClassifier",
            id,
        }))?;
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/internal-classifiers/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if InternalClassifierRepo::delete(&state.pool, id).await? {
        state.artefact_cache.invalidate();
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "InternalClassifier",
            id,
        }))
    }
}
