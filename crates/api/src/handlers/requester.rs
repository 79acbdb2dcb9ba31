//! Handlers for the `/requesters` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use curator_core::error::CoreError;
use curator_core::requester;
use curator_core::types::DbId;
use curator_db::models::requester::{CreateRequester, UpdateRequester};
use curator_db::repositories::RequesterRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/requesters
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let requesters = RequesterRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: requesters }))
}

/// POST /api/v1/requesters
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRequester>,
) -> AppResult<impl IntoResponse> {
    requester::validate_requester_type(&input.requester_type)?;
    let created = RequesterRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/requesters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = RequesterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Requester",
            id,
        }))?;
    Ok(Json(DataResponse { data: found }))
}

/// PUT /api/v1/requesters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRequester>,
) -> AppResult<impl IntoResponse> {
    if let Some(kind) = &input.requester_type {
        requester::validate_requester_type(kind)?;
    }
    let updated = RequesterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Requester",
            id,
        }))?;
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/requesters/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if RequesterRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Requester",
            id,
        }))
    }
}
