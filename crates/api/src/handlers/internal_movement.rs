//! Handlers for the `/internal-movements` resource.
//!
//! Creating and updating a movement runs the location lifecycle in
//! `InternalMovementRepo`; both change the artefact's stored location, so
//! the artefact listing cache is cleared after each.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use curator_core::error::CoreError;
use curator_core::types::DbId;
use curator_db::models::internal_movement::{CreateInternalMovement, UpdateInternalMovement};
use curator_db::repositories::InternalMovementRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/internal-movements
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movements = InternalMovementRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: movements }))
}

/// POST /api/v1/internal-movements
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInternalMovement>,
) -> AppResult<impl IntoResponse> {
    let movement = InternalMovementRepo::create(&state.pool, &input).await?;
    state.artefact_cache.invalidate();
    Ok((StatusCode::CREATED, Json(DataResponse { data: movement })))
}

/// GET /api/v1/internal-movements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movement = InternalMovementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "InternalMovement",
            id,
        }))?;
    Ok(Json(DataResponse { data: movement }))
}

/// PUT /api/v1/internal-movements/{id}
///
/// Supplying both return fields on an open movement closes it and sends the
/// artefact back to its original location.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInternalMovement>,
) -> AppResult<impl IntoResponse> {
    let movement = InternalMovementRepo::update(&state.pool, id, &input).await?;
    state.artefact_cache.invalidate();
    Ok(Json(DataResponse { data: movement }))
}

/// DELETE /api/v1/internal-movements/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if InternalMovementRepo::delete(&state.pool, id).await? {
        tracing::info!(movement_id = id, "Internal movement deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "InternalMovement",
            id,
        }))
    }
}

/// GET /api/v1/internal-movements/artefact/{artefact_id}
///
/// Movement history of one artefact, most recent first.
pub async fn list_by_artefact(
    State(state): State<AppState>,
    Path(artefact_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movements = InternalMovementRepo::list_by_artefact(&state.pool, artefact_id).await?;
    Ok(Json(DataResponse { data: movements }))
}

/// GET /api/v1/internal-movements/artefact/{artefact_id}/active
pub async fn get_active_by_artefact(
    State(state): State<AppState>,
    Path(artefact_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movement = InternalMovementRepo::find_active_by_artefact(&state.pool, artefact_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Active internal movement for artefact",
            id: artefact_id,
        }))?;
    Ok(Json(DataResponse { data: movement }))
}
