//! Handlers for the `/artefacts` resource.
//!
//! Only the descriptive fields are editable here. Location and loan
//! availability change through the internal movement and loan endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use curator_core::error::CoreError;
use curator_core::types::DbId;
use curator_db::models::artefact::{CreateArtefact, UpdateArtefact};
use curator_db::repositories::ArtefactRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_name;
use crate::query::ShelfFilterParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/artefacts?shelf_id=
///
/// Served through the artefact listing cache.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ShelfFilterParams>,
) -> AppResult<impl IntoResponse> {
    let pool = state.pool.clone();
    let artefacts = state
        .artefact_cache
        .get_or_load(params.shelf_id, || async move {
            ArtefactRepo::list(&pool, params.shelf_id).await
        })
        .await?;
    Ok(Json(DataResponse {
        data: artefacts.as_ref().clone(),
    }))
}

/// POST /api/v1/artefacts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArtefact>,
) -> AppResult<impl IntoResponse> {
    require_name("Artefact", &input.name)?;
    let artefact = ArtefactRepo::create(&state.pool, &input).await?;
    state.artefact_cache.invalidate();

    tracing::info!(artefact_id = artefact.id, "Artefact created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: artefact })))
}

/// GET /api/v1/artefacts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let artefact = ArtefactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artefact",
            id,
        }))?;
    Ok(Json(DataResponse { data: artefact }))
}

/// PUT /api/v1/artefacts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArtefact>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        require_name("Artefact", name)?;
    }
    let artefact = ArtefactRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artefact",
            id,
        }))?;
    state.artefact_cache.invalidate();
    Ok(Json(DataResponse { data: artefact }))
}

/// DELETE /api/v1/artefacts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ArtefactRepo::delete(&state.pool, id).await?;
    if deleted {
        state.artefact_cache.invalidate();
        tracing::info!(artefact_id = id, "Artefact deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Artefact",
            id,
        }))
    }
}
