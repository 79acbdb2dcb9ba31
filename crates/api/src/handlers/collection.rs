//! Handlers for the `/collections` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use curator_core::error::CoreError;
use curator_core::types::DbId;
use curator_db::models::collection::{CreateCollection, UpdateCollection};
use curator_db::repositories::CollectionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_name;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/collections
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let collections = CollectionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: collections }))
}

/// POST /api/v1/collections
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCollection>,
) -> AppResult<impl IntoResponse> {
    require_name("Collection", &input.name)?;
    let created = CollectionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/collections/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = CollectionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collection",
            id,
        }))?;
    Ok(Json(DataResponse { data: found }))
}

/// PUT /api/v1/collections/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCollection>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        require_name("Collection", name)?;
    }
    let updated = CollectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collection",
            id,
        }))?;
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/collections/{id}
///
/// Member artefacts lose their `collection_id`, so cached listings are
/// dropped.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if CollectionRepo::delete(&state.pool, id).await? {
        state.artefact_cache.invalidate();
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Collection",
            id,
        }))
    }
}
