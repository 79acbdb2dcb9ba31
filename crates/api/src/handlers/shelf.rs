//! Handlers for the `/shelves` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use curator_core::error::CoreError;
use curator_core::location;
use curator_core::types::DbId;
use curator_db::models::shelf::{CreateShelf, UpdateShelf};
use curator_db::repositories::ShelfRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/shelves
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let shelves = ShelfRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: shelves }))
}

/// POST /api/v1/shelves
///
/// Creates the shelf and provisions its cells.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateShelf>,
) -> AppResult<impl IntoResponse> {
    location::validate_shelf_code(input.code)?;
    let shelf = ShelfRepo::create(&state.pool, &input).await?;
    tracing::info!(
        shelf_id = shelf.id,
        code = shelf.code,
        work_table = location::is_work_table(shelf.code),
        "Shelf created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: shelf })))
}

/// GET /api/v1/shelves/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let shelf = ShelfRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shelf", id }))?;
    Ok(Json(DataResponse { data: shelf }))
}

/// PUT /api/v1/shelves/{id}
///
/// Only the code changes, and only within the same kind of shelf. Existing
/// cells are kept as they are.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShelf>,
) -> AppResult<impl IntoResponse> {
    let shelf = ShelfRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shelf", id }))?;
    Ok(Json(DataResponse { data: shelf }))
}

/// DELETE /api/v1/shelves/{id}
///
/// Refused with 409 while any artefact or movement references one of the
/// shelf's cells.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ShelfRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Shelf", id }))
    }
}
