//! Handlers for the read-only `/physical-locations` resource.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use curator_core::error::CoreError;
use curator_core::location;
use curator_core::types::DbId;
use curator_db::models::physical_location::{CellAddress, PhysicalLocationFilter};
use curator_db::repositories::PhysicalLocationRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/physical-locations?shelf_id=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<PhysicalLocationFilter>,
) -> AppResult<impl IntoResponse> {
    let cells = PhysicalLocationRepo::list(&state.pool, filter.shelf_id).await?;
    Ok(Json(DataResponse { data: cells }))
}

/// GET /api/v1/physical-locations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let cell = PhysicalLocationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PhysicalLocation",
            id,
        }))?;
    Ok(Json(DataResponse { data: cell }))
}

/// GET /api/v1/physical-locations/lookup?shelf_id=&level=&column_letter=
///
/// Resolve a shelf address to its cell.
pub async fn lookup(
    State(state): State<AppState>,
    Query(address): Query<CellAddress>,
) -> AppResult<impl IntoResponse> {
    location::validate_level(address.level)?;
    location::validate_column(&address.column_letter)?;

    let cell = PhysicalLocationRepo::find_cell(
        &state.pool,
        address.shelf_id,
        address.level,
        &address.column_letter,
    )
    .await?
    .ok_or_else(|| {
        AppError::BadRequest(format!(
            "Shelf {} has no cell at level {} column {}",
            address.shelf_id, address.level, address.column_letter
        ))
    })?;
    Ok(Json(DataResponse { data: cell }))
}
