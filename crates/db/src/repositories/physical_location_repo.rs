//! Read-only repository for the `physical_locations` table.

use curator_core::types::DbId;
use sqlx::PgPool;

use crate::models::physical_location::PhysicalLocation;

/// Joined select shared by every query in this file.
const SELECT: &str = "SELECT pl.id, pl.shelf_id, s.code AS shelf_code, pl.level, \
    pl.column_letter, pl.created_at, pl.updated_at \
    FROM physical_locations pl \
    JOIN shelves s ON s.id = pl.shelf_id";

/// Provides lookups over shelf cells.
pub struct PhysicalLocationRepo;

impl PhysicalLocationRepo {
    /// Find a cell by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PhysicalLocation>, sqlx::Error> {
        let query = format!("{SELECT} WHERE pl.id = $1");
        sqlx::query_as::<_, PhysicalLocation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cells ordered by shelf code, level, column. Optionally
    /// restricted to one shelf.
    pub async fn list(
        pool: &PgPool,
        shelf_id: Option<DbId>,
    ) -> Result<Vec<PhysicalLocation>, sqlx::Error> {
        let query = format!(
            "{SELECT} WHERE ($1::BIGINT IS NULL OR pl.shelf_id = $1) \
             ORDER BY s.code, pl.level, pl.column_letter"
        );
        sqlx::query_as::<_, PhysicalLocation>(&query)
            .bind(shelf_id)
            .fetch_all(pool)
            .await
    }

    /// Find the cell at a given address on a shelf.
    pub async fn find_cell(
        pool: &PgPool,
        shelf_id: DbId,
        level: i32,
        column_letter: &str,
    ) -> Result<Option<PhysicalLocation>, sqlx::Error> {
        let query =
            format!("{SELECT} WHERE pl.shelf_id = $1 AND pl.level = $2 AND pl.column_letter = $3");
        sqlx::query_as::<_, PhysicalLocation>(&query)
            .bind(shelf_id)
            .bind(level)
            .bind(column_letter)
            .fetch_optional(pool)
            .await
    }
}
