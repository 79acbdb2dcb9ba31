//! Repository for the `shelves` table.

use curator_core::location;
use curator_core::types::DbId;
use sqlx::PgPool;

use crate::error::LifecycleResult;
use crate::models::shelf::{CreateShelf, Shelf, UpdateShelf};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, created_at, updated_at";

/// Provides CRUD operations for shelves.
pub struct ShelfRepo;

impl ShelfRepo {
    /// Insert a new shelf together with all of its cells.
    ///
    /// Regular shelves get the full level x column grid, work tables a
    /// single cell. Both inserts share one transaction.
    pub async fn create(pool: &PgPool, input: &CreateShelf) -> Result<Shelf, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("INSERT INTO shelves (code) VALUES ($1) RETURNING {COLUMNS}");
        let shelf = sqlx::query_as::<_, Shelf>(&query)
            .bind(input.code)
            .fetch_one(&mut *tx)
            .await?;

        let cells = location::cells_for_shelf(shelf.code);
        for &(level, column) in &cells {
            sqlx::query(
                "INSERT INTO physical_locations (shelf_id, level, column_letter) \
                 VALUES ($1, $2, $3)",
            )
            .bind(shelf.id)
            .bind(level)
            .bind(column)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::debug!(
            shelf_id = shelf.id,
            code = shelf.code,
            cells = cells.len(),
            "Provisioned shelf cells"
        );
        Ok(shelf)
    }

    /// Find a shelf by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Shelf>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shelves WHERE id = $1");
        sqlx::query_as::<_, Shelf>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all shelves ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<Shelf>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shelves ORDER BY code");
        sqlx::query_as::<_, Shelf>(&query).fetch_all(pool).await
    }

    /// Renumber a shelf. Its cells are left as provisioned, so the new
    /// code must be of the same kind (regular shelf or work table).
    ///
    /// Returns `Ok(None)` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShelf,
    ) -> LifecycleResult<Option<Shelf>> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM shelves WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, Shelf>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        if let Some(code) = input.code {
            location::validate_code_change(current.code, code)?;
        }

        let query = format!(
            "UPDATE shelves SET code = COALESCE($2, code) WHERE id = $1 RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Shelf>(&query)
            .bind(id)
            .bind(input.code)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete a shelf and its cells. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while any artefact or movement
    /// still references one of its cells.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shelves WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
