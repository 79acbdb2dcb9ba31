//! Repository for the `collections` table.

use curator_core::types::DbId;
use sqlx::PgPool;

use crate::models::collection::{Collection, CreateCollection, UpdateCollection};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, year, created_at, updated_at";

/// Provides CRUD operations for collections.
pub struct CollectionRepo;

impl CollectionRepo {
    /// Insert a new collection, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCollection,
    ) -> Result<Collection, sqlx::Error> {
        let query = format!(
            "INSERT INTO collections (name, description, year) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collection>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.year)
            .fetch_one(pool)
            .await
    }

    /// Find a collection by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Collection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collections WHERE id = $1");
        sqlx::query_as::<_, Collection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all collections ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Collection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collections ORDER BY name, id");
        sqlx::query_as::<_, Collection>(&query).fetch_all(pool).await
    }

    /// Update a collection. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCollection,
    ) -> Result<Option<Collection>, sqlx::Error> {
        let query = format!(
            "UPDATE collections SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                year = COALESCE($4, year) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collection>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.year)
            .fetch_optional(pool)
            .await
    }

    /// Delete a collection by ID. Returns `true` if a row was removed.
    ///
    /// Artefacts in the collection keep their row with `collection_id`
    /// cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM collections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
