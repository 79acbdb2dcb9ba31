//! Repository for the `internal_classifiers` table.

use curator_core::types::DbId;
use sqlx::PgPool;

use crate::models::internal_classifier::{
    CreateInternalClassifier, InternalClassifier, UpdateInternalClassifier,
};

const COLUMNS: &str = "id, number, name, created_at, updated_at";

/// Provides CRUD operations for internal classifiers.
pub struct InternalClassifierRepo;

impl InternalClassifierRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateInternalClassifier,
    ) -> Result<InternalClassifier, sqlx::Error> {
        let query = format!(
            "INSERT INTO internal_classifiers (number, name) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InternalClassifier>(&query)
            .bind(input.number)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InternalClassifier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM internal_classifiers WHERE id = $1");
        sqlx::query_as::<_, InternalClassifier>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List classifiers by name, then number.
    pub async fn list(pool: &PgPool) -> Result<Vec<InternalClassifier>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM internal_classifiers ORDER BY name, number NULLS FIRST, id"
        );
        sqlx::query_as::<_, InternalClassifier>(&query)
            .fetch_all(pool)
            .await
    }

    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInternalClassifier,
    ) -> Result<Option<InternalClassifier>, sqlx::Error> {
        let query = format!(
            "UPDATE internal_classifiers SET \
                number = COALESCE($2, number), \
                name = COALESCE($3, name) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InternalClassifier>(&query)
            .bind(id)
            .bind(input.number)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM internal_classifiers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
