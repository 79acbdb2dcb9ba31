//! Repository for the `requesters` table.

use curator_core::types::DbId;
use sqlx::PgPool;

use crate::models::requester::{CreateRequester, Requester, UpdateRequester};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, requester_type, first_name, last_name, dni, email, phone_number, \
    created_at, updated_at";

/// Provides CRUD operations for requesters.
pub struct RequesterRepo;

impl RequesterRepo {
    /// Insert a new requester, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRequester) -> Result<Requester, sqlx::Error> {
        let query = format!(
            "INSERT INTO requesters \
                (requester_type, first_name, last_name, dni, email, phone_number) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Requester>(&query)
            .bind(&input.requester_type)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.dni)
            .bind(&input.email)
            .bind(&input.phone_number)
            .fetch_one(pool)
            .await
    }

    /// Find a requester by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Requester>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM requesters WHERE id = $1");
        sqlx::query_as::<_, Requester>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all requesters ordered by last name, then first name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Requester>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM requesters ORDER BY last_name NULLS LAST, first_name, id"
        );
        sqlx::query_as::<_, Requester>(&query).fetch_all(pool).await
    }

    /// Update a requester. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRequester,
    ) -> Result<Option<Requester>, sqlx::Error> {
        let query = format!(
            "UPDATE requesters SET \
                requester_type = COALESCE($2, requester_type), \
                first_name = COALESCE($3, first_name), \
                last_name = COALESCE($4, last_name), \
                dni = COALESCE($5, dni), \
                email = COALESCE($6, email), \
                phone_number = COALESCE($7, phone_number) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Requester>(&query)
            .bind(id)
            .bind(&input.requester_type)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.dni)
            .bind(&input.email)
            .bind(&input.phone_number)
            .fetch_optional(pool)
            .await
    }

    /// Delete a requester by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM requesters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
