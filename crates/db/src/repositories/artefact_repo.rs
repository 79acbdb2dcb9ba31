//! Repository for the `artefacts` table.
//!
//! The public API only touches descriptive fields. `available` and
//! `physical_location_id` are written by the crate-private lifecycle
//! helpers at the bottom of this file, which only the loan and internal
//! movement repositories call.

use curator_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::artefact::{Artefact, CreateArtefact, UpdateArtefact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, material, observation, description, available, \
    physical_location_id, collection_id, internal_classifier_id, created_at, updated_at";

/// Provides CRUD operations for artefacts.
pub struct ArtefactRepo;

impl ArtefactRepo {
    /// Insert a new artefact, returning the created row. New artefacts are
    /// always available.
    pub async fn create(pool: &PgPool, input: &CreateArtefact) -> Result<Artefact, sqlx::Error> {
        let query = format!(
            "INSERT INTO artefacts \
                (name, material, observation, description, physical_location_id, \
                 collection_id, internal_classifier_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artefact>(&query)
            .bind(&input.name)
            .bind(&input.material)
            .bind(&input.observation)
            .bind(&input.description)
            .bind(input.physical_location_id)
            .bind(input.collection_id)
            .bind(input.internal_classifier_id)
            .fetch_one(pool)
            .await
    }

    /// Find an artefact by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artefact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artefacts WHERE id = $1");
        sqlx::query_as::<_, Artefact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List artefacts ordered by name, optionally restricted to one shelf.
    pub async fn list(pool: &PgPool, shelf_id: Option<DbId>) -> Result<Vec<Artefact>, sqlx::Error> {
        match shelf_id {
            Some(shelf_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM artefacts \
                     WHERE physical_location_id IN \
                        (SELECT id FROM physical_locations WHERE shelf_id = $1) \
                     ORDER BY name, id"
                );
                sqlx::query_as::<_, Artefact>(&query)
                    .bind(shelf_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM artefacts ORDER BY name, id");
                sqlx::query_as::<_, Artefact>(&query).fetch_all(pool).await
            }
        }
    }

    /// Update descriptive fields. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtefact,
    ) -> Result<Option<Artefact>, sqlx::Error> {
        let query = format!(
            "UPDATE artefacts SET \
                name = COALESCE($2, name), \
                material = COALESCE($3, material), \
                observation = COALESCE($4, observation), \
                description = COALESCE($5, description), \
                collection_id = COALESCE($6, collection_id), \
                internal_classifier_id = COALESCE($7, internal_classifier_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artefact>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.material)
            .bind(&input.observation)
            .bind(&input.description)
            .bind(input.collection_id)
            .bind(input.internal_classifier_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artefact by ID. Returns `true` if a row was removed.
    ///
    /// Its movements are removed by cascade; loans keep their row with the
    /// artefact reference cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artefacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ── Lifecycle-only writers ───────────────────────────────────────

    /// Fetch an artefact and lock its row until the transaction ends.
    ///
    /// Every lifecycle operation starts here so concurrent operations on the
    /// same artefact run one after the other.
    pub(crate) async fn lock_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Artefact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artefacts WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Artefact>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Point the artefact at a new cell (or at none).
    pub(crate) async fn set_physical_location(
        conn: &mut PgConnection,
        id: DbId,
        physical_location_id: Option<DbId>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE artefacts SET physical_location_id = $2 WHERE id = $1")
            .bind(id)
            .bind(physical_location_id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    /// Flip the loan availability flag.
    pub(crate) async fn set_available(
        conn: &mut PgConnection,
        id: DbId,
        available: bool,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE artefacts SET available = $2 WHERE id = $1")
            .bind(id)
            .bind(available)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
