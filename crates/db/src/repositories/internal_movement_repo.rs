//! Repository for the `internal_movements` table.
//!
//! Besides plain reads, this is where the movement lifecycle runs: creating
//! a movement closes whatever is still open for the artefact and moves the
//! artefact, and closing a movement sends the artefact back to where it was
//! before its first tracked movement. Each lifecycle call is one
//! transaction that starts by locking the artefact row.

use chrono::Utc;
use curator_core::error::CoreError;
use curator_core::movement::{self, CurrentPlacement};
use curator_core::types::{DbId, EventDate, EventTime};
use sqlx::{PgConnection, PgPool};

use crate::error::LifecycleResult;
use crate::models::internal_movement::{
    CreateInternalMovement, InternalMovement, InternalMovementDetail, UpdateInternalMovement,
};
use crate::repositories::ArtefactRepo;

/// Column list shared across raw-row queries to avoid repetition.
const COLUMNS: &str = "id, movement_date, movement_time, return_date, return_time, \
    artefact_id, from_physical_location_id, to_physical_location_id, reason, observations, \
    requester_id, created_at, updated_at";

/// Joined select producing [`InternalMovementDetail`] rows.
const DETAIL_SELECT: &str = "SELECT m.id, m.movement_date, m.movement_time, \
    m.return_date, m.return_time, m.artefact_id, a.name AS artefact_name, \
    a.internal_classifier_id, ic.name AS internal_classifier_name, \
    ic.number AS internal_classifier_number, \
    m.from_physical_location_id, fs.code AS from_shelf_code, fl.level AS from_level, \
    fl.column_letter AS from_column_letter, \
    m.to_physical_location_id, ts.code AS to_shelf_code, tl.level AS to_level, \
    tl.column_letter AS to_column_letter, \
    m.reason, m.observations, m.requester_id, r.requester_type, \
    r.first_name AS requester_first_name, r.last_name AS requester_last_name, \
    m.created_at, m.updated_at \
    FROM internal_movements m \
    JOIN artefacts a ON a.id = m.artefact_id \
    LEFT JOIN internal_classifiers ic ON ic.id = a.internal_classifier_id \
    LEFT JOIN physical_locations fl ON fl.id = m.from_physical_location_id \
    LEFT JOIN shelves fs ON fs.id = fl.shelf_id \
    LEFT JOIN physical_locations tl ON tl.id = m.to_physical_location_id \
    LEFT JOIN shelves ts ON ts.id = tl.shelf_id \
    LEFT JOIN requesters r ON r.id = m.requester_id";

/// Most recent first. `id` breaks ties between movements stamped with the
/// same date and time.
const NEWEST_FIRST: &str = "movement_date DESC, movement_time DESC, id DESC";

/// Provides reads and the lifecycle operations for internal movements.
pub struct InternalMovementRepo;

impl InternalMovementRepo {
    // ── Reads ────────────────────────────────────────────────────────

    /// Find a movement by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InternalMovementDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE m.id = $1");
        sqlx::query_as::<_, InternalMovementDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every movement, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<InternalMovementDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT} ORDER BY m.movement_date DESC, m.movement_time DESC, m.id DESC"
        );
        sqlx::query_as::<_, InternalMovementDetail>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the movement history of one artefact, most recent first.
    pub async fn list_by_artefact(
        pool: &PgPool,
        artefact_id: DbId,
    ) -> Result<Vec<InternalMovementDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT} WHERE m.artefact_id = $1 \
             ORDER BY m.movement_date DESC, m.movement_time DESC, m.id DESC"
        );
        sqlx::query_as::<_, InternalMovementDetail>(&query)
            .bind(artefact_id)
            .fetch_all(pool)
            .await
    }

    /// Find the open movement of an artefact, if any.
    pub async fn find_active_by_artefact(
        pool: &PgPool,
        artefact_id: DbId,
    ) -> Result<Option<InternalMovementDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT} WHERE m.artefact_id = $1 \
               AND m.return_date IS NULL AND m.return_time IS NULL \
             ORDER BY m.movement_date DESC, m.movement_time DESC, m.id DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, InternalMovementDetail>(&query)
            .bind(artefact_id)
            .fetch_optional(pool)
            .await
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Record a new movement and move the artefact to its destination.
    ///
    /// Open movements of the artefact are closed with the current date and
    /// time. A missing origin is resolved from the most recent open movement,
    /// or from the artefact's stored location when nothing is open.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInternalMovement,
    ) -> LifecycleResult<InternalMovementDetail> {
        let mut tx = pool.begin().await?;

        let artefact = ArtefactRepo::lock_for_update(&mut tx, input.artefact_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Artefact",
                id: input.artefact_id,
            })?;

        let active = Self::list_active_for_update(&mut tx, artefact.id).await?;

        let placement = match active.first() {
            Some(latest) => CurrentPlacement::ActiveMovement {
                to: latest.to_physical_location_id,
            },
            None => CurrentPlacement::Stored(artefact.physical_location_id),
        };
        let from_physical_location_id =
            movement::resolve_from_location(input.from_physical_location_id, placement);

        let (today, now) = movement::split_timestamp(Utc::now());

        // Normally at most one; close every open row so a prior inconsistency
        // does not survive this call.
        for open in &active {
            Self::close(&mut tx, open.id, today, now).await?;
        }
        if active.len() > 1 {
            tracing::warn!(
                artefact_id = artefact.id,
                count = active.len(),
                "Closed more than one open movement for artefact"
            );
        }

        let query = format!(
            "INSERT INTO internal_movements \
                (movement_date, movement_time, return_date, return_time, artefact_id, \
                 from_physical_location_id, to_physical_location_id, reason, observations, \
                 requester_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, InternalMovement>(&query)
            .bind(input.movement_date.unwrap_or(today))
            .bind(input.movement_time.unwrap_or(now))
            .bind(input.return_date)
            .bind(input.return_time)
            .bind(artefact.id)
            .bind(from_physical_location_id)
            .bind(input.to_physical_location_id)
            .bind(&input.reason)
            .bind(&input.observations)
            .bind(input.requester_id)
            .fetch_one(&mut *tx)
            .await?;

        ArtefactRepo::set_physical_location(&mut tx, artefact.id, created.to_physical_location_id)
            .await?;

        tx.commit().await?;

        tracing::info!(
            movement_id = created.id,
            artefact_id = artefact.id,
            from = ?created.from_physical_location_id,
            to = ?created.to_physical_location_id,
            closed = active.len(),
            "Internal movement created"
        );

        Self::reload(pool, created.id).await
    }

    /// Patch a movement, running the close workflow when the patch closes it.
    ///
    /// Closing sends the artefact back to the origin of its first recorded
    /// movement, inserting an already-closed return movement when it is not
    /// there yet. A non-closing patch that changes the destination moves the
    /// artefact along with it.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInternalMovement,
    ) -> LifecycleResult<InternalMovementDetail> {
        let mut tx = pool.begin().await?;

        let artefact_id = Self::artefact_of(&mut tx, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "InternalMovement",
                id,
            })?;
        ArtefactRepo::lock_for_update(&mut tx, artefact_id).await?;

        let existing = Self::find_raw_for_update(&mut tx, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "InternalMovement",
                id,
            })?;

        let closing_stamp = if movement::is_closing(
            existing.return_date,
            existing.return_time,
            input.return_date,
            input.return_time,
        ) {
            input.return_date.zip(input.return_time)
        } else {
            None
        };

        let updated = Self::apply_patch(&mut tx, id, input).await?;

        if let Some((closed_on, closed_at)) = closing_stamp {
            let original = match Self::find_earliest(&mut tx, updated.artefact_id).await? {
                Some(first) => first.from_physical_location_id,
                None => updated.from_physical_location_id,
            };

            if let Some(leg) =
                movement::plan_return_to_origin(updated.to_physical_location_id, original)
            {
                let query = "INSERT INTO internal_movements \
                        (movement_date, movement_time, return_date, return_time, artefact_id, \
                         from_physical_location_id, to_physical_location_id, reason, \
                         observations, requester_id) \
                     VALUES ($1, $2, $1, $2, $3, $4, $5, $6, $7, $8) \
                     RETURNING id";
                let (return_id,): (DbId,) = sqlx::query_as(query)
                    .bind(closed_on)
                    .bind(closed_at)
                    .bind(updated.artefact_id)
                    .bind(leg.from)
                    .bind(leg.to)
                    .bind(movement::RETURN_REASON)
                    .bind(movement::RETURN_OBSERVATIONS)
                    .bind(updated.requester_id)
                    .fetch_one(&mut *tx)
                    .await?;
                tracing::info!(
                    movement_id = id,
                    return_movement_id = return_id,
                    artefact_id = updated.artefact_id,
                    from = ?leg.from,
                    to = ?leg.to,
                    "Recorded return-to-origin movement"
                );
            }

            ArtefactRepo::set_physical_location(&mut tx, updated.artefact_id, original).await?;
        } else if let Some(to) = input.to_physical_location_id {
            if existing.to_physical_location_id != Some(to) {
                ArtefactRepo::set_physical_location(&mut tx, updated.artefact_id, Some(to))
                    .await?;
            }
        }

        tx.commit().await?;

        tracing::info!(
            movement_id = id,
            artefact_id = updated.artefact_id,
            closed = closing_stamp.is_some(),
            "Internal movement updated"
        );

        Self::reload(pool, id).await
    }

    /// Delete a movement by ID. Returns `true` if a row was removed.
    ///
    /// The artefact's stored location is left untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM internal_movements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ── Transaction helpers ──────────────────────────────────────────

    /// Open movements of an artefact, most recent first, locked.
    async fn list_active_for_update(
        conn: &mut PgConnection,
        artefact_id: DbId,
    ) -> Result<Vec<InternalMovement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM internal_movements \
             WHERE artefact_id = $1 AND return_date IS NULL AND return_time IS NULL \
             ORDER BY {NEWEST_FIRST} \
             FOR UPDATE"
        );
        sqlx::query_as::<_, InternalMovement>(&query)
            .bind(artefact_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// The artefact a movement belongs to, without locking anything.
    async fn artefact_of(conn: &mut PgConnection, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT artefact_id FROM internal_movements WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;
        Ok(row.map(|(artefact_id,)| artefact_id))
    }

    async fn find_raw_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<InternalMovement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM internal_movements WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, InternalMovement>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// The first movement ever recorded for an artefact.
    async fn find_earliest(
        conn: &mut PgConnection,
        artefact_id: DbId,
    ) -> Result<Option<InternalMovement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM internal_movements \
             WHERE artefact_id = $1 \
             ORDER BY movement_date ASC, movement_time ASC, id ASC \
             LIMIT 1"
        );
        sqlx::query_as::<_, InternalMovement>(&query)
            .bind(artefact_id)
            .fetch_optional(&mut *conn)
            .await
    }

    async fn close(
        conn: &mut PgConnection,
        id: DbId,
        return_date: EventDate,
        return_time: EventTime,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE internal_movements SET return_date = $2, return_time = $3 WHERE id = $1",
        )
        .bind(id)
        .bind(return_date)
        .bind(return_time)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    /// Merge the supplied patch fields into the row.
    async fn apply_patch(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateInternalMovement,
    ) -> Result<InternalMovement, sqlx::Error> {
        let query = format!(
            "UPDATE internal_movements SET \
                movement_date = COALESCE($2, movement_date), \
                movement_time = COALESCE($3, movement_time), \
                return_date = COALESCE($4, return_date), \
                return_time = COALESCE($5, return_time), \
                from_physical_location_id = COALESCE($6, from_physical_location_id), \
                to_physical_location_id = COALESCE($7, to_physical_location_id), \
                reason = COALESCE($8, reason), \
                observations = COALESCE($9, observations), \
                requester_id = COALESCE($10, requester_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InternalMovement>(&query)
            .bind(id)
            .bind(input.movement_date)
            .bind(input.movement_time)
            .bind(input.return_date)
            .bind(input.return_time)
            .bind(input.from_physical_location_id)
            .bind(input.to_physical_location_id)
            .bind(&input.reason)
            .bind(&input.observations)
            .bind(input.requester_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Read-after-write of the joined row for the caller.
    async fn reload(pool: &PgPool, id: DbId) -> LifecycleResult<InternalMovementDetail> {
        let detail = Self::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "InternalMovement",
                id,
            })?;
        Ok(detail)
    }
}
