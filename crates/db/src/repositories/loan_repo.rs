//! Repository for the `loans` table.
//!
//! Loans drive the artefact's `available` flag: creating one requires the
//! artefact to be available and clears the flag, updating or deleting one
//! sets it again.

use chrono::Utc;
use curator_core::error::CoreError;
use curator_core::types::DbId;
use curator_core::{loan, movement};
use sqlx::{PgConnection, PgPool};

use crate::error::LifecycleResult;
use crate::models::loan::{CreateLoan, Loan, LoanDetail, UpdateLoan};
use crate::repositories::ArtefactRepo;

/// Column list shared across raw-row queries to avoid repetition.
const COLUMNS: &str = "id, loan_date, loan_time, return_date, return_time, artefact_id, \
    requester_id, created_at, updated_at";

/// Joined select producing [`LoanDetail`] rows.
const DETAIL_SELECT: &str = "SELECT l.id, l.loan_date, l.loan_time, l.return_date, \
    l.return_time, l.artefact_id, a.name AS artefact_name, a.internal_classifier_id, \
    ic.name AS internal_classifier_name, ic.number AS internal_classifier_number, \
    l.requester_id, r.requester_type, \
    r.first_name AS requester_first_name, r.last_name AS requester_last_name, \
    l.created_at, l.updated_at \
    FROM loans l \
    LEFT JOIN artefacts a ON a.id = l.artefact_id \
    LEFT JOIN internal_classifiers ic ON ic.id = a.internal_classifier_id \
    LEFT JOIN requesters r ON r.id = l.requester_id";

/// Provides reads and the lifecycle operations for loans.
pub struct LoanRepo;

impl LoanRepo {
    /// Find a loan by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LoanDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE l.id = $1");
        sqlx::query_as::<_, LoanDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every loan, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<LoanDetail>, sqlx::Error> {
        let query =
            format!("{DETAIL_SELECT} ORDER BY l.loan_date DESC, l.loan_time DESC, l.id DESC");
        sqlx::query_as::<_, LoanDetail>(&query).fetch_all(pool).await
    }

    /// Lend an artefact.
    ///
    /// Fails with [`CoreError::NotFound`] when the artefact does not exist
    /// and with [`CoreError::ArtefactUnavailable`] when it is already on
    /// loan. Nothing is written in either case.
    pub async fn create(pool: &PgPool, input: &CreateLoan) -> LifecycleResult<LoanDetail> {
        let mut tx = pool.begin().await?;

        let artefact_id = loan::governs_artefact(input.artefact_id);
        if let Some(artefact_id) = artefact_id {
            let artefact = ArtefactRepo::lock_for_update(&mut tx, artefact_id)
                .await?
                .ok_or(CoreError::NotFound {
                    entity: "Artefact",
                    id: artefact_id,
                })?;
            loan::ensure_available(artefact.id, artefact.available)?;
        }

        let (today, now) = movement::split_timestamp(Utc::now());
        let query = format!(
            "INSERT INTO loans \
                (loan_date, loan_time, return_date, return_time, artefact_id, requester_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Loan>(&query)
            .bind(input.loan_date.unwrap_or(today))
            .bind(input.loan_time.unwrap_or(now))
            .bind(input.return_date)
            .bind(input.return_time)
            .bind(artefact_id)
            .bind(input.requester_id)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(artefact_id) = artefact_id {
            ArtefactRepo::set_available(&mut tx, artefact_id, false).await?;
        }

        tx.commit().await?;

        tracing::info!(loan_id = created.id, artefact_id = ?artefact_id, "Loan created");
        Self::reload(pool, created.id).await
    }

    /// Patch a loan and make its artefact available again.
    ///
    /// The artefact is released whether or not the patch sets the return
    /// fields.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLoan,
    ) -> LifecycleResult<LoanDetail> {
        let mut tx = pool.begin().await?;

        let existing = Self::find_raw_for_update(&mut tx, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Loan", id })?;

        let query = format!(
            "UPDATE loans SET \
                loan_date = COALESCE($2, loan_date), \
                loan_time = COALESCE($3, loan_time), \
                return_date = COALESCE($4, return_date), \
                return_time = COALESCE($5, return_time), \
                requester_id = COALESCE($6, requester_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Loan>(&query)
            .bind(id)
            .bind(input.loan_date)
            .bind(input.loan_time)
            .bind(input.return_date)
            .bind(input.return_time)
            .bind(input.requester_id)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(artefact_id) = loan::governs_artefact(existing.artefact_id) {
            ArtefactRepo::set_available(&mut tx, artefact_id, true).await?;
        }

        tx.commit().await?;

        tracing::info!(
            loan_id = id,
            artefact_id = ?updated.artefact_id,
            returned = !movement::is_open(updated.return_date, updated.return_time),
            "Loan updated"
        );
        Self::reload(pool, id).await
    }

    /// Delete a loan and make its artefact available again.
    ///
    /// The artefact is released even when the loan was already closed.
    pub async fn delete(pool: &PgPool, id: DbId) -> LifecycleResult<()> {
        let mut tx = pool.begin().await?;

        let existing = Self::find_raw_for_update(&mut tx, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Loan", id })?;

        if let Some(artefact_id) = loan::governs_artefact(existing.artefact_id) {
            ArtefactRepo::set_available(&mut tx, artefact_id, true).await?;
        }

        sqlx::query("DELETE FROM loans WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(loan_id = id, artefact_id = ?existing.artefact_id, "Loan deleted");
        Ok(())
    }

    async fn find_raw_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Loan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM loans WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Loan>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    async fn reload(pool: &PgPool, id: DbId) -> LifecycleResult<LoanDetail> {
        let detail = Self::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Loan", id })?;
        Ok(detail)
    }
}
