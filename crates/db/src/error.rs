use curator_core::error::CoreError;

/// Error returned by the lifecycle repositories.
///
/// Either variant means the transaction was rolled back.
#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for lifecycle repository results.
pub type LifecycleResult<T> = Result<T, LifecycleError>;
