use thiserror::Error;

/// Errors raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The database could not be reached or the pool could not be built.
    #[error("connection error: {0}")]
    ConnectionError(String),
    /// A pooled connection could not be checked out.
    #[error("pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// A query failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// The targeted record does not exist.
    #[error("record not found")]
    NotFound,
    /// A value could not be mapped between storage and domain.
    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
