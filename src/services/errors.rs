use thiserror::Error;

use crate::domain::validation::{DomainError, ValidationError};
use crate::repository::errors::RepositoryError;

/// Hard failures returned from service functions.
///
/// Validation problems are not reported here; they travel in a
/// [`Notification`](crate::domain::validation::Notification).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("{0}")]
    NotFound(DomainError),
    /// The repository failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Errors to show to the caller.
    pub fn errors(&self) -> Vec<ValidationError> {
        match self {
            Self::NotFound(err) => err.errors().to_vec(),
            Self::Repository(err) => vec![ValidationError::new(err.to_string())],
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
