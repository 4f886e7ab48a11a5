//! Validation primitives shared by all aggregates.
//!
//! Entities describe *what* is invalid through a [`Validator`]; a
//! [`ValidationHandler`] decides *how* each violation is reported. The
//! [`handler`] module provides an accumulating [`Notification`] and a
//! fail-fast [`ThrowsValidationHandler`].

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub mod handler;

pub use handler::{Notification, ThrowsValidationHandler};

/// Boxed error accepted from arbitrary validation units.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Single validation failure.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Structured domain failure carrying one or more validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DomainError {
    message: String,
    errors: Vec<ValidationError>,
}

impl DomainError {
    /// Failure wrapping a single error.
    pub fn with(error: ValidationError) -> Self {
        Self::with_errors(vec![error])
    }

    /// Failure wrapping every error in order.
    pub fn with_errors(errors: Vec<ValidationError>) -> Self {
        let message = errors
            .iter()
            .map(ValidationError::message)
            .collect::<Vec<_>>()
            .join("; ");
        Self { message, errors }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

/// Sink for validation errors.
///
/// Methods return `Err` when the handler decides to stop at a violation;
/// accumulating handlers always return `Ok`.
pub trait ValidationHandler {
    /// Record a single error.
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError>;

    /// Record every error collected by another handler.
    fn merge(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError>;

    /// Run a validation unit, absorbing the failure it reports.
    fn validate(
        &mut self,
        validation: &mut dyn FnMut() -> Result<(), BoxError>,
    ) -> Result<(), DomainError>;

    /// Errors collected so far.
    fn errors(&self) -> &[ValidationError];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }
}

/// Entity-specific rule set that reports into a [`ValidationHandler`].
pub trait Validator {
    fn validate(&mut self) -> Result<(), DomainError>;
}
