use std::fmt::{Display, Formatter};

use super::{BoxError, DomainError, ValidationError, ValidationHandler};

/// Accumulating handler: keeps every error in insertion order and never
/// stops at the first violation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notification holding a single error.
    pub fn from_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Notification carrying the message of an arbitrary failure.
    pub fn from_failure<E: Display + ?Sized>(failure: &E) -> Self {
        Self::from_error(ValidationError::new(failure.to_string()))
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Message of the first recorded error, if any.
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(ValidationError::message)
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        self.errors.push(error);
        Ok(())
    }

    fn merge(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError> {
        self.errors.extend_from_slice(other.errors());
        Ok(())
    }

    /// Structured failures are merged. Any other failure discards what was
    /// collected so far and leaves only that failure's message.
    fn validate(
        &mut self,
        validation: &mut dyn FnMut() -> Result<(), BoxError>,
    ) -> Result<(), DomainError> {
        if let Err(err) = validation() {
            match err.downcast::<DomainError>() {
                Ok(domain) => self.errors.extend(domain.into_errors()),
                Err(other) => *self = Self::from_failure(&other),
            }
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .errors
            .iter()
            .map(ValidationError::message)
            .collect::<Vec<_>>();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for Notification {}

impl From<DomainError> for Notification {
    fn from(value: DomainError) -> Self {
        Self {
            errors: value.into_errors(),
        }
    }
}

/// Fail-fast handler: every append short-circuits with a [`DomainError`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        Err(DomainError::with(error))
    }

    fn merge(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError> {
        Err(DomainError::with_errors(other.errors().to_vec()))
    }

    fn validate(
        &mut self,
        validation: &mut dyn FnMut() -> Result<(), BoxError>,
    ) -> Result<(), DomainError> {
        validation().map_err(|e| DomainError::with(ValidationError::new(e.to_string())))
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_keeps_insertion_order() {
        let mut notification = Notification::new();
        notification.append(ValidationError::new("a")).unwrap();
        notification.append(ValidationError::new("b")).unwrap();

        let messages: Vec<_> = notification.errors().iter().map(|e| e.message()).collect();
        assert_eq!(messages, vec!["a", "b"]);
        assert!(notification.has_errors());
    }

    #[test]
    fn notification_merges_other_handler() {
        let mut first = Notification::from_error(ValidationError::new("a"));
        let second = Notification::from_error(ValidationError::new("b"));

        first.merge(&second).unwrap();
        assert_eq!(first.errors().len(), 2);
        assert_eq!(first.to_string(), "a; b");
    }

    #[test]
    fn notification_absorbs_domain_errors() {
        let mut notification = Notification::from_error(ValidationError::new("existing"));
        notification
            .validate(&mut || {
                Err(DomainError::with_errors(vec![
                    ValidationError::new("x"),
                    ValidationError::new("y"),
                ])
                .into())
            })
            .unwrap();

        assert_eq!(notification.errors().len(), 3);
        assert_eq!(notification.errors()[2].message(), "y");
    }

    #[test]
    fn notification_replaces_errors_on_unexpected_failure() {
        let mut notification = Notification::from_error(ValidationError::new("existing"));
        notification
            .validate(&mut || Err("boom".into()))
            .unwrap();

        assert_eq!(notification.errors().len(), 1);
        assert_eq!(notification.first_message(), Some("boom"));
    }

    #[test]
    fn notification_ignores_successful_validation() {
        let mut notification = Notification::new();
        notification.validate(&mut || Ok(())).unwrap();
        assert!(!notification.has_errors());
    }

    #[test]
    fn throws_handler_fails_on_first_append() {
        let mut handler = ThrowsValidationHandler;
        let err = handler.append(ValidationError::new("bad")).unwrap_err();

        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.to_string(), "bad");
        assert!(handler.errors().is_empty());
        assert!(!handler.has_errors());
    }

    #[test]
    fn throws_handler_fails_with_all_merged_errors() {
        let mut collected = Notification::new();
        collected.append(ValidationError::new("a")).unwrap();
        collected.append(ValidationError::new("b")).unwrap();

        let err = ThrowsValidationHandler.merge(&collected).unwrap_err();
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn throws_handler_rewraps_validation_failures() {
        let err = ThrowsValidationHandler
            .validate(&mut || {
                Err(DomainError::with_errors(vec![
                    ValidationError::new("x"),
                    ValidationError::new("y"),
                ])
                .into())
            })
            .unwrap_err();

        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].message(), "x; y");
    }
}
