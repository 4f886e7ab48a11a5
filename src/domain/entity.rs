//! Identity and validation contracts shared by aggregates.

use std::fmt::Display;

use crate::domain::validation::{DomainError, ValidationHandler};

/// Opaque, value-compared identifier.
pub trait Identifier: Clone + Eq + Display {
    fn value(&self) -> &str;
}

/// Anything with a stable identity.
pub trait Entity {
    type Id: Identifier;

    fn id(&self) -> &Self::Id;

    /// Reports rule violations into `handler`.
    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError>;
}

/// Entity that owns its own invariants and is the unit of persistence.
pub trait AggregateRoot: Entity {}
