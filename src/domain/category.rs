use chrono::{NaiveDateTime, Utc};

use crate::domain::category_validator::CategoryValidator;
use crate::domain::entity::{AggregateRoot, Entity};
use crate::domain::types::CategoryId;
use crate::domain::validation::{DomainError, ValidationHandler, Validator};

/// Catalogue category.
///
/// Construction never validates: an instance may carry an invalid name until
/// [`Entity::validate`] is called with a handler. `deleted_at` is set exactly
/// when the category is inactive.
#[derive(Debug, Clone)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    active: bool,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    deleted_at: Option<NaiveDateTime>,
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

impl Category {
    /// Builds a new category with a freshly generated identifier.
    pub fn create(name: Option<String>, description: Option<String>, active: bool) -> Self {
        let now = now();
        Self {
            id: CategoryId::generate(),
            name,
            description,
            active,
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        }
    }

    /// Rehydrates a category from stored state.
    pub fn with(
        id: CategoryId,
        name: Option<String>,
        description: Option<String>,
        active: bool,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
        deleted_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    /// Applies new values in place and returns the same aggregate.
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        active: bool,
    ) -> &mut Self {
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name;
        self.description = description;
        self.updated_at = now();
        self
    }

    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.active = true;
        self.updated_at = now();
        self
    }

    /// Marks the category inactive. An existing `deleted_at` is kept.
    pub fn deactivate(&mut self) -> &mut Self {
        let now = now();
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.active = false;
        self.updated_at = now;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError> {
        CategoryValidator::new(self, handler).validate()
    }
}

impl AggregateRoot for Category {}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}
