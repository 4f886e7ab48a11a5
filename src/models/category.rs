use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::entity::Entity;
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Insertable/patchable form of [`Category`].
///
/// `None` is written as `NULL` so that clearing a description or
/// reactivating a category reaches storage.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(treat_none_as_null = true)]
pub struct NewCategory {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<Category> for DomainCategory {
    fn from(category: Category) -> Self {
        DomainCategory::with(
            category.id.into(),
            Some(category.name),
            category.description,
            category.active,
            category.created_at,
            category.updated_at,
            category.deleted_at,
        )
    }
}

impl TryFrom<&DomainCategory> for NewCategory {
    type Error = TypeConstraintError;

    fn try_from(category: &DomainCategory) -> Result<Self, Self::Error> {
        let name = category
            .name()
            .ok_or(TypeConstraintError::EmptyString("category name"))?;

        Ok(Self {
            id: category.id().as_str().to_string(),
            name: name.to_string(),
            description: category.description().map(str::to_string),
            active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        })
    }
}
