use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::entity::Entity;
use crate::domain::types::CategoryId;

/// Input for creating a category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Input for replacing a category's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteCategoryCommand {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetCategoryByIdCommand {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteCategoryOutput {
    pub id: String,
}

/// Full read projection of a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDto {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().clone(),
        }
    }
}

impl From<&Category> for UpdateCategoryOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().clone(),
        }
    }
}

impl From<&Category> for DeleteCategoryOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().as_str().to_string(),
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().clone(),
            name: value.name().map(str::to_string),
            description: value.description().map(str::to_string),
            is_active: value.is_active(),
            created_at: value.created_at(),
            updated_at: value.updated_at(),
            deleted_at: value.deleted_at(),
        }
    }
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self::from(&value)
    }
}
