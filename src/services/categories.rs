//! Category use cases.
//!
//! Create and update report validation problems through a [`Notification`]
//! and also fold repository write failures into one. A missing category and
//! any other repository failure are hard errors returned as [`ServiceError`].

use crate::domain::category::Category;
use crate::domain::entity::Entity;
use crate::domain::pagination::Pagination;
use crate::domain::types::CategoryId;
use crate::domain::validation::{DomainError, Notification, ValidationError, ValidationHandler};
use crate::dto::categories::{
    CategoryDto, CreateCategoryCommand, CreateCategoryOutput, DeleteCategoryCommand,
    DeleteCategoryOutput, GetCategoryByIdCommand, UpdateCategoryCommand, UpdateCategoryOutput,
};
use crate::repository::{CategoryReader, CategorySearchQuery, CategoryWriter};

use super::{ServiceError, ServiceResult};

fn category_not_found(id: &CategoryId) -> ServiceError {
    log::warn!("Category {id} was not found");
    ServiceError::NotFound(DomainError::with(ValidationError::new(format!(
        "Category with ID {id} was not found"
    ))))
}

fn validate(category: &Category) -> Result<(), Notification> {
    let mut notification = Notification::new();
    category.validate(&mut notification)?;

    if notification.has_errors() {
        log::debug!("Category {} failed validation: {notification}", category.id());
        Err(notification)
    } else {
        Ok(())
    }
}

/// Validates and stores a new category.
pub fn create_category<R>(
    command: CreateCategoryCommand,
    repo: &R,
) -> Result<CreateCategoryOutput, Notification>
where
    R: CategoryWriter,
{
    let category = Category::create(command.name, command.description, command.is_active);
    validate(&category)?;

    match repo.create_category(&category) {
        Ok(created) => Ok(CreateCategoryOutput::from(&created)),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(Notification::from_failure(&e))
        }
    }
}

/// Applies new values to an existing category.
///
/// The outer result fails when the category does not exist or cannot be
/// read; the inner result carries validation and write failures.
pub fn update_category<R>(
    command: UpdateCategoryCommand,
    repo: &R,
) -> ServiceResult<Result<UpdateCategoryOutput, Notification>>
where
    R: CategoryReader + CategoryWriter,
{
    let mut category = repo
        .get_category_by_id(&command.id)
        .inspect_err(|e| log::error!("Failed to get category {}: {e}", command.id))?
        .ok_or_else(|| category_not_found(&command.id))?;

    category.update(command.name, command.description, command.is_active);
    if let Err(notification) = validate(&category) {
        return Ok(Err(notification));
    }

    match repo.update_category(&category) {
        Ok(updated) => Ok(Ok(UpdateCategoryOutput::from(&updated))),
        Err(e) => {
            log::error!("Failed to update category {}: {e}", category.id());
            Ok(Err(Notification::from_failure(&e)))
        }
    }
}

/// Removes a category from storage.
pub fn delete_category<R>(
    command: DeleteCategoryCommand,
    repo: &R,
) -> ServiceResult<DeleteCategoryOutput>
where
    R: CategoryReader + CategoryWriter,
{
    let id = CategoryId::from(command.id);

    let category = repo
        .get_category_by_id(&id)
        .inspect_err(|e| log::error!("Failed to get category {id}: {e}"))?
        .ok_or_else(|| category_not_found(&id))?;

    let deleted = repo
        .delete_category(category.id())
        .inspect_err(|e| log::error!("Failed to delete category {id}: {e}"))?;

    Ok(DeleteCategoryOutput::from(&deleted))
}

pub fn get_category_by_id<R>(command: GetCategoryByIdCommand, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    let id = CategoryId::from(command.id);

    repo.get_category_by_id(&id)
        .inspect_err(|e| log::error!("Failed to get category {id}: {e}"))?
        .map(CategoryDto::from)
        .ok_or_else(|| category_not_found(&id))
}

pub fn list_categories<R>(
    query: &CategorySearchQuery,
    repo: &R,
) -> ServiceResult<Pagination<CategoryDto>>
where
    R: CategoryReader,
{
    let categories = repo
        .list_categories(query)
        .inspect_err(|e| log::error!("Failed to list categories: {e}"))?;

    Ok(categories.map(CategoryDto::from))
}
