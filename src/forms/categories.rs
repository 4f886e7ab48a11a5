use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CategorySortField, SortDirection, TypeConstraintError};
use crate::repository::CategorySearchQuery;

/// Page size used when neither the request nor the configuration sets one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Raw listing parameters as received from a caller.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchCategoriesForm {
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<usize>,
    #[validate(length(max = 255))]
    pub search: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

#[derive(Debug, Error)]
pub enum SearchCategoriesFormError {
    #[error("Search categories form validation failed: {0}")]
    Validation(String),
    #[error("Search categories form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SearchCategoriesFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SearchCategoriesFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl SearchCategoriesForm {
    /// Validates the form and fills gaps with defaults: first page, the
    /// given page size, sorted by name ascending.
    pub fn into_query(
        self,
        default_per_page: usize,
    ) -> Result<CategorySearchQuery, SearchCategoriesFormError> {
        self.validate()?;

        let sort = match self.sort.as_deref() {
            Some(sort) => CategorySortField::try_from(sort)?,
            None => CategorySortField::default(),
        };
        let direction = match self.dir.as_deref() {
            Some(dir) => SortDirection::try_from(dir)?,
            None => SortDirection::default(),
        };

        let mut query = CategorySearchQuery::new(
            self.page.unwrap_or(0),
            self.per_page.unwrap_or(default_per_page),
        )
        .sort_by(sort, direction);
        if let Some(search) = self.search {
            query = query.search(search);
        }

        Ok(query)
    }
}

impl TryFrom<SearchCategoriesForm> for CategorySearchQuery {
    type Error = SearchCategoriesFormError;

    fn try_from(value: SearchCategoriesForm) -> Result<Self, Self::Error> {
        value.into_query(DEFAULT_ITEMS_PER_PAGE)
    }
}
