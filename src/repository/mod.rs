use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::pagination::Pagination;
use crate::domain::types::{CategoryId, CategorySortField, SortDirection};

use self::errors::RepositoryResult;

pub mod category;
pub mod errors;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Search, sort and paging options for listing categories.
///
/// Pages are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySearchQuery {
    pub page: usize,
    pub per_page: usize,
    /// Free-text filter matched against name and description.
    pub terms: Option<String>,
    pub sort: CategorySortField,
    pub direction: SortDirection,
}

impl CategorySearchQuery {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page,
            per_page,
            terms: None,
            sort: CategorySortField::default(),
            direction: SortDirection::default(),
        }
    }

    pub fn search(mut self, terms: impl Into<String>) -> Self {
        self.terms = Some(terms.into());
        self
    }

    pub fn sort_by(mut self, sort: CategorySortField, direction: SortDirection) -> Self {
        self.sort = sort;
        self.direction = direction;
        self
    }

    /// Trimmed search terms, `None` when absent or blank.
    pub fn terms(&self) -> Option<&str> {
        self.terms
            .as_deref()
            .map(str::trim)
            .filter(|terms| !terms.is_empty())
    }

    /// Number of rows to skip for the requested page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.per_page)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>>;
    /// List categories matching the supplied query.
    fn list_categories(&self, query: &CategorySearchQuery)
    -> RepositoryResult<Pagination<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category and return the stored record.
    fn create_category(&self, category: &Category) -> RepositoryResult<Category>;
    /// Overwrite an existing category and return the stored record.
    fn update_category(&self, category: &Category) -> RepositoryResult<Category>;
    /// Remove a category, returning the record as it was before deletion.
    fn delete_category(&self, id: &CategoryId) -> RepositoryResult<Category>;
}

/// Full persistence port consumed by the category services.
pub trait CategoryGateway: CategoryReader + CategoryWriter {}

impl<T> CategoryGateway for T where T: CategoryReader + CategoryWriter {}
