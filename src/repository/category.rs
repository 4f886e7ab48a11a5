use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::fold_case;
use crate::domain::category::Category;
use crate::domain::pagination::Pagination;
use crate::domain::types::{CategoryId, CategorySortField, SortDirection};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CategoryReader, CategorySearchQuery, CategoryWriter, DieselRepository};
use crate::schema::categories;

/// Lowercased `%terms%` pattern with `LIKE` wildcards in `terms` escaped,
/// so the search is a literal substring match.
fn like_pattern(terms: &str) -> String {
    let mut pattern = String::with_capacity(terms.len() + 2);
    pattern.push('%');
    for c in terms.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn to_sql_int(value: usize, what: &str) -> RepositoryResult<i64> {
    i64::try_from(value)
        .map_err(|_| RepositoryError::ValidationError(format!("{what} {value} is out of range")))
}

fn apply_sort(
    items: categories::BoxedQuery<'static, Sqlite>,
    sort: CategorySortField,
    direction: SortDirection,
) -> categories::BoxedQuery<'static, Sqlite> {
    let items = match (sort, direction) {
        (CategorySortField::Name, SortDirection::Asc) => items.order(categories::name.asc()),
        (CategorySortField::Name, SortDirection::Desc) => items.order(categories::name.desc()),
        (CategorySortField::Description, SortDirection::Asc) => {
            items.order(categories::description.asc())
        }
        (CategorySortField::Description, SortDirection::Desc) => {
            items.order(categories::description.desc())
        }
        (CategorySortField::CreatedAt, SortDirection::Asc) => {
            items.order(categories::created_at.asc())
        }
        (CategorySortField::CreatedAt, SortDirection::Desc) => {
            items.order(categories::created_at.desc())
        }
        (CategorySortField::UpdatedAt, SortDirection::Asc) => {
            items.order(categories::updated_at.asc())
        }
        (CategorySortField::UpdatedAt, SortDirection::Desc) => {
            items.order(categories::updated_at.desc())
        }
    };

    // Stable order between rows sharing the sort value.
    items.then_order_by(categories::id.asc())
}

impl CategoryReader for DieselRepository {
    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        let mut conn = self.conn()?;

        let category = categories::table
            .find(id.as_str())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        Ok(category.map(Into::into))
    }

    fn list_categories(
        &self,
        query: &CategorySearchQuery,
    ) -> RepositoryResult<Pagination<Category>> {
        let mut conn = self.conn()?;

        let offset = to_sql_int(query.offset(), "offset")?;
        let limit = to_sql_int(query.per_page, "page size")?;
        let pattern = query.terms().map(like_pattern);

        let query_builder = || {
            let mut items = categories::table.into_boxed::<Sqlite>();
            if let Some(pattern) = &pattern {
                // Both sides are folded by `fold_case`, not by SQLite.
                items = items.filter(
                    fold_case(categories::name.nullable())
                        .like(pattern.clone())
                        .escape('\\')
                        .or(fold_case(categories::description)
                            .like(pattern.clone())
                            .escape('\\')),
                );
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)?;
        let total = usize::try_from(total).unwrap_or_default();

        let items = apply_sort(query_builder(), query.sort, query.direction)
            .offset(offset)
            .limit(limit)
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Category>>();

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, category: &Category) -> RepositoryResult<Category> {
        let mut conn = self.conn()?;
        let db_category = DbNewCategory::try_from(category)?;

        let stored = diesel::insert_into(categories::table)
            .values(&db_category)
            .get_result::<DbCategory>(&mut conn)?;

        Ok(stored.into())
    }

    fn update_category(&self, category: &Category) -> RepositoryResult<Category> {
        let mut conn = self.conn()?;
        let db_category = DbNewCategory::try_from(category)?;

        let stored = diesel::update(categories::table.find(db_category.id.as_str()))
            .set(&db_category)
            .get_result::<DbCategory>(&mut conn)
            .optional()?;

        stored.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    fn delete_category(&self, id: &CategoryId) -> RepositoryResult<Category> {
        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let existing = categories::table
                .find(id.as_str())
                .first::<DbCategory>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            diesel::delete(categories::table.find(id.as_str())).execute(conn)?;

            Ok(existing.into())
        })
    }
}
