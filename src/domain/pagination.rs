use serde::{Deserialize, Serialize};

/// One page of a listing together with the size of the whole result set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination<T> {
    pub current_page: usize,
    pub per_page: usize,
    /// Number of matching items across all pages.
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: usize, per_page: usize, total: usize, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Converts every item, keeping order and paging metadata.
    pub fn map<R, F>(self, mapper: F) -> Pagination<R>
    where
        F: FnMut(T) -> R,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(mapper).collect(),
        }
    }
}
