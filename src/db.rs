//! SQLite connection pooling.

use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sql_types::{Nullable, Text};
use diesel::sqlite::SqliteConnection;

use crate::repository::errors::{RepositoryError, RepositoryResult};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

diesel::define_sql_function! {
    /// Unicode lowercase of a text value, backed by [`str::to_lowercase`].
    ///
    /// SQLite's built-in `lower` and `LIKE` only fold ASCII letters.
    fn fold_case(value: Nullable<Text>) -> Nullable<Text>;
}

/// Registers the crate's SQL functions on every connection the pool opens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlFunctions;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlFunctions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        fold_case_utils::register_impl(conn, |value: Option<String>| {
            value.map(|v| v.to_lowercase())
        })
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds an r2d2 pool for the SQLite database at `database_url`.
pub fn establish_connection_pool(database_url: &str) -> RepositoryResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(SqlFunctions))
        .build(manager)
        .map_err(|e| {
            log::error!("Failed to build connection pool for {database_url}: {e}");
            RepositoryError::ConnectionError(e.to_string())
        })
}
