//! Helpers for integration tests.

#![allow(dead_code)]

use catalogue_admin::db::{DbPool, establish_connection_pool};
use catalogue_admin::domain::category::Category;
use catalogue_admin::repository::{CategoryWriter, DieselRepository};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// Stores the seven sample categories used by listing tests.
pub fn seed_categories(repo: &DieselRepository) -> Vec<Category> {
    [
        ("Movies", Some("The most watched")),
        ("Series", Some("Long stories")),
        ("Animes", None),
        ("Documentary", Some("Real stories")),
        ("Sports", None),
        ("Kids", Some("Category for kids")),
        ("Podcasts", Some("Audio shows")),
    ]
    .into_iter()
    .map(|(name, description)| {
        let category = Category::create(
            Some(name.to_string()),
            description.map(str::to_string),
            true,
        );
        repo.create_category(&category)
            .expect("should create category")
    })
    .collect()
}
