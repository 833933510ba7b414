use std::fs;

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use portfolio_admin::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// File-backed SQLite database with all migrations applied. The files are
/// removed again when the value drops, WAL sidecars included.
pub struct TestDb {
    url: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(url: &str) -> Self {
        let _ = fs::remove_file(url);

        let pool = establish_connection_pool(url).expect("Failed to build test pool");
        let mut conn = pool.get().expect("Failed to get test connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");

        Self {
            url: url.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.url);
        let _ = fs::remove_file(format!("{}-wal", self.url));
        let _ = fs::remove_file(format!("{}-shm", self.url));
    }
}
