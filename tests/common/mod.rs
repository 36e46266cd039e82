use contacts_api::db::{DbPool, MIGRATIONS, establish_connection_pool};
use diesel_migrations::MigrationHarness;
use tempfile::TempDir;

/// Temporary SQLite database with migrations applied. The database files are
/// removed together with the temp directory when the harness drops.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = dir.path().join(name);
        let pool = establish_connection_pool(db_path.to_str().expect("db path is not valid utf-8"))
            .expect("failed to build connection pool");

        {
            let mut conn = pool.get().expect("failed to get connection");
            conn.run_pending_migrations(MIGRATIONS)
                .expect("failed to run migrations");
        }

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
