use std::path::Path;

use anyhow::{Context, Result};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

/// Embed all diesel migrations at compile time
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for SQLite connection pool
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Open an existing contact database read-only.
///
/// This is the record store path. The database belongs to whoever
/// maintains the contacts; nothing is created, migrated or written, and
/// SQLite rejects writes on these connections.
pub fn open_read_only_pool(database_path: &Path) -> Result<DbPool> {
    let url = read_only_url(database_path)?;
    build_pool(&url)
}

/// Create database connection pool and run migrations
///
/// For fixtures and for setting up a fresh, empty database. Fails against
/// a database whose tables were created outside these migrations.
pub fn init_db_pool(database_url: &str) -> Result<DbPool> {
    let pool = build_pool(database_url)?;

    run_migrations(&pool)?;

    Ok(pool)
}

fn build_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    Pool::builder()
        .build(manager)
        .with_context(|| format!("Failed to create database pool for {}", database_url))
}

/// `file:` URI with `mode=ro` for `database_path`. The file must exist.
fn read_only_url(database_path: &Path) -> Result<String> {
    let absolute = std::fs::canonicalize(database_path)
        .with_context(|| format!("Contact database not found: {}", database_path.display()))?;
    let mut url = url::Url::from_file_path(&absolute)
        .map_err(|_| anyhow::anyhow!("Invalid database path: {}", absolute.display()))?;
    url.set_query(Some("mode=ro"));
    Ok(url.to_string())
}

/// Run embedded Diesel migrations
fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get()?;

    info!("Running database migrations...");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    info!("Database migrations completed");

    Ok(())
}
