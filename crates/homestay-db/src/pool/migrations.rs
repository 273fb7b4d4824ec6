//! Schema migrations, loaded from disk at runtime

use std::path::{Path, PathBuf};

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPool;
use tracing::{info, instrument};

/// The `migrations/` directory shipped with this crate
pub fn default_migrations_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

/// Apply every pending migration found in `dir`
#[instrument(skip(pool), fields(dir = %dir.display()))]
pub async fn run_migrations(pool: &PgPool, dir: &Path) -> Result<(), MigrateError> {
    let migrator = Migrator::new(dir).await?;
    migrator.run(pool).await?;
    info!(count = migrator.iter().count(), "Migrations applied");
    Ok(())
}
