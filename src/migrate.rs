use sqlx::SqlitePool;
use sqlx_migrator::{Migrate, Plan};

use crate::Config;

pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!(url = %config.database.url, "Migrating database");

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    run_migrations(&pool).await?;
    pool.close().await;

    Ok(())
}

/// Applies every pending migration. Already applied ones are skipped.
pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;
    recipebox_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    tracing::info!("Migrations applied");

    Ok(())
}
