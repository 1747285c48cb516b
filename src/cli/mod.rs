mod ranking;
mod server;

pub use ranking::{recommend, trending};
pub use server::serve;

use recipebox_recipe::{Command, Query};
use recipebox_shared::State;
use sqlx::SqlitePool;

/// Single pool command and query handles for one-shot CLI commands.
async fn connect(config: &recipebox::Config) -> anyhow::Result<(SqlitePool, Command, Query)> {
    let pool = recipebox::db::create_pool(&config.database.url, 1).await?;
    let state = State::single(pool.clone());

    Ok((pool, Command::new(state.clone()), Query(state)))
}
