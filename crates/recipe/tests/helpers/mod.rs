use recipebox_recipe::{Command, CreateInput};
use recipebox_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use std::{path::PathBuf, str::FromStr};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    recipebox_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub async fn create_recipe(
    command: &Command,
    title: &str,
    ingredients: &[&str],
    instructions: &str,
) -> anyhow::Result<String> {
    let id = command
        .create(CreateInput {
            user_id: "john".to_owned(),
            title: title.to_owned(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            preparation_time: "30 minutes".to_owned(),
            instructions: instructions.to_owned(),
        })
        .await?;

    Ok(id)
}
