#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use recipebox::{
    AppState,
    config::{Config, DatabaseConfig, ObservabilityConfig, RankingConfig, ServerConfig},
};
use recipebox_recipe::{Command, Query};
use recipebox_shared::State;
use std::path::PathBuf;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        observability: ObservabilityConfig::default(),
        ranking: RankingConfig::default(),
    }
}

pub async fn setup_test_app(path: PathBuf) -> anyhow::Result<Router> {
    let state = setup_test_state(path).await?;

    Ok(recipebox::routes::router(state))
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<AppState> {
    let pool =
        recipebox::db::create_pool(&format!("sqlite:{}", path.to_str().unwrap()), 1).await?;
    recipebox::migrate::run_migrations(&pool).await?;

    let state = State::single(pool.clone());

    Ok(AppState {
        config: test_config(),
        command: Command::new(state.clone()),
        query: Query(state),
        pool,
    })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body_bytes).unwrap()
}
