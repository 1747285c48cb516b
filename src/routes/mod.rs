use axum::{
    Router,
    routing::{get, post},
};
use sqlx::SqlitePool;

mod health;
mod home;
mod recipes;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub command: recipebox_recipe::Command,
    pub query: recipebox_recipe::Query,
    pub pool: SqlitePool,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(home::page))
        .route("/recipes", post(recipes::create))
        .route("/recipes/recommend", get(recipes::recommend))
        .route("/recipes/search", get(recipes::search))
        .route("/recipes/{id}", get(recipes::detail))
        .route(
            "/recipes/{id}/like",
            post(recipes::like).delete(recipes::unlike),
        )
        .with_state(app_state)
}
