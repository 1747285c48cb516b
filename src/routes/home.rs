use axum::{Json, extract::State};
use recipebox_ranking::compute_trending_by;
use recipebox_shared::RecipeSnapshot;
use serde::Serialize;

use crate::{error::AppError, routes::AppState};

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub trending: Vec<RecipeSnapshot>,
    pub recipes: Vec<RecipeSnapshot>,
    /// Set when some `ever_top` flags could not be saved. The trending list is
    /// still served.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_error: Option<String>,
}

/// GET / - trending recipes followed by every recipe, newest first
pub async fn page(State(state): State<AppState>) -> Result<Json<HomeResponse>, AppError> {
    let ranking = &state.config.ranking;
    let snapshot = state.query.snapshot().await?;
    let trending = compute_trending_by(&snapshot, ranking.trending_signal, ranking.trending_size);

    let flag_error = match trending.persist(&state.command).await {
        Ok(()) => None,
        Err(err) => {
            tracing::error!(error = %err, "Trending served with unsaved ever-top flags");
            Some(err.to_string())
        }
    };

    let recipes = state.query.latest().await?;

    Ok(Json(HomeResponse {
        trending: trending.recipes,
        recipes,
        flag_error,
    }))
}
