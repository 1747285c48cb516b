use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use recipebox_ranking::recommend as recommend_recipes;
use recipebox_recipe::CreateInput;
use recipebox_shared::RecipeSnapshot;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::{error::AppError, routes::AppState};

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    pub mood: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub mood: String,
    pub recipes: Vec<RecipeSnapshot>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LikeInput {
    #[validate(length(min = 1, max = 26))]
    pub user_id: String,
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = state.command.create(input).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// GET /recipes/{id} - counts a view, then returns the recipe
pub async fn detail(
    State(state): State<AppState>,
    Path((id,)): Path<(String,)>,
) -> Result<Json<RecipeSnapshot>, AppError> {
    state.command.view(&id).await?;

    let recipe = state
        .query
        .find(&id)
        .await?
        .ok_or(AppError::NotFound("recipe"))?;

    Ok(Json(recipe))
}

/// GET /recipes/recommend?mood=&limit=
///
/// Unknown or missing moods get every recipe back unranked.
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<RecommendResponse>, AppError> {
    let mood = params.mood.unwrap_or_default();
    let limit = params
        .limit
        .unwrap_or(state.config.ranking.recommendation_limit);

    let snapshot = state.query.snapshot().await?;
    let recipes = recommend_recipes(&mood, snapshot, limit);

    Ok(Json(RecommendResponse { mood, recipes }))
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<RecipeSnapshot>>, AppError> {
    let recipes = state
        .query
        .search(params.q.as_deref().unwrap_or_default())
        .await?;

    Ok(Json(recipes))
}

pub async fn like(
    State(state): State<AppState>,
    Path((id,)): Path<(String,)>,
    Json(input): Json<LikeInput>,
) -> Result<impl IntoResponse, AppError> {
    input.validate()?;
    state.command.like(&id, input.user_id).await?;

    let likes = state.query.like_count(&id).await?;

    Ok(Json(json!({ "id": id, "liked": true, "likes": likes })))
}

pub async fn unlike(
    State(state): State<AppState>,
    Path((id,)): Path<(String,)>,
    Json(input): Json<LikeInput>,
) -> Result<impl IntoResponse, AppError> {
    input.validate()?;
    state.command.unlike(&id, input.user_id).await?;

    let likes = state.query.like_count(&id).await?;

    Ok(Json(json!({ "id": id, "liked": false, "likes": likes })))
}
