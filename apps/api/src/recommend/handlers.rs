//! Axum route handlers for the Recommendation API.

use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::recommend::presenter::{render_markdown, with_ranks, RankedRecommendation};
use crate::recommend::query::UserQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RankedRecommendation>,
    pub backend: String,
}

/// POST /api/v1/recommendations
///
/// Ranks the catalog against the submitted skills + domain.
/// An incomplete selection (no skills or no domain) yields an empty list, not an error.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(query): Json<UserQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    query.validate(state.config.max_skills)?;

    let recommendations = state
        .recommender
        .recommend(state.catalog.clone(), query)
        .await?;

    Ok(Json(RecommendationsResponse {
        recommendations: with_ranks(recommendations),
        backend: state.recommender.backend().to_string(),
    }))
}

/// POST /api/v1/recommendations/markdown
///
/// Same ranking as `handle_recommend`, rendered as the markdown results panel.
pub async fn handle_recommend_markdown(
    State(state): State<AppState>,
    Json(query): Json<UserQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate(state.config.max_skills)?;

    let recommendations = state
        .recommender
        .recommend(state.catalog.clone(), query)
        .await?;

    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        render_markdown(&recommendations),
    ))
}
