pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog_handlers;
use crate::recommend::handlers as recommend_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Selection options
        .route("/api/v1/domains", get(catalog_handlers::handle_list_domains))
        .route("/api/v1/skills", get(catalog_handlers::handle_suggest_skills))
        // Recommendations
        .route(
            "/api/v1/recommendations",
            post(recommend_handlers::handle_recommend),
        )
        .route(
            "/api/v1/recommendations/markdown",
            post(recommend_handlers::handle_recommend_markdown),
        )
        .with_state(state)
}
