use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

const DEFAULT_SUGGESTION_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct SkillSearchQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DomainsResponse {
    pub domains: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
    pub total: usize,
    pub max_selections: usize,
}

/// GET /api/v1/domains
pub async fn handle_list_domains(State(state): State<AppState>) -> Json<DomainsResponse> {
    Json(DomainsResponse {
        domains: state.catalog.domains.clone(),
    })
}

/// GET /api/v1/skills?q=&limit=
///
/// Type-ahead suggestions from the skill catalogue. `total` is the catalogue size.
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Query(params): Query<SkillSearchQuery>,
) -> Json<SkillsResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
    let skills = state
        .catalog
        .skills
        .suggest(params.q.as_deref().unwrap_or(""), limit)
        .into_iter()
        .map(String::from)
        .collect();

    Json(SkillsResponse {
        skills,
        total: state.catalog.skills.len(),
        max_selections: state.config.max_skills,
    })
}
