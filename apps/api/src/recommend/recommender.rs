//! Recommender — ranks job occupations against a user's skills and domain.
//!
//! Default: `TfIdfRecommender`, cosine similarity over TF-IDF vectors of the jobs'
//! "skill and domain" text. The vector space is rebuilt on every call.
//!
//! `AppState` holds an `Arc<dyn Recommender>`, chosen at startup.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::models::recommendation::Recommendation;
use crate::recommend::query::{build_query_document, UserQuery};
use crate::recommend::similarity::cosine_similarities;
use crate::recommend::tfidf::TfidfVectorizer;
use crate::recommend::RecommendError;

/// Number of matches returned when no other limit is configured.
pub const DEFAULT_TOP_K: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Swappable ranking backend. Handlers only see this trait.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(
        &self,
        catalog: Arc<Catalog>,
        query: UserQuery,
    ) -> Result<Vec<Recommendation>, AppError>;

    /// Short label for logs and responses.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// TfIdfRecommender
// ────────────────────────────────────────────────────────────────────────────

pub struct TfIdfRecommender {
    pub top_k: usize,
}

impl Default for TfIdfRecommender {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

#[async_trait]
impl Recommender for TfIdfRecommender {
    async fn recommend(
        &self,
        catalog: Arc<Catalog>,
        query: UserQuery,
    ) -> Result<Vec<Recommendation>, AppError> {
        if !query.is_complete() {
            return Ok(Vec::new());
        }
        let top_k = self.top_k;

        // Vectorizing the whole corpus is CPU-bound; keep it off the async executor.
        let results = tokio::task::spawn_blocking(move || {
            recommend_top_k(&query.skills, query.selected_domain(), &catalog.jobs, top_k)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("recommendation task failed: {e}")))??;

        Ok(results)
    }

    fn backend(&self) -> &'static str {
        "tfidf"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core ranking
// ────────────────────────────────────────────────────────────────────────────

/// Returns up to three jobs best matching `skills` + `domain`.
#[allow(dead_code)]
pub fn recommend<S: AsRef<str>>(
    skills: &[S],
    domain: Option<&str>,
    jobs: &[JobRecord],
) -> Result<Vec<Recommendation>, RecommendError> {
    recommend_top_k(skills, domain, jobs, DEFAULT_TOP_K)
}

/// Ranks every job by cosine similarity to the query and keeps the best `top_k`.
///
/// 1. Empty skills or unset domain → empty list
/// 2. Query document = whitespace-stripped skills joined by `,` + `,` + domain
/// 3. Fit TF-IDF on every job's `skill_and_domain`, project the query into that space
/// 4. Sort descending by similarity; ties keep corpus order
/// 5. Report similarity as a percentage rounded to one decimal
pub fn recommend_top_k<S: AsRef<str>>(
    skills: &[S],
    domain: Option<&str>,
    jobs: &[JobRecord],
    top_k: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    let domain = match domain.filter(|d| !d.trim().is_empty()) {
        Some(d) if !skills.is_empty() => d,
        _ => return Ok(Vec::new()),
    };

    let query_document = build_query_document(skills, domain);

    let documents: Vec<&str> = jobs.iter().map(|j| j.skill_and_domain.as_str()).collect();
    let (vectorizer, job_vectors) = TfidfVectorizer::fit_transform(&documents)?;
    let query_vector = vectorizer.transform(&query_document);

    let scores = cosine_similarities(&query_vector, &job_vectors);

    let mut ranked: Vec<usize> = (0..jobs.len()).collect();
    // Stable sort, so equal scores stay in corpus order.
    ranked.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

    let recommendations: Vec<Recommendation> = ranked
        .into_iter()
        .take(top_k)
        .map(|i| Recommendation {
            occupation: jobs[i].occupation.clone(),
            similarity: to_percentage(scores[i]),
            description: jobs[i].description.clone(),
        })
        .collect();

    debug!(
        "Ranked {} jobs for query '{}' (vocabulary {}), top: {:?}",
        jobs.len(),
        query_document,
        vectorizer.vocabulary_size(),
        recommendations.first().map(|r| (&r.occupation, r.similarity))
    );

    Ok(recommendations)
}

/// `score × 100` rounded to one decimal, clamped to [0, 100].
fn to_percentage(score: f64) -> f64 {
    ((score * 1000.0).round() / 10.0).clamp(0.0, 100.0)
}
