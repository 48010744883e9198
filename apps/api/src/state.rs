use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::recommend::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only datasets loaded once at startup.
    pub catalog: Arc<Catalog>,
    /// Pluggable ranking backend. Default: TfIdfRecommender.
    pub recommender: Arc<dyn Recommender>,
    pub config: Config,
}
