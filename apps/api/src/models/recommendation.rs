use serde::{Deserialize, Serialize};

/// A single ranked match returned by a recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub occupation: String,
    /// Cosine similarity as a percentage, rounded to one decimal (0.0 – 100.0).
    pub similarity: f64,
    pub description: Option<String>,
}
