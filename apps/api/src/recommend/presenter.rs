//! Presenter — turns a ranked recommendation list into API output.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::models::recommendation::Recommendation;

/// A recommendation with its 1-based position in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecommendation {
    pub rank: usize,
    pub occupation: String,
    pub similarity: f64,
    pub description: Option<String>,
}

pub fn with_ranks(recommendations: Vec<Recommendation>) -> Vec<RankedRecommendation> {
    recommendations
        .into_iter()
        .enumerate()
        .map(|(i, r)| RankedRecommendation {
            rank: i + 1,
            occupation: r.occupation,
            similarity: r.similarity,
            description: r.description,
        })
        .collect()
}

/// Renders the results panel as markdown. An empty list renders as an empty string.
pub fn render_markdown(recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return String::new();
    }

    let mut out = format!(
        "### Top {} Career Recommendations:\n\n",
        recommendations.len()
    );
    for (i, rec) in recommendations.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}. {}\n", i + 1, rec.occupation);
        let _ = writeln!(out, "Similarity Score: {:.1}%\n", rec.similarity);
        if let Some(description) = rec.description.as_deref().filter(|d| !d.is_empty()) {
            let _ = writeln!(out, "{description}\n");
        }
        out.push_str("---\n\n");
    }
    out
}
