// Recommendation engine
// Implements: query normalization, TF-IDF vectorization, cosine ranking, result rendering.
// The vector space is rebuilt per request from the catalog; nothing is cached between calls.

pub mod handlers;
pub mod presenter;
pub mod query;
pub mod recommender;
pub mod similarity;
pub mod tfidf;

use thiserror::Error;

pub use recommender::{Recommender, TfIdfRecommender};

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("cannot vectorize an empty job corpus")]
    EmptyCorpus,

    #[error("empty vocabulary: no job document contains a usable term")]
    EmptyVocabulary,
}
