use crate::recommend::tfidf::SparseVector;

/// Cosine similarity `a·b / (‖a‖‖b‖)`. Returns 0.0 when either vector is zero.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }
    a.dot(b) / (a.norm() * b.norm())
}

/// Similarity of `query` against every vector in `corpus`, in corpus order.
pub fn cosine_similarities(query: &SparseVector, corpus: &[SparseVector]) -> Vec<f64> {
    corpus
        .iter()
        .map(|doc| cosine_similarity(query, doc))
        .collect()
}
