//! TF-IDF vectorizer over a small in-memory corpus.
//!
//! Tokens are runs of two or more word characters after lowercasing, so `,` and spaces split
//! terms and single letters are dropped. Weights use the smoothed idf
//! `ln((1 + n) / (1 + df)) + 1` on raw term counts, and every row is L2-normalized.
//! The vocabulary is fit fresh each time; there is no persisted index.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::OnceLock;

use regex::Regex;

use crate::recommend::RecommendError;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("static token pattern is valid"))
}

/// Lowercases `text` and splits it into vectorizer terms.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Sparse vector
// ────────────────────────────────────────────────────────────────────────────

/// Sparse vector as `(term index, weight)` pairs sorted by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_map(map: BTreeMap<usize, f64>) -> Self {
        Self {
            entries: map.into_iter().filter(|(_, w)| *w != 0.0).collect(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn weight(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |(i, _)| *i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    fn l2_normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Vectorizer
// ────────────────────────────────────────────────────────────────────────────

/// A fitted vocabulary with per-term idf weights.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learns the vocabulary and idf weights from `documents`.
    ///
    /// Fails when there are no documents or when no document contains a single term.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self, RecommendError> {
        if documents.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }

        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: BTreeSet<String> = tokenize(doc.as_ref()).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(RecommendError::EmptyVocabulary);
        }

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        // BTreeMap iteration gives the sorted term order used for indices.
        for (index, (term, df)) in doc_freq.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Ok(Self { vocabulary, idf })
    }

    /// Fits on `documents` and returns their vectors in corpus order.
    pub fn fit_transform<S: AsRef<str>>(
        documents: &[S],
    ) -> Result<(Self, Vec<SparseVector>), RecommendError> {
        let vectorizer = Self::fit(documents)?;
        let vectors = documents
            .iter()
            .map(|d| vectorizer.transform(d.as_ref()))
            .collect();
        Ok((vectorizer, vectors))
    }

    /// Projects `text` into the fitted space. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }
        for (index, tf) in counts.iter_mut() {
            *tf *= self.idf[*index];
        }
        SparseVector::from_map(counts).l2_normalized()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    #[cfg(test)]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    #[cfg(test)]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|i| self.idf[i])
    }
}
