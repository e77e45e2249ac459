//! Feature vector types and the vectorizer artifact schema

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dense TF-IDF feature vector over the fitted vocabulary.
///
/// The dimension is fixed by the artifact; two vectors produced by the same
/// vectorizer always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of feature columns.
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Dot product against a weight vector of the same dimension.
    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.0.iter().zip(weights).map(|(x, w)| x * w).sum()
    }
}

/// Serialized form of a fitted TF-IDF vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    /// Term to column index mapping established at fit time.
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency weight per column.
    pub idf: Vec<f64>,
    /// Inclusive n-gram range, e.g. `[1, 2]` for unigrams + bigrams.
    pub ngram_range: (usize, usize),
}
