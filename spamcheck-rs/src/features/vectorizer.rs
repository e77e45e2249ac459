//! Pre-fitted TF-IDF vectorizer
//!
//! Restores a vectorizer from its artifact and maps text onto the closed
//! vocabulary. No fitting happens here; the vocabulary and IDF weights are
//! read-only for the process lifetime.

use std::collections::HashMap;

use crate::error::{Result, SpamCheckError};
use crate::text::tokenize;

use super::types::{FeatureVector, VectorizerArtifact};

/// TF-IDF vectorizer restored from a fitted artifact.
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    ngram_min: usize,
    ngram_max: usize,
}

impl TfidfVectorizer {
    /// Validate an artifact and restore the vectorizer from it.
    ///
    /// A vocabulary that does not line up with the IDF table is a
    /// configuration error and is rejected here, never deferred to
    /// vectorization time.
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self> {
        let dim = artifact.idf.len();

        if artifact.vocabulary.is_empty() {
            return Err(SpamCheckError::Artifact(
                "vectorizer vocabulary is empty".to_string(),
            ));
        }
        if artifact.vocabulary.len() != dim {
            return Err(SpamCheckError::Artifact(format!(
                "vocabulary has {} terms but idf has {} entries",
                artifact.vocabulary.len(),
                dim
            )));
        }

        let (ngram_min, ngram_max) = artifact.ngram_range;
        if ngram_min == 0 || ngram_min > ngram_max {
            return Err(SpamCheckError::Artifact(format!(
                "invalid ngram range ({}, {})",
                ngram_min, ngram_max
            )));
        }

        let mut seen = vec![false; dim];
        for (term, &idx) in &artifact.vocabulary {
            if idx >= dim {
                return Err(SpamCheckError::Artifact(format!(
                    "term '{}' maps to column {} outside dimension {}",
                    term, idx, dim
                )));
            }
            if seen[idx] {
                return Err(SpamCheckError::Artifact(format!(
                    "vocabulary column {} is assigned twice",
                    idx
                )));
            }
            seen[idx] = true;
        }

        if artifact.idf.iter().any(|w| !w.is_finite()) {
            return Err(SpamCheckError::Artifact(
                "idf table contains non-finite weights".to_string(),
            ));
        }

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            ngram_min,
            ngram_max,
        })
    }

    /// Number of feature columns.
    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    /// Map normalized text to its TF-IDF feature vector.
    ///
    /// Raw term counts over the fitted vocabulary, weighted by the fitted
    /// IDF, then L2-normalized. Out-of-vocabulary n-grams are dropped
    /// silently; text with no known terms yields the zero vector.
    pub fn vectorize(&self, text: &str) -> FeatureVector {
        let tokens = tokenize(text);
        let mut values = vec![0.0; self.dim()];

        for n in self.ngram_min..=self.ngram_max {
            for window in tokens.windows(n) {
                let term = window.join(" ");
                if let Some(&idx) = self.vocabulary.get(term.as_str()) {
                    values[idx] += 1.0;
                }
            }
        }

        for (value, idf) in values.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut values {
                *value /= norm;
            }
        }

        FeatureVector::new(values)
    }
}
