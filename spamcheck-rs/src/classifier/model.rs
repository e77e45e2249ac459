//! Calibrated linear spam classifier
//!
//! The decision boundary and the probability calibration were fitted
//! offline; this module only evaluates them.

use crate::error::{Result, SpamCheckError};
use crate::features::FeatureVector;

use super::types::{CalibratorParams, Classification, ClassifierArtifact, Label};

/// Linear margin classifier with cross-validated sigmoid calibration.
pub struct CalibratedLinearClassifier {
    weights: Vec<f64>,
    intercept: f64,
    calibrators: Vec<CalibratorParams>,
}

impl CalibratedLinearClassifier {
    /// Validate an artifact and restore the classifier from it.
    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self> {
        if artifact.weights.is_empty() {
            return Err(SpamCheckError::Artifact(
                "classifier weight vector is empty".to_string(),
            ));
        }
        if artifact.weights.iter().any(|w| !w.is_finite()) || !artifact.intercept.is_finite() {
            return Err(SpamCheckError::Artifact(
                "classifier weights contain non-finite values".to_string(),
            ));
        }
        if artifact.calibrators.is_empty() {
            return Err(SpamCheckError::Artifact(
                "classifier has no calibrators".to_string(),
            ));
        }
        if artifact
            .calibrators
            .iter()
            .any(|c| !c.slope.is_finite() || !c.offset.is_finite())
        {
            return Err(SpamCheckError::Artifact(
                "calibrator parameters contain non-finite values".to_string(),
            ));
        }

        Ok(Self {
            weights: artifact.weights,
            intercept: artifact.intercept,
            calibrators: artifact.calibrators,
        })
    }

    /// Number of feature columns the decision hyperplane expects.
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// Number of cross-validation folds the calibration averages over.
    pub fn calibrator_count(&self) -> usize {
        self.calibrators.len()
    }

    /// Raw decision margin for a feature vector.
    pub fn margin(&self, features: &FeatureVector) -> f64 {
        features.dot(&self.weights) + self.intercept
    }

    /// Classify a feature vector.
    ///
    /// Label: positive margin means spam, anything else ham. Probability:
    /// mean of the per-fold sigmoid calibrators evaluated at the margin,
    /// with the ham side as the complement.
    pub fn classify(&self, features: &FeatureVector) -> Classification {
        let margin = self.margin(features);
        let label = if margin > 0.0 { Label::Spam } else { Label::Ham };

        let spam_probability = self
            .calibrators
            .iter()
            .map(|c| sigmoid(c.slope * margin + c.offset))
            .sum::<f64>()
            / self.calibrators.len() as f64;

        Classification {
            label,
            ham_probability: 1.0 - spam_probability,
            spam_probability,
        }
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
