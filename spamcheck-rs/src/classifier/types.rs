//! Classification types and the classifier artifact schema

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary verdict for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    pub fn is_spam(&self) -> bool {
        matches!(self, Label::Spam)
    }

    /// Parse a label string case-insensitively; `None` for anything else.
    pub fn parse(s: &str) -> Option<Label> {
        match s.trim().to_lowercase().as_str() {
            "ham" => Some(Label::Ham),
            "spam" => Some(Label::Spam),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Ham => write!(f, "Ham"),
            Label::Spam => write!(f, "Spam"),
        }
    }
}

/// Calibrated two-class classification result.
///
/// `label` comes from the raw decision margin; the probabilities come from
/// the calibration step. Near the decision boundary the two can disagree,
/// and that disagreement is part of the fitted model's observable behavior,
/// not something to reconcile here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: Label,
    pub ham_probability: f64,
    pub spam_probability: f64,
}

impl Classification {
    /// Probability backing the displayed confidence for this verdict.
    pub fn confidence(&self) -> f64 {
        match self.label {
            Label::Ham => self.ham_probability,
            Label::Spam => self.spam_probability,
        }
    }
}

/// Sigmoid calibrator parameters for one cross-validation fold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalibratorParams {
    pub slope: f64,
    pub offset: f64,
}

/// Serialized form of the fitted calibrated linear classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    /// Decision hyperplane weights, one per feature column.
    pub weights: Vec<f64>,
    /// Decision hyperplane intercept.
    pub intercept: f64,
    /// Per-fold sigmoid calibrators, averaged at prediction time.
    pub calibrators: Vec<CalibratorParams>,
}
