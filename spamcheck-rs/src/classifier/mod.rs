//! Spam/ham classification
//!
//! Wraps the pre-trained linear decision boundary and its cross-validated
//! probability calibration.

pub mod model;
pub mod types;

pub use model::CalibratedLinearClassifier;
pub use types::{CalibratorParams, Classification, ClassifierArtifact, Label};
