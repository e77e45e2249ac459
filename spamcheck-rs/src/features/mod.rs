//! TF-IDF feature extraction
//!
//! Maps normalized message text onto the fixed-dimension feature space
//! established when the model was fitted.

pub mod types;
pub mod vectorizer;

pub use types::{FeatureVector, VectorizerArtifact};
pub use vectorizer::TfidfVectorizer;
