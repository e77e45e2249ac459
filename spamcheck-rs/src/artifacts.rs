//! Model artifact loading
//!
//! Reads the fitted vectorizer and classifier from disk, validates them as a
//! pair, and owns the load-once / hot-reload lifecycle. Everything above this
//! module works with an [`ArtifactStore`] handle and never touches the
//! filesystem itself.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::info;

use crate::classifier::{CalibratedLinearClassifier, Classification, ClassifierArtifact};
use crate::config::ArtifactConfig;
use crate::error::{Result, SpamCheckError};
use crate::features::{TfidfVectorizer, VectorizerArtifact};
use crate::text::normalize;

/// A matched vectorizer/classifier pair restored from disk.
///
/// The two artifacts are fitted together offline; a bundle is only
/// constructed once their dimensions agree, so classification can index
/// feature columns without further checks.
pub struct ModelBundle {
    vectorizer: TfidfVectorizer,
    classifier: CalibratedLinearClassifier,
}

impl ModelBundle {
    /// Restore a bundle from the two artifact files.
    ///
    /// Any failure here is fatal for the caller: a missing or malformed
    /// artifact means the classifier cannot serve at all.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        vectorizer_path: P,
        classifier_path: Q,
    ) -> Result<Self> {
        let raw = std::fs::read_to_string(&vectorizer_path)?;
        let artifact: VectorizerArtifact = serde_json::from_str(&raw)?;
        let vectorizer = TfidfVectorizer::from_artifact(artifact)?;

        let raw = std::fs::read_to_string(&classifier_path)?;
        let artifact: ClassifierArtifact = serde_json::from_str(&raw)?;
        let classifier = CalibratedLinearClassifier::from_artifact(artifact)?;

        if classifier.dim() != vectorizer.dim() {
            return Err(SpamCheckError::Artifact(format!(
                "classifier expects {} features but vectorizer produces {}",
                classifier.dim(),
                vectorizer.dim()
            )));
        }

        info!(
            "📦 Loaded model artifacts: {} features, {} calibration folds",
            vectorizer.dim(),
            classifier.calibrator_count()
        );

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Build a bundle from already-restored components. Test seam.
    pub fn from_parts(
        vectorizer: TfidfVectorizer,
        classifier: CalibratedLinearClassifier,
    ) -> Result<Self> {
        if classifier.dim() != vectorizer.dim() {
            return Err(SpamCheckError::Artifact(format!(
                "classifier expects {} features but vectorizer produces {}",
                classifier.dim(),
                vectorizer.dim()
            )));
        }
        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Run the full pipeline on raw text: normalize, vectorize, classify.
    pub fn classify_text(&self, raw: &str) -> Classification {
        let cleaned = normalize(raw);
        let features = self.vectorizer.vectorize(&cleaned);
        self.classifier.classify(&features)
    }

    pub fn dim(&self) -> usize {
        self.vectorizer.dim()
    }
}

/// Shared handle to the current model bundle.
///
/// Constructed once at startup and injected into whatever needs to classify.
/// The first `load` reads the artifacts; later calls hand out the cached
/// bundle. `reload` builds a replacement bundle fully before swapping it in,
/// so readers always see either the old pair or the new pair, never a mix.
pub struct ArtifactStore {
    vectorizer_path: PathBuf,
    classifier_path: PathBuf,
    slot: RwLock<Option<Arc<ModelBundle>>>,
}

impl ArtifactStore {
    /// Create a store over the configured artifact paths. No files are read
    /// until the first `load`.
    pub fn new(config: &ArtifactConfig) -> Self {
        Self {
            vectorizer_path: PathBuf::from(&config.vectorizer_path),
            classifier_path: PathBuf::from(&config.classifier_path),
            slot: RwLock::new(None),
        }
    }

    /// Create a store that already holds a bundle. Callers that build their
    /// bundle in memory (fixtures, embedding) skip the filesystem entirely;
    /// `reload` is not meaningful for such a store.
    pub fn preloaded(bundle: ModelBundle) -> Self {
        Self {
            vectorizer_path: PathBuf::new(),
            classifier_path: PathBuf::new(),
            slot: RwLock::new(Some(Arc::new(bundle))),
        }
    }

    /// Get the current bundle, reading the artifacts on first use.
    ///
    /// At most one load happens per store; concurrent callers during the
    /// first load serialize on the write lock and all but one find the slot
    /// already filled.
    pub fn load(&self) -> Result<Arc<ModelBundle>> {
        {
            let slot = self.slot.read().unwrap_or_else(|e| e.into_inner());
            if let Some(bundle) = slot.as_ref() {
                return Ok(Arc::clone(bundle));
            }
        }

        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        if let Some(bundle) = slot.as_ref() {
            return Ok(Arc::clone(bundle));
        }

        let bundle = Arc::new(ModelBundle::load(
            &self.vectorizer_path,
            &self.classifier_path,
        )?);
        *slot = Some(Arc::clone(&bundle));
        Ok(bundle)
    }

    /// Re-read the artifacts and swap the new bundle in.
    ///
    /// The replacement is fully built and validated before the slot is
    /// touched; on failure the previous bundle stays in service and the
    /// error is returned to the caller.
    pub fn reload(&self) -> Result<Arc<ModelBundle>> {
        let bundle = Arc::new(ModelBundle::load(
            &self.vectorizer_path,
            &self.classifier_path,
        )?);

        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Arc::clone(&bundle));
        info!("🔄 Model artifacts reloaded");
        Ok(bundle)
    }

    pub fn is_loaded(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}
