use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub artifacts: ArtifactConfig,
    pub logging: LoggingConfig,
}

/// Filesystem locations of the two fitted model artifacts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtifactConfig {
    pub vectorizer_path: String,
    pub classifier_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::SpamCheckError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::SpamCheckError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            artifacts: ArtifactConfig {
                vectorizer_path: "models/vectorizer.json".to_string(),
                classifier_path: "models/classifier.json".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
