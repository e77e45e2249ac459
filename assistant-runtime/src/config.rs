use serde::{Deserialize, Serialize};
use spamcheck_rs::config::ArtifactConfig;
use std::path::Path;

use crate::error::{Result, RuntimeError};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuntimeConfig {
    pub server: ServerConfig,
    pub artifacts: ArtifactConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// SQLite URL for the check history, e.g. `sqlite://history.db`.
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl RuntimeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| RuntimeError::Config(e.to_string()))?;

        toml::from_str(&content).map_err(|e| RuntimeError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "0.0.0.0:8899".to_string(),
            },
            artifacts: ArtifactConfig {
                vectorizer_path: "models/vectorizer.json".to_string(),
                classifier_path: "models/classifier.json".to_string(),
            },
            storage: StorageConfig {
                database_url: "sqlite://history.db".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
