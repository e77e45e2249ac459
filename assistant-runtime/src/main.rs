//! assistant-runtime - HTTP service for the spam assistant

use assistant_runtime::config::RuntimeConfig;
use assistant_runtime::history::HistoryStore;
use assistant_runtime::state::{build_router, AppState};
use spamcheck_rs::artifacts::ArtifactStore;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config_path = "config.toml";
    let (config, from_file) = if std::path::Path::new(config_path).exists() {
        (RuntimeConfig::from_file(config_path)?, true)
    } else {
        (RuntimeConfig::default(), false)
    };

    // Initialize logging
    let level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = FmtSubscriber::builder().with_max_level(level);
    if config.logging.format == "json" {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())?;
    }

    info!("🚀 Starting assistant-runtime...");
    if !from_file {
        info!("No config file found, using defaults");
    }
    info!("  Listen address: {}", config.server.listen_addr);
    info!("  Vectorizer: {}", config.artifacts.vectorizer_path);
    info!("  Classifier: {}", config.artifacts.classifier_path);
    info!("  Database: {}", config.storage.database_url);

    // Artifacts must load before we serve anything
    let store = Arc::new(ArtifactStore::new(&config.artifacts));
    let bundle = store.load()?;
    info!("✅ Model ready: {} features", bundle.dim());

    let history = HistoryStore::connect(&config.storage.database_url).await?;
    info!("✅ History store ready");

    let state = Arc::new(AppState::new(store, history));
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.server.listen_addr).await?;
    info!("🌐 Server listening on http://{}", config.server.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
