//! CLI for one-shot message classification
//!
//! # Usage
//!
//! ```bash
//! # Classify with the default config
//! spamcheck-rs "Congratulations! You've won a free prize."
//!
//! # Point at explicit artifact files
//! spamcheck-rs --vectorizer models/vectorizer.json --classifier models/classifier.json "Hi, lunch at noon?"
//! ```

use clap::Parser;
use spamcheck_rs::artifacts::ArtifactStore;
use spamcheck_rs::config::Config;
use spamcheck_rs::scam::{advice_for, categorize};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "spamcheck-rs")]
#[command(about = "Classify a message as spam or ham", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the vectorizer artifact path
    #[arg(long)]
    vectorizer: Option<String>,

    /// Override the classifier artifact path
    #[arg(long)]
    classifier: Option<String>,

    /// Message text to classify
    message: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let (mut config, from_file) = if std::path::Path::new(&cli.config).exists() {
        (Config::from_file(&cli.config)?, true)
    } else {
        (Config::default(), false)
    };

    // Initialize logging
    let level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = FmtSubscriber::builder().with_max_level(level);
    if config.logging.format == "json" {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())?;
    }

    if !from_file {
        info!("No config file found, using defaults");
    }

    if let Some(path) = cli.vectorizer {
        config.artifacts.vectorizer_path = path;
    }
    if let Some(path) = cli.classifier {
        config.artifacts.classifier_path = path;
    }

    let message = cli.message.join(" ");
    if message.trim().is_empty() {
        eprintln!("Error: no message given");
        std::process::exit(1);
    }

    let store = ArtifactStore::new(&config.artifacts);
    let bundle = store.load()?;

    let result = bundle.classify_text(&message);
    let mut report = serde_json::json!({
        "label": result.label,
        "ham_probability": result.ham_probability,
        "spam_probability": result.spam_probability,
    });

    if result.label.is_spam() {
        let category = categorize(&message);
        report["scam_category"] = serde_json::json!(category);
        report["scam_type"] = serde_json::json!(category.display_name());
        report["tips"] = serde_json::json!(advice_for(category));
    }

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
