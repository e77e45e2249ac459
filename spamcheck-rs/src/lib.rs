//! spamcheck-rs: Spam message classifier with scam awareness
//!
//! Classifies short messages as spam or ham and explains the verdict.
//!
//! # Features
//!
//! - **Classification**: Pre-fitted TF-IDF features with a calibrated
//!   linear model; labels from the decision margin, confidence from
//!   cross-validated sigmoid calibration
//! - **Scam taxonomy**: Ordered keyword rules mapping flagged messages to a
//!   scam category, each with curated awareness tips
//! - **Assistant**: Check/ask conversation flow with colored HTML replies
//! - **Hot reload**: Model artifacts swap atomically without a restart
//!
//! # Example
//!
//! ```no_run
//! use spamcheck_rs::artifacts::ArtifactStore;
//! use spamcheck_rs::assistant::Assistant;
//! use spamcheck_rs::config::Config;
//! use spamcheck_rs::session::SessionContext;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let store = Arc::new(ArtifactStore::new(&config.artifacts));
//!     let assistant = Assistant::new(store);
//!
//!     let mut ctx = SessionContext::new();
//!     assistant.check(&mut ctx, "Congratulations! You've won a free prize.")?;
//!     let answer = assistant.answer(&ctx, "What type of scam is this?")?;
//!     println!("{}", answer.html);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`text`]: Text normalization and tokenization
//! - [`features`]: TF-IDF vectorization over the fitted vocabulary
//! - [`classifier`]: Calibrated linear spam/ham classifier
//! - [`scam`]: Scam category rules and awareness tips
//! - [`artifacts`]: Artifact loading and hot reload
//! - [`session`]: Session context and history records
//! - [`assistant`]: Check/ask conversation responder

pub mod artifacts;
pub mod assistant;
pub mod classifier;
pub mod config;
pub mod error;
pub mod features;
pub mod scam;
pub mod session;
pub mod text;

// Re-export commonly used types
pub use artifacts::{ArtifactStore, ModelBundle};
pub use assistant::Assistant;
pub use classifier::{Classification, Label};
pub use config::Config;
pub use error::{Result, SpamCheckError};
pub use scam::ScamCategory;
pub use session::{HistoryEntry, SessionContext};
