use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Core error: {0}")]
    Core(#[from] spamcheck_rs::SpamCheckError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
