use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Prefix must not be empty or contain path separators, got: {prefix:?}")]
    InvalidPrefix { prefix: String },

    #[error(transparent)]
    Batch(#[from] badgepress::Error),
}
