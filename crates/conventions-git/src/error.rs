//! Error types for conventions-git

/// Result type for conventions-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in conventions-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] conventions_fs::Error),
}
