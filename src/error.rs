use thiserror::Error;

/// Unified error type for version resolution
#[derive(Error, Debug)]
pub enum RevisionError {
    #[error("Malformed version: {0}")]
    MalformedVersion(String),

    #[error("Error reading Git information: {0}")]
    RepositoryAccess(#[from] git2::Error),

    #[error("Error reading Git information: {0}")]
    RepositoryAccessMessage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-revision
pub type Result<T> = std::result::Result<T, RevisionError>;

impl RevisionError {
    /// Create a malformed version error with context
    pub fn malformed(msg: impl Into<String>) -> Self {
        RevisionError::MalformedVersion(msg.into())
    }

    /// Create a repository access error that did not originate in libgit2
    pub fn repository(msg: impl Into<String>) -> Self {
        RevisionError::RepositoryAccessMessage(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RevisionError::Config(msg.into())
    }

    /// Whether this error came from reading the repository
    pub fn is_repository_access(&self) -> bool {
        matches!(
            self,
            RevisionError::RepositoryAccess(_) | RevisionError::RepositoryAccessMessage(_)
        )
    }
}
