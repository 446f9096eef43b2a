//! Error types for skinsafe

/// Result type alias using skinsafe's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for skinsafe operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Completion backend errors (network failure, non-2xx, API error object)
    #[error("backend error: {0}")]
    Backend(String),

    /// Result contract violations (malformed or incomplete analysis payload)
    #[error("contract error: {0}")]
    Contract(String),

    /// History store errors
    #[error("store error: {0}")]
    Store(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Create a new contract error
    pub fn contract(msg: impl Into<String>) -> Self {
        Self::Contract(msg.into())
    }

    /// Create a new store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
