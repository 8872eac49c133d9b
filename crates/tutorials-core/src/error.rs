use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("tutorial {id} not found")]
    NotFound { id: u64 },

    #[error("object storage {operation} of {key} failed: {reason}")]
    Storage {
        operation: &'static str,
        key: String,
        reason: String,
    },

    #[error("failed to serialize tutorial: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to deserialize tutorial: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl Error {
    pub fn storage(operation: &'static str, key: &str, reason: impl std::fmt::Display) -> Self {
        Self::Storage {
            operation,
            key: key.to_owned(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
