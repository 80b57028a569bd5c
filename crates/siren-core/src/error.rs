use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("duplicate field name: {0}")]
    DuplicateFieldName(String),

    #[error("duplicate action name: {0}")]
    DuplicateActionName(String),

    #[error("{kind} must contain at least one token")]
    EmptyTokenSet { kind: &'static str },

    #[error("duplicate token in {kind}: {token}")]
    DuplicateToken { kind: &'static str, token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
