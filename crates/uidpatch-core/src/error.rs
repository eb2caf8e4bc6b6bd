use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatchError>;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("truncated input: {0}")]
    TruncatedInput(String),

    #[error("malformed varint: {0}")]
    MalformedVarint(String),

    #[error("field not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
