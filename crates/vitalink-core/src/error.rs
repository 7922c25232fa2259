use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid object key: {0}")]
    InvalidKey(String),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
