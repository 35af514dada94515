use thiserror::Error;

#[derive(Debug, Error)]
pub enum BullyError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
