use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        ServiceError::Transport(e.to_string())
    }
}

/// Stage one: open-web research about a person.
///
/// Implementations receive a fully assembled prompt and return whatever
/// prose the search-grounded model produced.
#[async_trait]
pub trait ResearchProvider: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    async fn research(&self, prompt: &str) -> Result<String, ServiceError>;
}

/// Stage two: a single chat exchange against the critic model.
#[async_trait]
pub trait CritiqueProvider: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Send an optional system message followed by the user message and
    /// return the assistant's reply.
    async fn critique(
        &self,
        model: &str,
        system_prompt: Option<&str>,
        user_prompt: &str,
    ) -> Result<String, ServiceError>;
}
