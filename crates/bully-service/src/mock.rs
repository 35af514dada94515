use std::sync::Mutex;

use async_trait::async_trait;

use crate::{CritiqueProvider, ResearchProvider, ServiceError};

/// A research provider that returns a preconfigured reply and records the
/// prompts it was given.
pub struct MockResearch {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockResearch {
    pub fn success(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with `ServiceError::Transport(message)`.
    pub fn failure(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ResearchProvider for MockResearch {
    fn name(&self) -> &str {
        "mock"
    }

    async fn research(&self, prompt: &str) -> Result<String, ServiceError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.reply.clone().map_err(ServiceError::Transport)
    }
}

/// One recorded critique call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CritiqueCall {
    pub model: String,
    pub system_prompt: Option<String>,
    pub user_prompt: String,
}

/// A critique provider that returns a preconfigured reply and records calls.
pub struct MockCritique {
    reply: Result<String, String>,
    calls: Mutex<Vec<CritiqueCall>>,
}

impl MockCritique {
    pub fn success(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CritiqueCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CritiqueProvider for MockCritique {
    fn name(&self) -> &str {
        "mock"
    }

    async fn critique(
        &self,
        model: &str,
        system_prompt: Option<&str>,
        user_prompt: &str,
    ) -> Result<String, ServiceError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(CritiqueCall {
                model: model.to_string(),
                system_prompt: system_prompt.map(str::to_string),
                user_prompt: user_prompt.to_string(),
            });
        }
        self.reply.clone().map_err(ServiceError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn research_records_prompt() {
        let mock = MockResearch::success("found things");
        let out = mock.research("who is jane").await.unwrap();
        assert_eq!(out, "found things");
        assert_eq!(mock.prompts(), vec!["who is jane".to_string()]);
    }

    #[tokio::test]
    async fn research_failure_is_transport_error() {
        let mock = MockResearch::failure("boom");
        let err = mock.research("p").await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport(ref m) if m == "boom"));
    }

    #[tokio::test]
    async fn critique_records_call() {
        let mock = MockCritique::success("you will fail");
        mock.critique("m", Some("sys"), "usr").await.unwrap();
        assert_eq!(
            mock.calls(),
            vec![CritiqueCall {
                model: "m".into(),
                system_prompt: Some("sys".into()),
                user_prompt: "usr".into(),
            }]
        );
    }
}
