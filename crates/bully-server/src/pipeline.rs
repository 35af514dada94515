use std::sync::Arc;

use bully_core::{PersonRequest, TransactionLog};
use bully_prompts::{search_prompt, stamp_request_time, system_prompt, user_prompt};
use bully_service::{CritiqueProvider, ResearchProvider, ServiceError};
use bully_store::{StoreError, TransactionSink};
use chrono::{Local, Utc};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("research via {provider} failed: {source}")]
    Research {
        provider: String,
        #[source]
        source: ServiceError,
    },

    #[error("critique via {provider} failed: {source}")]
    Critique {
        provider: String,
        #[source]
        source: ServiceError,
    },

    #[error("recording transaction failed: {0}")]
    Log(#[from] StoreError),
}

impl PipelineError {
    /// Caller-facing summary. Never includes upstream bodies or paths.
    pub fn public_message(&self) -> &'static str {
        match self {
            PipelineError::Research { .. } => "research service failed",
            PipelineError::Critique { .. } => "critique service failed",
            PipelineError::Log(_) => "could not record the evaluation",
        }
    }
}

/// Runs one validation end to end: research, critique, then log.
///
/// Nothing is written unless both upstream calls succeed.
pub struct Pipeline {
    research: Arc<dyn ResearchProvider>,
    critique: Arc<dyn CritiqueProvider>,
    sink: Arc<dyn TransactionSink>,
    critique_model: String,
}

impl Pipeline {
    pub fn new(
        research: Arc<dyn ResearchProvider>,
        critique: Arc<dyn CritiqueProvider>,
        sink: Arc<dyn TransactionSink>,
        critique_model: impl Into<String>,
    ) -> Self {
        Self {
            research,
            critique,
            sink,
            critique_model: critique_model.into(),
        }
    }

    /// Stage one alone: build the search prompt and return the research text.
    pub async fn research(&self, person: &PersonRequest) -> Result<String, PipelineError> {
        info!(provider = self.research.name(), "starting research on person's background");
        let prompt = search_prompt(person);
        let research = self
            .research
            .research(&prompt)
            .await
            .map_err(|source| PipelineError::Research {
                provider: self.research.name().to_string(),
                source,
            })?;
        info!(chars = research.len(), "research completed");
        Ok(research)
    }

    pub async fn run(&self, person: PersonRequest) -> Result<TransactionLog, PipelineError> {
        info!(
            name = %person.name,
            company = ?person.company,
            github = ?person.github_username,
            "received startup validation request"
        );
        info!(idea = %person.startup_idea, "startup idea");

        let research = self.research(&person).await?;

        let system = system_prompt(&research);
        info!(preview = %preview(&system, 200), "system prompt prepared");
        let user = user_prompt(&person);
        info!(prompt = %user, "user prompt prepared");

        info!(
            provider = self.critique.name(),
            model = %self.critique_model,
            "requesting critique"
        );
        let stamped = stamp_request_time(&user, Utc::now());
        let feedback = self
            .critique
            .critique(&self.critique_model, Some(&system), &stamped)
            .await
            .map_err(|source| PipelineError::Critique {
                provider: self.critique.name().to_string(),
                source,
            })?;
        info!(
            chars = feedback.len(),
            preview = %preview(&feedback, 100),
            "critique received"
        );

        let log = TransactionLog::new(Local::now(), person, research, feedback);
        let path = self.sink.record(&log).await?;
        info!(path = %path.display(), "logged request and response");
        Ok(log)
    }
}

/// First `max_chars` characters, never splitting a code point.
fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
