use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::http::post_json;
use crate::{CritiqueProvider, ServiceError};

pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "huihui_ai/qwen2.5-1m-abliterated:14b";

#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub host: String,
    /// Sent as `options.temperature` when set; the server default applies otherwise.
    pub temperature: Option<f32>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_OLLAMA_HOST.to_string(),
            temperature: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<ChatOptions>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatOptions {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Critique client for an Ollama server's `/api/chat`.
pub struct OllamaCritique {
    client: Client,
    config: OllamaConfig,
}

impl OllamaCritique {
    pub fn new(config: &OllamaConfig) -> Self {
        Self {
            client: Client::new(),
            config: OllamaConfig {
                host: config.host.trim_end_matches('/').to_string(),
                temperature: config.temperature,
            },
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/chat", self.config.host)
    }
}

fn build_messages<'a>(system_prompt: Option<&'a str>, user_prompt: &'a str) -> Vec<ChatMessage<'a>> {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = system_prompt.filter(|s| !s.is_empty()) {
        messages.push(ChatMessage {
            role: "system",
            content: system,
        });
    }
    messages.push(ChatMessage {
        role: "user",
        content: user_prompt,
    });
    messages
}

#[async_trait]
impl CritiqueProvider for OllamaCritique {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn critique(
        &self,
        model: &str,
        system_prompt: Option<&str>,
        user_prompt: &str,
    ) -> Result<String, ServiceError> {
        let request = ChatRequest {
            model,
            messages: build_messages(system_prompt, user_prompt),
            stream: false,
            options: self
                .config
                .temperature
                .map(|temperature| ChatOptions { temperature }),
        };

        debug!(model, host = %self.config.host, "ollama: chat");
        let response: ChatResponse = post_json(&self.client, &self.endpoint(), &[], &request).await?;

        let content = response
            .message
            .and_then(|m| m.content)
            .ok_or_else(|| ServiceError::Malformed("ollama response missing message.content".into()))?;
        info!(model, chars = content.len(), "ollama: critique received");
        Ok(content)
    }
}
