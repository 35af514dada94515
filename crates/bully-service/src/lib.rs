mod gemini;
mod http;
pub mod mock;
mod ollama;
mod traits;

pub use gemini::{GeminiConfig, GeminiResearch, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use ollama::{OllamaConfig, OllamaCritique, DEFAULT_OLLAMA_HOST, DEFAULT_OLLAMA_MODEL};
pub use traits::{CritiqueProvider, ResearchProvider, ServiceError};
