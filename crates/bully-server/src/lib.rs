pub mod config;
pub mod pipeline;
mod routes;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;

use std::sync::Arc;

use anyhow::Result;
use bully_service::{GeminiResearch, OllamaCritique};
use bully_store::LocalLogStore;
use tokio::net::TcpListener;

use config::ServerConfig;
use pipeline::Pipeline;
use routes::InnerAppState;

/// Wire the real Gemini, Ollama, and local log store into a pipeline.
pub fn build_pipeline(config: &ServerConfig) -> Result<Pipeline> {
    let research = GeminiResearch::new(&config.gemini_config()?);
    let critique = OllamaCritique::new(&config.ollama_config());
    let sink = LocalLogStore::new(&config.logs_dir);
    Ok(Pipeline::new(
        Arc::new(research),
        Arc::new(critique),
        Arc::new(sink),
        config.ollama_model.clone(),
    ))
}

pub async fn serve(listener: TcpListener, pipeline: Pipeline) -> Result<()> {
    let state = Arc::new(InnerAppState { pipeline });
    let app = routes::build_router(state);
    axum::serve(listener, app).await?;
    Ok(())
}
