use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use bully_service::{CritiqueProvider, ResearchProvider};
use bully_store::LocalLogStore;
use tokio::net::TcpListener;

use crate::pipeline::Pipeline;
use crate::routes::{build_router, InnerAppState};

/// Build a router over the given providers, logging into `logs_dir`.
pub fn test_router(
    research: Arc<dyn ResearchProvider>,
    critique: Arc<dyn CritiqueProvider>,
    logs_dir: &Path,
) -> Router {
    let pipeline = Pipeline::new(
        research,
        critique,
        Arc::new(LocalLogStore::new(logs_dir)),
        "test-critic",
    );
    build_router(Arc::new(InnerAppState { pipeline }))
}

/// A running test server with base_url, its log directory, and background task handle.
pub struct TestServer {
    pub base_url: String,
    pub logs_dir: PathBuf,
    _tmp: tempfile::TempDir,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn an axum test server on a random port with a fresh temp log directory.
pub async fn spawn_test_server(
    research: Arc<dyn ResearchProvider>,
    critique: Arc<dyn CritiqueProvider>,
) -> TestServer {
    let tmp = tempfile::tempdir().unwrap();
    let logs_dir = tmp.path().join("logs");
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let app = test_router(research, critique, &logs_dir);
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        logs_dir,
        _tmp: tmp,
        _handle: handle,
    }
}
