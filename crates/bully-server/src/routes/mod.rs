pub mod health;
pub mod pages;
pub mod validate;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::pipeline::Pipeline;

pub struct InnerAppState {
    pub pipeline: Pipeline,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(pages::routes())
        .merge(validate::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
