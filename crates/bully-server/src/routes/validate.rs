use axum::{extract::State, http::StatusCode, routing::post, Form, Json, Router};
use bully_core::{BullyError, PersonRequest, SubmitPerson, ValidationResponse};
use serde_json::{json, Value};
use tracing::error;
use uuid::Uuid;

use super::AppState;
use crate::pipeline::PipelineError;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/validate", post(validate_startup))
}

async fn validate_startup(
    State(state): State<AppState>,
    Form(form): Form<SubmitPerson>,
) -> Result<Json<ValidationResponse>, (StatusCode, Json<Value>)> {
    let person = PersonRequest::try_from(form).map_err(invalid_input)?;
    state
        .pipeline
        .run(person)
        .await
        .map(|log| Json(ValidationResponse::from(&log)))
        .map_err(to_error)
}

fn invalid_input(e: BullyError) -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "detail": e.to_string() })),
    )
}

/// Log the full error chain under a fresh id and hand the caller only the
/// stage that failed plus that id.
fn to_error(e: PipelineError) -> (StatusCode, Json<Value>) {
    let error_id = Uuid::new_v4();
    error!(%error_id, error = %e, "validate_startup failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "detail": e.public_message(),
            "error_id": error_id.to_string(),
        })),
    )
}
