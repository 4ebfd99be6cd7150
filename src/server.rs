//! HTTP surface: webhook intake + liveness route.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde_json::Value;

use crate::pipeline::DocumentPipeline;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<DocumentPipeline>,
}

/// Build the Axum router.
pub fn app_routes(pipeline: Arc<DocumentPipeline>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/cliq/webhook", post(webhook))
        .with_state(AppState { pipeline })
}

async fn index() -> &'static str {
    "Cliq Smart Bot — running. Webhook: POST /cliq/webhook"
}

/// Webhook intake.
///
/// The acknowledgment is returned immediately; the pipeline runs in a
/// detached task with no way back to the original caller. Its outcome
/// is observable only through logs and the channel publish.
async fn webhook(State(state): State<AppState>, Json(event): Json<Value>) -> Json<Value> {
    let pipeline = Arc::clone(&state.pipeline);
    tokio::spawn(async move {
        pipeline.process(event).await;
    });

    Json(serde_json::json!({ "text": "Webhook received" }))
}
