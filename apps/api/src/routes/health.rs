use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and the size of the active vocabulary.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "tuner",
        "vocabulary_size": state.optimizer.vocabulary().len(),
        "storage": if state.config.database_url.is_some() { "postgres" } else { "memory" },
    }))
}
