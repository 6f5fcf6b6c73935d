//! Axum route handlers for the stateless optimization API.

use std::time::Duration;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::optimization::engine::OptimizationResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractKeywordsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractKeywordsResponse {
    pub keywords: Vec<String>,
}

/// Sleeps for the configured artificial processing delay, if any.
pub async fn simulate_latency(state: &AppState) {
    if state.config.optimize_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.optimize_delay_ms)).await;
    }
}

/// POST /api/v1/optimize
///
/// Scores raw resume text against a job description and returns the tuned text,
/// keyword breakdown and suggestions. Nothing is persisted.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizationResult>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    simulate_latency(&state).await;

    let result = state
        .optimizer
        .optimize(&request.resume_text, &request.job_description);

    Ok(Json(result))
}

/// GET /api/v1/keywords
///
/// Lists the recognized vocabulary in matching order.
pub async fn handle_vocabulary(State(state): State<AppState>) -> Json<ExtractKeywordsResponse> {
    Json(ExtractKeywordsResponse {
        keywords: state.optimizer.vocabulary().terms().to_vec(),
    })
}

/// POST /api/v1/keywords/extract
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    Json(request): Json<ExtractKeywordsRequest>,
) -> Json<ExtractKeywordsResponse> {
    Json(ExtractKeywordsResponse {
        keywords: state.optimizer.extract_keywords(&request.text),
    })
}
