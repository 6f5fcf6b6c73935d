use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::job_descriptions::analyze;
use crate::models::job_description::{JobDescriptionPatch, JobDescriptionRecord};
use crate::state::AppState;
use crate::storage::job_description_not_found;

#[derive(Debug, Deserialize)]
pub struct CreateJobDescriptionRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateJobDescriptionRequest {
    pub text: Option<String>,
}

/// GET /api/v1/job-descriptions
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobDescriptionRecord>>, AppError> {
    Ok(Json(state.job_descriptions.list().await?))
}

/// GET /api/v1/job-descriptions/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobDescriptionRecord>, AppError> {
    let record = state
        .job_descriptions
        .get(id)
        .await?
        .ok_or_else(|| job_description_not_found(id))?;
    Ok(Json(record))
}

fn validate_text(text: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    Ok(())
}

/// POST /api/v1/job-descriptions
pub async fn handle_create(
    State(state): State<AppState>,
    Json(request): Json<CreateJobDescriptionRequest>,
) -> Result<(StatusCode, Json<JobDescriptionRecord>), AppError> {
    validate_text(&request.text)?;

    let analysis = analyze(&request.text, &state.job_vocabulary);
    let record = JobDescriptionRecord::new(request.text, analysis.keywords, analysis.required_skills);
    let record = state.job_descriptions.create(record).await?;

    info!(
        id = %record.id,
        keywords = record.keywords.len(),
        "Job description stored"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// PATCH /api/v1/job-descriptions/:id
///
/// New text re-derives keywords and required skills.
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateJobDescriptionRequest>,
) -> Result<Json<JobDescriptionRecord>, AppError> {
    let patch = match request.text {
        Some(text) => {
            validate_text(&text)?;
            let analysis = analyze(&text, &state.job_vocabulary);
            JobDescriptionPatch {
                text: Some(text),
                keywords: Some(analysis.keywords),
                required_skills: Some(analysis.required_skills),
            }
        }
        None => JobDescriptionPatch::default(),
    };

    Ok(Json(state.job_descriptions.update(id, patch).await?))
}

/// DELETE /api/v1/job-descriptions/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.job_descriptions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
