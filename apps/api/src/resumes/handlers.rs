//! Axum route handlers for stored resumes: CRUD, upload, optimize, export.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewResume, ResumePatch, ResumeRecord};
use crate::optimization::engine::OptimizationResult;
use crate::optimization::handlers::simulate_latency;
use crate::resumes::extract::{check_size, detect_kind, export_file_name, extract_text};
use crate::state::AppState;
use crate::storage::{job_description_not_found, resume_not_found};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Either inline text or a stored job description; inline text wins when both are given.
#[derive(Debug, Deserialize)]
pub struct OptimizeResumeRequest {
    pub job_description: Option<String>,
    pub job_description_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResumeResponse {
    pub resume: ResumeRecord,
    pub result: OptimizationResult,
}

// ────────────────────────────────────────────────────────────────────────────
// CRUD
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resumes
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeRecord>>, AppError> {
    Ok(Json(state.resumes.list().await?))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    Ok(Json(load_resume(&state, id).await?))
}

/// POST /api/v1/resumes
pub async fn handle_create(
    State(state): State<AppState>,
    Json(request): Json<NewResume>,
) -> Result<(StatusCode, Json<ResumeRecord>), AppError> {
    let record = state.resumes.create(request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PATCH /api/v1/resumes/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ResumePatch>,
) -> Result<Json<ResumeRecord>, AppError> {
    if let Some(score) = patch.ats_score {
        if !(0..=100).contains(&score) {
            return Err(AppError::Validation(format!(
                "ats_score must be between 0 and 100, got {score}"
            )));
        }
    }
    Ok(Json(state.resumes.update(id, patch).await?))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.resumes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Upload / optimize / export
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/upload
///
/// Multipart form with a `file` field (PDF or plain text). Extracts the text and
/// stores it as a new resume.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeRecord>), AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().map(str::to_string);
        let kind = detect_kind(&file_name, content_type.as_deref())?;

        let bytes = field.bytes().await.map_err(multipart_error)?;
        check_size(bytes.len(), state.config.max_upload_bytes)?;

        let original_text = tokio::task::spawn_blocking(move || extract_text(kind, &bytes))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

        let record = state
            .resumes
            .create(NewResume {
                original_text,
                file_name,
            })
            .await?;

        info!(id = %record.id, file = %record.file_name, ?kind, "Resume uploaded");
        return Ok((StatusCode::CREATED, Json(record)));
    }

    Err(AppError::Validation(
        "multipart form must contain a 'file' field".to_string(),
    ))
}

/// POST /api/v1/resumes/:id/optimize
///
/// Optimizes the stored original text and persists the tuned text and score.
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<OptimizeResumeRequest>,
) -> Result<Json<OptimizeResumeResponse>, AppError> {
    let resume = load_resume(&state, id).await?;
    let job_description = resolve_job_description(&state, request).await?;

    simulate_latency(&state).await;

    let result = state
        .optimizer
        .optimize(&resume.original_text, &job_description);
    let ats_score = i32::try_from(result.ats_score).map_err(|_| {
        AppError::Internal(anyhow::anyhow!("ats score {} out of range", result.ats_score))
    })?;

    let resume = state
        .resumes
        .update(
            id,
            ResumePatch {
                optimized_text: Some(result.optimized_text.clone()),
                ats_score: Some(ats_score),
                ..Default::default()
            },
        )
        .await?;

    Ok(Json(OptimizeResumeResponse { resume, result }))
}

/// GET /api/v1/resumes/:id/export
///
/// Downloads the optimized text as a plain-text attachment; falls back to the
/// original text when the resume has not been optimized yet.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let resume = load_resume(&state, id).await?;

    let body = if resume.optimized_text.is_empty() {
        warn!(id = %id, "Exporting resume that was never optimized");
        resume.original_text
    } else {
        resume.optimized_text
    };

    let file_name = export_file_name(Utc::now().timestamp_millis());
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn load_resume(state: &AppState, id: Uuid) -> Result<ResumeRecord, AppError> {
    state
        .resumes
        .get(id)
        .await?
        .ok_or_else(|| resume_not_found(id))
}

async fn resolve_job_description(
    state: &AppState,
    request: OptimizeResumeRequest,
) -> Result<String, AppError> {
    let text = match (request.job_description, request.job_description_id) {
        (Some(text), _) => text,
        (None, Some(jd_id)) => {
            state
                .job_descriptions
                .get(jd_id)
                .await?
                .ok_or_else(|| job_description_not_found(jd_id))?
                .text
        }
        (None, None) => String::new(),
    };

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "a non-empty job_description or a job_description_id is required".to_string(),
        ));
    }
    Ok(text)
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("invalid multipart body: {}", e.body_text()))
    }
}
