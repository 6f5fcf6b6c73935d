//! Storage: repository traits for resumes and job descriptions.
//!
//! Default backend: `InMemoryStore` (process-local, lost on restart).
//! With `DATABASE_URL` set: `PgStore` over sqlx.
//!
//! `AppState` holds each repository as `Arc<dyn ...>`, so handlers never see the backend.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job_description::{JobDescriptionPatch, JobDescriptionRecord};
use crate::models::resume::{NewResume, ResumePatch, ResumeRecord};

pub use memory::InMemoryStore;
pub use postgres::PgStore;

/// CRUD over stored resumes. `update`/`delete` of an unknown id is `AppError::NotFound`.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ResumeRecord>, AppError>;
    async fn get(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError>;
    async fn create(&self, new: NewResume) -> Result<ResumeRecord, AppError>;
    async fn update(&self, id: Uuid, patch: ResumePatch) -> Result<ResumeRecord, AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

/// CRUD over stored job descriptions. Same contract as `ResumeRepository`.
#[async_trait]
pub trait JobDescriptionRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<JobDescriptionRecord>, AppError>;
    async fn get(&self, id: Uuid) -> Result<Option<JobDescriptionRecord>, AppError>;
    async fn create(&self, record: JobDescriptionRecord) -> Result<JobDescriptionRecord, AppError>;
    async fn update(
        &self,
        id: Uuid,
        patch: JobDescriptionPatch,
    ) -> Result<JobDescriptionRecord, AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

pub(crate) fn resume_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Resume {id} not found"))
}

pub(crate) fn job_description_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Job description {id} not found"))
}
