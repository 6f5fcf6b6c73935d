use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job_description::{JobDescriptionPatch, JobDescriptionRecord};
use crate::models::resume::{NewResume, ResumePatch, ResumeRecord};
use crate::storage::{
    job_description_not_found, resume_not_found, JobDescriptionRepository, ResumeRepository,
};

/// Process-local store. Records are kept in insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    resumes: RwLock<Vec<ResumeRecord>>,
    job_descriptions: RwLock<Vec<JobDescriptionRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<ResumeRecord>, AppError> {
        Ok(self.resumes.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        Ok(self.resumes.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, new: NewResume) -> Result<ResumeRecord, AppError> {
        let record = ResumeRecord::new(new);
        self.resumes.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, patch: ResumePatch) -> Result<ResumeRecord, AppError> {
        let mut resumes = self.resumes.write().await;
        let record = resumes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| resume_not_found(id))?;
        record.apply(patch);
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut resumes = self.resumes.write().await;
        let index = resumes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| resume_not_found(id))?;
        resumes.remove(index);
        Ok(())
    }
}

#[async_trait]
impl JobDescriptionRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<JobDescriptionRecord>, AppError> {
        Ok(self.job_descriptions.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<JobDescriptionRecord>, AppError> {
        Ok(self
            .job_descriptions
            .read()
            .await
            .iter()
            .find(|j| j.id == id)
            .cloned())
    }

    async fn create(&self, record: JobDescriptionRecord) -> Result<JobDescriptionRecord, AppError> {
        self.job_descriptions.write().await.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: JobDescriptionPatch,
    ) -> Result<JobDescriptionRecord, AppError> {
        let mut jds = self.job_descriptions.write().await;
        let record = jds
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| job_description_not_found(id))?;
        record.apply(patch);
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut jds = self.job_descriptions.write().await;
        let index = jds
            .iter()
            .position(|j| j.id == id)
            .ok_or_else(|| job_description_not_found(id))?;
        jds.remove(index);
        Ok(())
    }
}
