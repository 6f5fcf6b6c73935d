use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job_description::{JobDescriptionPatch, JobDescriptionRecord};
use crate::models::resume::{NewResume, ResumePatch, ResumeRecord};
use crate::storage::{
    job_description_not_found, resume_not_found, JobDescriptionRepository, ResumeRepository,
};

/// Postgres-backed store. Schema: `migrations/0001_init.sql`.
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResumeRepository for PgStore {
    async fn list(&self) -> Result<Vec<ResumeRecord>, AppError> {
        let rows = sqlx::query_as::<_, ResumeRecord>("SELECT * FROM resumes ORDER BY upload_date")
            .fetch_all(&self.db)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        let row = sqlx::query_as::<_, ResumeRecord>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;
        Ok(row)
    }

    async fn create(&self, new: NewResume) -> Result<ResumeRecord, AppError> {
        let record = ResumeRecord::new(new);
        let row = sqlx::query_as::<_, ResumeRecord>(
            r#"
            INSERT INTO resumes (id, original_text, optimized_text, file_name, upload_date, ats_score)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(&record.original_text)
        .bind(&record.optimized_text)
        .bind(&record.file_name)
        .bind(record.upload_date)
        .bind(record.ats_score)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, patch: ResumePatch) -> Result<ResumeRecord, AppError> {
        sqlx::query_as::<_, ResumeRecord>(
            r#"
            UPDATE resumes SET
                original_text  = COALESCE($2, original_text),
                optimized_text = COALESCE($3, optimized_text),
                file_name      = COALESCE($4, file_name),
                ats_score      = COALESCE($5, ats_score)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.original_text)
        .bind(patch.optimized_text)
        .bind(patch.file_name)
        .bind(patch.ats_score)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| resume_not_found(id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        if result.rows_affected() == 0 {
            return Err(resume_not_found(id));
        }
        Ok(())
    }
}

#[async_trait]
impl JobDescriptionRepository for PgStore {
    async fn list(&self) -> Result<Vec<JobDescriptionRecord>, AppError> {
        let rows = sqlx::query_as::<_, JobDescriptionRecord>(
            "SELECT * FROM job_descriptions ORDER BY created_at",
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: Uuid) -> Result<Option<JobDescriptionRecord>, AppError> {
        let row =
            sqlx::query_as::<_, JobDescriptionRecord>("SELECT * FROM job_descriptions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.db)
                .await?;
        Ok(row)
    }

    async fn create(&self, record: JobDescriptionRecord) -> Result<JobDescriptionRecord, AppError> {
        let row = sqlx::query_as::<_, JobDescriptionRecord>(
            r#"
            INSERT INTO job_descriptions (id, text, keywords, required_skills, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(&record.text)
        .bind(&record.keywords)
        .bind(&record.required_skills)
        .bind(record.created_at)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: JobDescriptionPatch,
    ) -> Result<JobDescriptionRecord, AppError> {
        sqlx::query_as::<_, JobDescriptionRecord>(
            r#"
            UPDATE job_descriptions SET
                text            = COALESCE($2, text),
                keywords        = COALESCE($3, keywords),
                required_skills = COALESCE($4, required_skills)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.text)
        .bind(patch.keywords)
        .bind(patch.required_skills)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| job_description_not_found(id))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM job_descriptions WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        if result.rows_affected() == 0 {
            return Err(job_description_not_found(id));
        }
        Ok(())
    }
}
