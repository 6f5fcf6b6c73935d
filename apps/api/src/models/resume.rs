use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub original_text: String,
    /// Empty until the resume has been optimized against a job description.
    pub optimized_text: String,
    pub file_name: String,
    pub upload_date: DateTime<Utc>,
    pub ats_score: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewResume {
    #[serde(default)]
    pub original_text: String,
    #[serde(default)]
    pub file_name: String,
}

/// Partial update; `None` leaves the field untouched. The id is never patchable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumePatch {
    pub original_text: Option<String>,
    pub optimized_text: Option<String>,
    pub file_name: Option<String>,
    pub ats_score: Option<i32>,
}

impl ResumeRecord {
    pub fn new(new: NewResume) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_text: new.original_text,
            optimized_text: String::new(),
            file_name: new.file_name,
            upload_date: Utc::now(),
            ats_score: 0,
        }
    }

    pub fn apply(&mut self, patch: ResumePatch) {
        if let Some(text) = patch.original_text {
            self.original_text = text;
        }
        if let Some(text) = patch.optimized_text {
            self.optimized_text = text;
        }
        if let Some(name) = patch.file_name {
            self.file_name = name;
        }
        if let Some(score) = patch.ats_score {
            self.ats_score = score;
        }
    }
}
