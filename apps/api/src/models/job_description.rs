use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobDescriptionRecord {
    pub id: Uuid,
    pub text: String,
    pub keywords: Vec<String>,
    pub required_skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial update. Handlers fill `keywords`/`required_skills` whenever `text` changes.
#[derive(Debug, Clone, Default)]
pub struct JobDescriptionPatch {
    pub text: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub required_skills: Option<Vec<String>>,
}

impl JobDescriptionRecord {
    pub fn new(text: String, keywords: Vec<String>, required_skills: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            keywords,
            required_skills,
            created_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, patch: JobDescriptionPatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(keywords) = patch.keywords {
            self.keywords = keywords;
        }
        if let Some(skills) = patch.required_skills {
            self.required_skills = skills;
        }
    }
}
