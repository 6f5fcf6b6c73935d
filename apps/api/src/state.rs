use std::sync::Arc;

use crate::config::Config;
use crate::optimization::engine::Optimizer;
use crate::optimization::vocabulary::Vocabulary;
use crate::storage::{JobDescriptionRepository, ResumeRepository};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled tuning profile. Built once at startup.
    pub optimizer: Arc<Optimizer>,
    /// Vocabulary used to tag stored job descriptions.
    pub job_vocabulary: Arc<Vocabulary>,
    /// Pluggable storage. Default: InMemoryStore. Postgres when DATABASE_URL is set.
    pub resumes: Arc<dyn ResumeRepository>,
    pub job_descriptions: Arc<dyn JobDescriptionRepository>,
}
