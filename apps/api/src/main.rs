mod config;
mod db;
mod errors;
mod job_descriptions;
mod models;
mod optimization;
mod resumes;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::optimization::defaults::JOB_POSTING_VOCABULARY;
use crate::optimization::engine::Optimizer;
use crate::optimization::profile::TuningProfile;
use crate::optimization::vocabulary::Vocabulary;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{InMemoryStore, PgStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tuner API v{}", env!("CARGO_PKG_VERSION"));

    // Tuning profile: built-in tables unless TUNING_PROFILE_PATH points elsewhere
    let optimizer = match &config.tuning_profile_path {
        Some(path) => {
            info!("Loading tuning profile from {}", path.display());
            Optimizer::from_profile(TuningProfile::load(path)?)?
        }
        None => Optimizer::default_profile()?,
    };
    info!(
        "Optimizer ready ({} vocabulary terms)",
        optimizer.vocabulary().len()
    );

    let state = match &config.database_url {
        Some(url) => {
            let store = Arc::new(PgStore::new(db::connect(url).await?));
            build_state(config.clone(), optimizer, store.clone(), store)
        }
        None => {
            info!("DATABASE_URL not set; using in-memory storage");
            let store = Arc::new(InMemoryStore::new());
            build_state(config.clone(), optimizer, store.clone(), store)
        }
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_state(
    config: Config,
    optimizer: Optimizer,
    resumes: Arc<dyn storage::ResumeRepository>,
    job_descriptions: Arc<dyn storage::JobDescriptionRepository>,
) -> AppState {
    AppState {
        config,
        optimizer: Arc::new(optimizer),
        job_vocabulary: Arc::new(Vocabulary::from_static(JOB_POSTING_VOCABULARY)),
        resumes,
        job_descriptions,
    }
}
