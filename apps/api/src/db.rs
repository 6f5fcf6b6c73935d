use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use tracing::info;

const SCHEMA: &str = include_str!("../migrations/0001_init.sql");

/// Opens a Postgres pool and makes sure the resume/job-description tables exist.
pub async fn connect(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
        .context("Failed to connect to DATABASE_URL")?;

    // Idempotent: every statement is CREATE ... IF NOT EXISTS.
    pool.execute(SCHEMA)
        .await
        .context("Failed to apply schema")?;

    info!("PostgreSQL ready");
    Ok(pool)
}
