use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; `DATABASE_URL` switches storage to Postgres.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub tuning_profile_path: Option<PathBuf>,
    pub optimize_delay_ms: u64,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            tuning_profile_path: None,
            optimize_delay_ms: 0,
            max_upload_bytes: 10 * 1024 * 1024,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            tuning_profile_path: optional_env("TUNING_PROFILE_PATH").map(PathBuf::from),
            optimize_delay_ms: parse_env("OPTIMIZE_DELAY_MS", defaults.optimize_delay_ms)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
