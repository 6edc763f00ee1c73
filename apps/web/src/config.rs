use std::str::FromStr;

use anyhow::{Context, Result};

pub const DEFAULT_SCREENING_API_URL: &str = "https://jaswanthch-resume-screener.hf.space/screen/";

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed numbers abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub screening_api_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Per-file ceiling applied to every resume.
    pub max_resume_bytes: usize,
    /// Whole multipart body ceiling.
    pub max_request_bytes: usize,
    pub screening_timeout_secs: u64,
    pub result_store_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            screening_api_url: DEFAULT_SCREENING_API_URL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            max_resume_bytes: 5 * 1024 * 1024,
            max_request_bytes: 50 * 1024 * 1024,
            screening_timeout_secs: 120,
            result_store_capacity: 256,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            screening_api_url: std::env::var("SCREENING_API_URL")
                .unwrap_or(defaults.screening_api_url),
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_resume_bytes: parse_env("MAX_RESUME_BYTES", defaults.max_resume_bytes)?,
            max_request_bytes: parse_env("MAX_REQUEST_BYTES", defaults.max_request_bytes)?,
            screening_timeout_secs: parse_env(
                "SCREENING_TIMEOUT_SECS",
                defaults.screening_timeout_secs,
            )?,
            result_store_capacity: parse_env(
                "RESULT_STORE_CAPACITY",
                defaults.result_store_capacity,
            )?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
