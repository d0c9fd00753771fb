use std::path::PathBuf;

use crate::errors::AppError;

const DEFAULT_MODEL: &str = "deepseek/deepseek-r1:free";
const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_RESUME_PATH: &str = "data/resume.json";
const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";
const DEFAULT_PORT: u16 = 8000;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Settings {
    pub openrouter_api_key: String,
    pub openrouter_model: String,
    pub openrouter_base_url: String,
    pub resume_path: PathBuf,
    pub allowed_origins: Vec<String>,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let openrouter_api_key = get("OPENROUTER_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AppError::Config {
                message: "OPENROUTER_API_KEY is not set (copy .env.example to .env)".to_string(),
            })?;

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| AppError::Config {
                message: format!("PORT must be a number, got '{raw}'"),
            })?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = get("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            openrouter_api_key,
            openrouter_model: get("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openrouter_base_url: get("OPENROUTER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            resume_path: get("RESUME_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_RESUME_PATH)),
            allowed_origins,
            port,
        })
    }
}
