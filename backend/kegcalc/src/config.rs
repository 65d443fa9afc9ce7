//! Application configuration loaded from environment variables.

use std::time::Duration;

use crate::errors::{AppError, Result};

const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
const MAX_INSIGHT_TIMEOUT_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the REST API server
    pub api_port: u16,
    /// Gemini API key; insights fall back to fixed text when unset
    pub gemini_api_key: Option<String>,
    /// Base URL of the Gemini REST API
    pub gemini_api_url: String,
    /// Model used for `generateContent`
    pub gemini_model: String,
    /// Upper bound on the wait for one insight, in seconds
    pub insight_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            api_port: var("API_PORT")
                .unwrap_or_else(|| "3001".to_string())
                .parse()
                .map_err(|_| AppError::Config("Invalid API_PORT".to_string()))?,
            gemini_api_key: var("GEMINI_API_KEY").or_else(|| var("API_KEY")),
            gemini_api_url: var("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            insight_timeout_secs: var("INSIGHT_TIMEOUT_SECS")
                .unwrap_or_else(|| "15".to_string())
                .parse()
                .ok()
                .filter(|secs| (1..=MAX_INSIGHT_TIMEOUT_SECS).contains(secs))
                .ok_or_else(|| AppError::Config("Invalid INSIGHT_TIMEOUT_SECS".to_string()))?,
        })
    }

    pub fn insight_timeout(&self) -> Duration {
        Duration::from_secs(self.insight_timeout_secs)
    }
}
