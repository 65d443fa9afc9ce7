//! Insight provider: asks a generative text API for a short efficiency
//! assessment of a calculation.
//!
//! ## Behaviour
//!
//! * One attempt per calculation. There is no retry or back-off; any failure
//!   is reported as an [`InsightError`] and the session falls back to
//!   [`FALLBACK_INSIGHT`].
//! * The production provider is [`GeminiProvider`], speaking the Gemini
//!   `generateContent` REST endpoint.

use async_trait::async_trait;
use keg_metrics::CalculationResult;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::Config;
use crate::errors::InsightError;

/// Shown whenever no insight could be produced.
pub const FALLBACK_INSIGHT: &str = "Analysis unavailable at this moment.";

/// Source of natural-language commentary on a calculation.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn request_insight(&self, result: &CalculationResult) -> Result<String, InsightError>;
}

/// Build the prompt sent to the text model.
pub fn build_prompt(result: &CalculationResult) -> String {
    format!(
        "Analyze this brewery production run:\n\
         - Keg Type: {}\n\
         - Available Product: {}L\n\
         - Kegs Filled: {}\n\
         - Total Litres Filled: {}L\n\
         - Waste: {}L ({:.2}%)\n\
         \n\
         Provide a very brief (2 sentence) professional assessment of efficiency.",
        result.keg_type(),
        result.available_product(),
        result.total_kegs(),
        result.filled_litres(),
        result.waste_litres(),
        result.waste_percentage(),
    )
}

// ─────────────────────────────────────────────────────────
// Gemini response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, trimmed.
    pub fn into_text(self) -> Result<String, InsightError> {
        if let Some(err) = self.error {
            return Err(InsightError::Api {
                code: err.code,
                message: err.message,
            });
        }

        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            Err(InsightError::EmptyResponse)
        } else {
            Ok(text.to_string())
        }
    }
}

// ─────────────────────────────────────────────────────────
// Gemini provider
// ─────────────────────────────────────────────────────────

pub struct GeminiProvider {
    client: Client,
    api_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiProvider {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.gemini_api_url.clone(),
            model: config.gemini_model.clone(),
            api_key: config.gemini_api_key.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }
}

fn build_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ],
        "generationConfig": {
            "thinkingConfig": { "thinkingBudget": 0 }
        }
    })
}

#[async_trait]
impl InsightProvider for GeminiProvider {
    async fn request_insight(&self, result: &CalculationResult) -> Result<String, InsightError> {
        let api_key = self.api_key.as_deref().ok_or(InsightError::Disabled)?;

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&build_body(&build_prompt(result)))
            .send()
            .await?;

        let status = resp.status();
        let body: GenerateContentResponse = resp.json().await?;
        if !status.is_success() && body.error.is_none() {
            return Err(InsightError::Api {
                code: i64::from(status.as_u16()),
                message: status.to_string(),
            });
        }

        let text = body.into_text()?;
        debug!("Received insight ({} chars) from {}", text.len(), self.model);
        Ok(text)
    }
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
