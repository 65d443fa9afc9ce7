//! Axum REST API handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use keg_metrics::{CalculationResult, Field, HistoryEntry, KegSpec, KegType, ValidationError};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};
use crate::session::{CalculationSession, Insight};

#[derive(Clone)]
pub struct ApiState {
    pub session: Arc<CalculationSession>,
}

pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/keg-types", get(keg_types))
        .route("/calculations", post(create_calculation))
        .route("/history", get(get_history))
        .route("/history/latest", get(get_latest))
        .with_state(state)
}

// ─────────────────────────────────────────────────────────
// Request / response shapes
// ─────────────────────────────────────────────────────────

/// A form field that may arrive as a JSON number or as the raw text typed
/// into the input. Whole-valued floats such as `20.0` read as `"20"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(serde_json::Number),
    Text(String),
}

impl NumericInput {
    fn as_text(&self) -> String {
        match self {
            Self::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => i.to_string(),
                (None, Some(f)) => f.to_string(),
                (None, None) => n.to_string(),
            },
            Self::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    pub keg_type: Option<String>,
    pub available_product: Option<NumericInput>,
    pub kegs_filled: Option<NumericInput>,
}

#[derive(Serialize)]
pub struct CalculationResponse {
    pub entry_id: u64,
    pub result: CalculationResult,
    pub efficiency_percentage: f64,
    pub high_waste: bool,
    pub insight: Insight,
}

#[derive(Serialize)]
pub struct KegTypeInfo {
    pub keg_type: KegType,
    #[serde(flatten)]
    pub spec: KegSpec,
}

#[derive(Serialize)]
pub struct KegTypesResponse {
    pub keg_types: Vec<KegTypeInfo>,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub count: usize,
    pub entries: Vec<HistoryEntry>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /keg-types`
pub async fn keg_types() -> impl IntoResponse {
    Json(KegTypesResponse {
        keg_types: KegType::ALL
            .into_iter()
            .map(|keg_type| KegTypeInfo {
                keg_type,
                spec: keg_type.spec(),
            })
            .collect(),
    })
}

/// `POST /calculations`
///
/// Validates the form, records the result and returns it with its insight.
pub async fn create_calculation(
    State(state): State<Arc<ApiState>>,
    payload: std::result::Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(req) = payload?;
    let keg_type: KegType = req
        .keg_type
        .as_deref()
        .ok_or(ValidationError::Missing(Field::KegType))?
        .parse()?;
    let available_product = req
        .available_product
        .as_ref()
        .map(NumericInput::as_text)
        .unwrap_or_default();
    let kegs_filled = req
        .kegs_filled
        .as_ref()
        .map(NumericInput::as_text)
        .unwrap_or_default();

    let outcome = state
        .session
        .calculate(keg_type, &available_product, &kegs_filled)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CalculationResponse {
            entry_id: outcome.entry_id,
            efficiency_percentage: outcome.result.efficiency_percentage(),
            high_waste: outcome.result.is_high_waste(),
            result: outcome.result,
            insight: outcome.insight,
        }),
    ))
}

/// `GET /history`
///
/// Retained calculations, newest first.
pub async fn get_history(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    let entries = state.session.entries();
    Json(HistoryResponse {
        count: entries.len(),
        entries,
    })
}

/// `GET /history/latest`
pub async fn get_latest(State(state): State<Arc<ApiState>>) -> Result<Json<HistoryEntry>> {
    state
        .session
        .latest_entry()
        .map(Json)
        .ok_or(AppError::EmptyHistory)
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
