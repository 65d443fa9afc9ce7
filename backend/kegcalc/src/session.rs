//! Calculation session: the flow behind one "Generate Analysis" press.
//!
//! 1. Claim the single busy slot (a second press while an insight is
//!    pending is rejected with [`AppError::Busy`]).
//! 2. Validate and compute.
//! 3. Record the result in the history.
//! 4. Wait, bounded by the configured timeout, for the insight. Failure,
//!    timeout or shutdown cancellation all resolve to [`FALLBACK_INSIGHT`].
//!
//! The history is recorded before the insight is requested, so nothing the
//! provider does can change or remove the recorded entry.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use keg_metrics::{compute_from_input, CalculationResult, History, HistoryEntry, KegType};
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::errors::{AppError, InsightError, Result};
use crate::insight::{InsightProvider, FALLBACK_INSIGHT};

/// Where the displayed insight text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSource {
    Provider,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub text: String,
    pub source: InsightSource,
}

impl Insight {
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_INSIGHT.to_string(),
            source: InsightSource::Fallback,
        }
    }
}

/// A recorded calculation plus the commentary resolved for it.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationOutcome {
    pub entry_id: u64,
    pub result: CalculationResult,
    pub insight: Insight,
}

pub struct CalculationSession {
    history: Mutex<History>,
    busy: Semaphore,
    provider: Arc<dyn InsightProvider>,
    insight_timeout: Duration,
    shutdown: CancellationToken,
}

impl CalculationSession {
    pub fn new(
        provider: Arc<dyn InsightProvider>,
        insight_timeout: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            history: Mutex::new(History::new()),
            busy: Semaphore::new(1),
            provider,
            insight_timeout,
            shutdown,
        }
    }

    /// Run one calculation from raw form input.
    pub async fn calculate(
        &self,
        keg_type: KegType,
        available_product: &str,
        kegs_filled: &str,
    ) -> Result<CalculationOutcome> {
        let _permit = self.busy.try_acquire().map_err(|_| {
            warn!("Calculation rejected: another one is still pending");
            AppError::Busy
        })?;

        let result = compute_from_input(keg_type, available_product, kegs_filled)?;
        let entry_id = self.history().record(result.clone());
        info!(
            "Recorded calculation #{entry_id}: {} x {} -> {}L filled, {:.2}% waste",
            result.total_kegs(),
            result.keg_type(),
            result.filled_litres(),
            result.waste_percentage()
        );

        let insight = self.resolve_insight(&result).await;

        Ok(CalculationOutcome {
            entry_id,
            result,
            insight,
        })
    }

    /// Ask the provider for commentary, substituting the fallback on any failure.
    pub async fn resolve_insight(&self, result: &CalculationResult) -> Insight {
        match self.fetch_insight(result).await {
            Ok(text) => Insight {
                text,
                source: InsightSource::Provider,
            },
            Err(InsightError::Disabled) => {
                debug!("No insight provider configured");
                Insight::fallback()
            }
            Err(e) => {
                warn!("Insight unavailable, using fallback: {e}");
                Insight::fallback()
            }
        }
    }

    async fn fetch_insight(&self, result: &CalculationResult) -> std::result::Result<String, InsightError> {
        tokio::select! {
            _ = self.shutdown.cancelled() => Err(InsightError::Cancelled),
            outcome = tokio::time::timeout(self.insight_timeout, self.provider.request_insight(result)) => {
                match outcome {
                    Ok(reply) => reply,
                    Err(_) => Err(InsightError::Timeout(self.insight_timeout.as_secs())),
                }
            }
        }
    }

    pub fn latest_entry(&self) -> Option<HistoryEntry> {
        self.history().entries().next().cloned()
    }

    /// Newest-first snapshot of the retained entries.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.history().entries().cloned().collect()
    }

    fn history(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
