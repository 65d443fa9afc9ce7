//! # Keg Metrics
//!
//! Yield, waste and pallet logistics for a keg-filling run, plus the bounded
//! history the service keeps of recent runs.
//!
//! | Concern      | Entry Point(s)                                        |
//! |--------------|-------------------------------------------------------|
//! | Keg table    | [`KegType`], [`KegType::spec`]                        |
//! | Validation   | [`parse_available_product`], [`parse_kegs_filled`]   |
//! | Calculation  | [`compute`], [`compute_at`], [`compute_from_input`]   |
//! | History      | [`History::record`], [`History::latest`], [`History::all`] |
//!
//! ## Architecture
//!
//! Nothing in this crate performs I/O or holds shared state. The backend
//! owns a [`History`] behind its own lock and decides when to record.

pub mod calculator;
pub mod errors;
pub mod history;
pub mod keg;
pub mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_calculator;

pub use calculator::{
    compute, compute_at, compute_from_input, parse_available_product, parse_kegs_filled,
};
pub use errors::{Field, ValidationError};
pub use history::{History, HistoryEntry, HISTORY_CAPACITY};
pub use keg::{KegSpec, KegType};
pub use types::{CalculationResult, HIGH_WASTE_THRESHOLD_PERCENT};
