//! # Types
//!
//! [`CalculationResult`] is the only record produced by the calculator. Its
//! fields are private: a result can only come out of
//! [`compute`](crate::calculator::compute), so the derived figures always
//! agree with the three inputs they were computed from.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::keg::KegType;

/// Waste above this percentage marks a run as high-waste.
pub const HIGH_WASTE_THRESHOLD_PERCENT: f64 = 5.0;

/// Outcome of one keg-filling calculation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculationResult {
    pub(crate) keg_type: KegType,
    pub(crate) available_product: f64,
    pub(crate) total_kegs: u32,
    pub(crate) filled_litres: f64,
    pub(crate) waste_litres: f64,
    pub(crate) waste_percentage: f64,
    pub(crate) full_pallets: u32,
    pub(crate) remaining_kegs: u32,
    pub(crate) timestamp: DateTime<Utc>,
}

impl CalculationResult {
    pub fn keg_type(&self) -> KegType {
        self.keg_type
    }

    /// Litres of product available before filling.
    pub fn available_product(&self) -> f64 {
        self.available_product
    }

    /// Kegs actually filled.
    pub fn total_kegs(&self) -> u32 {
        self.total_kegs
    }

    /// Yield: litres placed into kegs.
    pub fn filled_litres(&self) -> f64 {
        self.filled_litres
    }

    /// Negative when more was filled than the stated available product.
    pub fn waste_litres(&self) -> f64 {
        self.waste_litres
    }

    pub fn waste_percentage(&self) -> f64 {
        self.waste_percentage
    }

    pub fn full_pallets(&self) -> u32 {
        self.full_pallets
    }

    /// Kegs on the last, partial pallet.
    pub fn remaining_kegs(&self) -> u32 {
        self.remaining_kegs
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Share of the available product that ended up in kegs, in percent.
    pub fn efficiency_percentage(&self) -> f64 {
        100.0 - self.waste_percentage
    }

    pub fn is_high_waste(&self) -> bool {
        self.waste_percentage > HIGH_WASTE_THRESHOLD_PERCENT
    }
}
