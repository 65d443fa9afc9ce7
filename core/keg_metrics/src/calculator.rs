//! # Calculator
//!
//! Validates the two user-entered figures and derives yield, waste and
//! pallet logistics from them. Everything here is pure; recording a result
//! is left to the caller.
//!
//! Overfilling (more litres in kegs than the stated available product) is
//! accepted and shows up as negative waste. It is never clamped.

use chrono::{DateTime, Utc};

use crate::errors::{Field, Result, ValidationError};
use crate::keg::KegType;
use crate::types::CalculationResult;

/// Compute a [`CalculationResult`] stamped with the current time.
///
/// Fails when `available_product` is not a finite number above zero or when
/// `total_kegs` is negative.
pub fn compute(
    keg_type: KegType,
    available_product: f64,
    total_kegs: i64,
) -> Result<CalculationResult> {
    compute_at(keg_type, available_product, total_kegs, Utc::now())
}

/// Same as [`compute`] with an explicit creation instant.
pub fn compute_at(
    keg_type: KegType,
    available_product: f64,
    total_kegs: i64,
    timestamp: DateTime<Utc>,
) -> Result<CalculationResult> {
    let available_product = check_available_product(available_product)?;
    let total_kegs = check_kegs_filled(total_kegs)?;

    let spec = keg_type.spec();
    let filled_litres = f64::from(spec.volume_litres) * f64::from(total_kegs);
    let waste_litres = available_product - filled_litres;
    let waste_percentage = (waste_litres / available_product) * 100.0;

    Ok(CalculationResult {
        keg_type,
        available_product,
        total_kegs,
        filled_litres,
        waste_litres,
        waste_percentage,
        full_pallets: total_kegs / spec.per_pallet,
        remaining_kegs: total_kegs % spec.per_pallet,
        timestamp,
    })
}

/// Parse raw form input and compute.
///
/// Both strings are trimmed; empty input is reported as missing.
pub fn compute_from_input(
    keg_type: KegType,
    available_product: &str,
    kegs_filled: &str,
) -> Result<CalculationResult> {
    let available_product = parse_available_product(available_product)?;
    let kegs_filled = parse_kegs_filled(kegs_filled)?;
    compute(keg_type, available_product, kegs_filled)
}

/// Parse litres of available product. Bounds are checked by [`compute`].
pub fn parse_available_product(raw: &str) -> Result<f64> {
    let text = non_empty(raw, Field::AvailableProduct)?;
    let value: f64 = text.parse().map_err(|_| ValidationError::NotANumber {
        field: Field::AvailableProduct,
        value: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ValidationError::NotFinite(Field::AvailableProduct));
    }
    Ok(value)
}

/// Parse a keg count. Only whole numbers are accepted.
pub fn parse_kegs_filled(raw: &str) -> Result<i64> {
    let text = non_empty(raw, Field::KegsFilled)?;
    text.parse().map_err(|_| ValidationError::NotANumber {
        field: Field::KegsFilled,
        value: text.to_string(),
    })
}

fn non_empty(raw: &str, field: Field) -> Result<&str> {
    let text = raw.trim();
    if text.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(text)
    }
}

fn check_available_product(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite(Field::AvailableProduct));
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveProduct(value));
    }
    Ok(value)
}

fn check_kegs_filled(value: i64) -> Result<u32> {
    if value < 0 {
        return Err(ValidationError::NegativeKegCount(value));
    }
    u32::try_from(value).map_err(|_| ValidationError::KegCountTooLarge(value))
}
