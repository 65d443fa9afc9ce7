use chrono::{TimeZone, Utc};

use crate::calculator::{compute, compute_at, compute_from_input};
use crate::errors::{Field, ValidationError};
use crate::invariants::assert_result_consistent;
use crate::keg::KegType;

#[test]
fn test_twenty_litre_run_under_capacity() {
    let result = compute(KegType::K20L, 500.0, 20).unwrap();

    assert_eq!(result.filled_litres(), 400.0);
    assert_eq!(result.waste_litres(), 100.0);
    assert_eq!(result.waste_percentage(), 20.0);
    assert_eq!(result.full_pallets(), 0);
    assert_eq!(result.remaining_kegs(), 20);
    assert!(result.is_high_waste());
    assert_eq!(result.efficiency_percentage(), 80.0);
    assert_result_consistent(&result);
}

#[test]
fn test_overfill_yields_negative_waste() {
    let result = compute(KegType::K30EE, 1000.0, 36).unwrap();

    assert_eq!(result.filled_litres(), 1080.0);
    assert_eq!(result.waste_litres(), -80.0);
    assert_eq!(result.waste_percentage(), -8.0);
    assert_eq!(result.full_pallets(), 2);
    assert_eq!(result.remaining_kegs(), 0);
    assert!(!result.is_high_waste());
    assert_eq!(result.efficiency_percentage(), 108.0);
    assert_result_consistent(&result);
}

#[test]
fn test_zero_kegs_is_all_waste() {
    let result = compute(KegType::Pet, 250.5, 0).unwrap();

    assert_eq!(result.filled_litres(), 0.0);
    assert_eq!(result.waste_litres(), 250.5);
    assert_eq!(result.waste_percentage(), 100.0);
    assert_eq!(result.full_pallets(), 0);
    assert_eq!(result.remaining_kegs(), 0);
}

#[test]
fn test_results_are_consistent_for_every_keg_type() {
    for keg in KegType::ALL {
        for kegs in [0_i64, 1, 15, 16, 17, 18, 23, 24, 25, 100, 1_000, 99_999] {
            for product in [0.5, 20.0, 333.3, 1_000.0, 48_000.0] {
                let result = compute(keg, product, kegs).unwrap();
                assert_eq!(result.keg_type(), keg);
                assert_eq!(i64::from(result.total_kegs()), kegs);
                assert_eq!(result.available_product(), product);
                assert_result_consistent(&result);
            }
        }
    }
}

#[test]
fn test_everything_but_timestamp_is_deterministic() {
    let first = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
    let a = compute_at(KegType::K30L, 777.0, 25, first).unwrap();
    let b = compute_at(KegType::K30L, 777.0, 25, second).unwrap();

    assert_ne!(a, b);
    assert_eq!(a.timestamp(), first);
    assert_eq!(b.timestamp(), second);
    assert_eq!(a.filled_litres(), b.filled_litres());
    assert_eq!(a.waste_percentage(), b.waste_percentage());
    assert_eq!(a.full_pallets(), b.full_pallets());
    assert_eq!(a.remaining_kegs(), b.remaining_kegs());
}

#[test]
fn test_rejects_out_of_bound_numbers() {
    assert_eq!(
        compute(KegType::K20L, 0.0, 10),
        Err(ValidationError::NonPositiveProduct(0.0))
    );
    assert_eq!(
        compute(KegType::K20L, -5.0, 10),
        Err(ValidationError::NonPositiveProduct(-5.0))
    );
    assert_eq!(
        compute(KegType::K20L, 500.0, -1),
        Err(ValidationError::NegativeKegCount(-1))
    );
    assert_eq!(
        compute(KegType::K20L, f64::NAN, 1),
        Err(ValidationError::NotFinite(Field::AvailableProduct))
    );
    assert_eq!(
        compute(KegType::K20L, f64::INFINITY, 1),
        Err(ValidationError::NotFinite(Field::AvailableProduct))
    );
    assert_eq!(
        compute(KegType::K20L, 10.0, i64::from(u32::MAX) + 1),
        Err(ValidationError::KegCountTooLarge(i64::from(u32::MAX) + 1))
    );
}

#[test]
fn test_from_input_parses_and_trims() {
    let result = compute_from_input(KegType::K20L, " 500 ", "20\n").unwrap();
    assert_eq!(result.filled_litres(), 400.0);

    let result = compute_from_input(KegType::K30L, "1e3", "+3").unwrap();
    assert_eq!(result.available_product(), 1000.0);
    assert_eq!(result.total_kegs(), 3);
}

#[test]
fn test_from_input_rejects_bad_text() {
    assert_eq!(
        compute_from_input(KegType::K20L, "", "5"),
        Err(ValidationError::Missing(Field::AvailableProduct))
    );
    assert_eq!(
        compute_from_input(KegType::K20L, "500", "   "),
        Err(ValidationError::Missing(Field::KegsFilled))
    );
    assert_eq!(
        compute_from_input(KegType::K20L, "lots", "5"),
        Err(ValidationError::NotANumber {
            field: Field::AvailableProduct,
            value: "lots".to_string(),
        })
    );
    assert_eq!(
        compute_from_input(KegType::K20L, "500", "twenty"),
        Err(ValidationError::NotANumber {
            field: Field::KegsFilled,
            value: "twenty".to_string(),
        })
    );
    assert_eq!(
        compute_from_input(KegType::K20L, "500", "12.5"),
        Err(ValidationError::NotANumber {
            field: Field::KegsFilled,
            value: "12.5".to_string(),
        })
    );
    assert_eq!(
        compute_from_input(KegType::K20L, "inf", "5"),
        Err(ValidationError::NotFinite(Field::AvailableProduct))
    );
    assert_eq!(
        compute_from_input(KegType::K20L, "0", "5"),
        Err(ValidationError::NonPositiveProduct(0.0))
    );
    assert_eq!(
        compute_from_input(KegType::K20L, "500", "-1"),
        Err(ValidationError::NegativeKegCount(-1))
    );
}

#[test]
fn test_validation_messages_name_the_field() {
    let err = compute_from_input(KegType::K20L, "500", "abc").unwrap_err();
    assert_eq!(err.to_string(), "kegs_filled is not a number: \"abc\"");

    let err = compute(KegType::K20L, -5.0, 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "available_product must be greater than 0 (got -5)"
    );
}
