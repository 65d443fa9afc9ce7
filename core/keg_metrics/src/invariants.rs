#![allow(dead_code)]

use crate::history::{History, HISTORY_CAPACITY};
use crate::types::CalculationResult;

/// Yield is exactly keg volume times keg count.
pub fn assert_filled_litres(result: &CalculationResult) {
    let expected = f64::from(result.keg_type().volume_litres()) * f64::from(result.total_kegs());
    assert_eq!(
        result.filled_litres(),
        expected,
        "filled litres {} != {} x {}",
        result.filled_litres(),
        result.keg_type().volume_litres(),
        result.total_kegs()
    );
}

/// Full pallets and the partial pallet add back up to the keg count.
pub fn assert_pallet_decomposition(result: &CalculationResult) {
    let per_pallet = result.keg_type().per_pallet();
    assert!(
        result.remaining_kegs() < per_pallet,
        "remaining kegs {} do not fit on a partial pallet of {}",
        result.remaining_kegs(),
        per_pallet
    );
    assert_eq!(
        result.full_pallets() * per_pallet + result.remaining_kegs(),
        result.total_kegs(),
        "pallet decomposition broken: {} x {} + {} != {}",
        result.full_pallets(),
        per_pallet,
        result.remaining_kegs(),
        result.total_kegs()
    );
}

/// Waste and its percentage follow from the available product.
pub fn assert_waste(result: &CalculationResult) {
    let waste = result.available_product() - result.filled_litres();
    assert_eq!(result.waste_litres(), waste);
    assert_eq!(
        result.waste_percentage(),
        waste / result.available_product() * 100.0
    );
}

pub fn assert_result_consistent(result: &CalculationResult) {
    assert_filled_litres(result);
    assert_pallet_decomposition(result);
    assert_waste(result);
}

/// Length is `min(capacity, recorded)` and ids strictly decrease from head to tail.
pub fn assert_history_bounded(history: &History, recorded: usize) {
    assert_eq!(history.len(), recorded.min(HISTORY_CAPACITY));
    let ids: Vec<u64> = history.entries().map(|e| e.id).collect();
    for pair in ids.windows(2) {
        assert!(
            pair[0] > pair[1],
            "history not newest-first: id {} before {}",
            pair[0],
            pair[1]
        );
    }
}
