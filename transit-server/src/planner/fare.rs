//! Bus fare estimation.

use crate::catalog::FareSchedule;
use crate::domain::{FareTier, PassengerCategory, Pence};

/// Estimate the fare for riding between two positions on one route.
///
/// The number of stops travelled stands in for distance. Direction does not
/// matter here; the finders only pass indices in travel order anyway.
pub fn estimate_fare(
    fares: &FareSchedule,
    from_index: usize,
    to_index: usize,
    category: PassengerCategory,
) -> Pence {
    let tier = FareTier::for_stop_distance(from_index.abs_diff(to_index));
    fares.price(category, tier)
}
