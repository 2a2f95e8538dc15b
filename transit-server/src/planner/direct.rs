//! Direct-route search.

use crate::catalog::Timetable;
use crate::domain::PassengerCategory;

use super::config::PlannerConfig;
use super::fare::estimate_fare;
use super::itinerary::{DirectItinerary, LegSummary};

/// Find every route that runs from `from` to `to` without changing.
///
/// A route qualifies only if it calls at `from` before `to`; riding against
/// the listed stop order is never offered. Results follow catalog order, one
/// per qualifying route.
pub fn find_direct(
    timetable: &Timetable,
    config: &PlannerConfig,
    from: &str,
    to: &str,
    category: PassengerCategory,
) -> Vec<DirectItinerary> {
    timetable
        .routes()
        .iter()
        .filter_map(|route| {
            let from_index = route.position(from)?;
            let to_index = route.position(to)?;
            if from_index >= to_index {
                return None;
            }

            Some(DirectItinerary {
                leg: LegSummary::new(route, from, to),
                duration: config.ride_time(to_index - from_index),
                fare: estimate_fare(timetable.fares(), from_index, to_index, category),
                departures: route.departures(from),
            })
        })
        .collect()
}
