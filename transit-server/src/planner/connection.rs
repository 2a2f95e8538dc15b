//! Single-change connection search.

use crate::catalog::{Route, Timetable};
use crate::domain::PassengerCategory;

use super::config::PlannerConfig;
use super::fare::estimate_fare;
use super::itinerary::{ConnectionItinerary, LegSummary};

/// Find journeys that change buses once at a configured interchange.
///
/// Every route calling at `from` is paired with every route calling at `to`,
/// and each interchange is tried for each pair. A combination is accepted
/// when the first route reaches the interchange after `from` and the second
/// route reaches `to` after the interchange.
///
/// The two routes may be the same route. Such a "connection" duplicates a
/// direct journey; it is only reachable when this is called without a
/// preceding direct search. Duplicates are not removed and results are not
/// capped.
pub fn find_connections(
    timetable: &Timetable,
    config: &PlannerConfig,
    from: &str,
    to: &str,
    category: PassengerCategory,
) -> Vec<ConnectionItinerary> {
    let from_routes: Vec<&Route> = routes_serving(timetable, from).collect();
    let to_routes: Vec<&Route> = routes_serving(timetable, to).collect();

    let mut connections = Vec::new();

    for first in &from_routes {
        for second in &to_routes {
            for interchange in &config.interchanges {
                if let Some(connection) =
                    connect(timetable, config, first, second, from, interchange, to, category)
                {
                    connections.push(connection);
                }
            }
        }
    }

    connections
}

fn routes_serving<'a>(timetable: &'a Timetable, stop: &'a str) -> impl Iterator<Item = &'a Route> {
    timetable.routes().iter().filter(move |r| r.serves(stop))
}

/// Build the connection `from -> interchange` on `first`, then
/// `interchange -> to` on `second`, if both legs run in stop order.
#[allow(clippy::too_many_arguments)]
fn connect(
    timetable: &Timetable,
    config: &PlannerConfig,
    first: &Route,
    second: &Route,
    from: &str,
    interchange: &str,
    to: &str,
    category: PassengerCategory,
) -> Option<ConnectionItinerary> {
    let from_index = first.position(from)?;
    let change_on_first = first.position(interchange)?;
    let change_on_second = second.position(interchange)?;
    let to_index = second.position(to)?;

    if from_index >= change_on_first || change_on_second >= to_index {
        return None;
    }

    let ridden = (change_on_first - from_index) + (to_index - change_on_second);
    let fares = timetable.fares();

    Some(ConnectionItinerary {
        interchange: interchange.to_string(),
        first_leg: LegSummary::new(first, from, interchange),
        second_leg: LegSummary::new(second, interchange, to),
        duration: config.ride_time(ridden) + config.transfer_time(),
        fare: estimate_fare(fares, from_index, change_on_first, category)
            + estimate_fare(fares, change_on_second, to_index, category),
        departures: first.departures(from),
    })
}
