//! Stop index derived from the route catalog.

use std::collections::BTreeSet;

use crate::catalog::Route;

/// Every distinct stop name across `routes`, sorted.
///
/// Stops have no identity beyond their name, so a stop shared by several
/// routes appears once.
pub fn all_stops(routes: &[Route]) -> BTreeSet<&str> {
    routes
        .iter()
        .flat_map(|route| route.stops().iter().map(String::as_str))
        .collect()
}
