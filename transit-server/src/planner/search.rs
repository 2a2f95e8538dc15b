//! Journey planning: validate the query, then try direct routes before
//! connections.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::catalog::Timetable;
use crate::domain::{DepartureTime, PassengerCategory};

use super::config::PlannerConfig;
use super::connection::find_connections;
use super::direct::find_direct;
use super::itinerary::Itinerary;
use super::stops::all_stops;

/// Error from journey planning.
///
/// Both are ordinary outcomes of a user's choice of stops, shown to them
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Origin or destination is not a stop on any route
    #[error("One or both of the selected stops are not valid. Please select valid stops.")]
    InvalidStops,

    /// Both stops exist but no direct route or connection joins them
    #[error("No routes found between these stops. Please try different stops or check the timetables.")]
    NoRoutes,
}

/// A journey planning request.
#[derive(Debug, Clone)]
pub struct JourneyQuery {
    pub from: String,
    pub to: String,
    pub category: PassengerCategory,

    /// Travel date, echoed back for display only.
    pub date: NaiveDate,

    /// Preferred departure time, echoed back for display only.
    pub time: DepartureTime,
}

impl JourneyQuery {
    /// Create a new query.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        category: PassengerCategory,
        date: NaiveDate,
        time: DepartureTime,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            category,
            date,
            time,
        }
    }
}

/// A successful plan.
#[derive(Debug, Clone)]
pub struct JourneyPlan {
    pub from: String,
    pub to: String,
    pub category: PassengerCategory,
    pub date: NaiveDate,
    pub time: DepartureTime,

    /// Either all direct options or all connections, never a mix.
    pub itineraries: Vec<Itinerary>,
}

/// Journey planner over a fixed timetable.
pub struct JourneyPlanner<'a> {
    timetable: &'a Timetable,
    config: &'a PlannerConfig,
}

impl<'a> JourneyPlanner<'a> {
    /// Create a new planner.
    pub fn new(timetable: &'a Timetable, config: &'a PlannerConfig) -> Self {
        Self { timetable, config }
    }

    /// All stop names, sorted.
    pub fn stops(&self) -> BTreeSet<&'a str> {
        all_stops(self.timetable.routes())
    }

    /// Plan a journey.
    ///
    /// Direct routes are always preferred: if any exist, connections are not
    /// searched at all.
    pub fn plan(&self, query: &JourneyQuery) -> Result<JourneyPlan, PlanError> {
        let stops = self.stops();
        if !stops.contains(query.from.as_str()) || !stops.contains(query.to.as_str()) {
            debug!(from = %query.from, to = %query.to, "rejected unknown stop");
            return Err(PlanError::InvalidStops);
        }

        let direct = find_direct(
            self.timetable,
            self.config,
            &query.from,
            &query.to,
            query.category,
        );

        let itineraries: Vec<Itinerary> = if direct.is_empty() {
            let connections = find_connections(
                self.timetable,
                self.config,
                &query.from,
                &query.to,
                query.category,
            );
            debug!(
                from = %query.from,
                to = %query.to,
                count = connections.len(),
                "no direct route, searched connections"
            );
            connections.into_iter().map(Itinerary::from).collect()
        } else {
            debug!(
                from = %query.from,
                to = %query.to,
                count = direct.len(),
                "found direct routes"
            );
            direct.into_iter().map(Itinerary::from).collect()
        };

        if itineraries.is_empty() {
            return Err(PlanError::NoRoutes);
        }

        Ok(JourneyPlan {
            from: query.from.clone(),
            to: query.to.clone(),
            category: query.category,
            date: query.date,
            time: query.time,
            itineraries,
        })
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
