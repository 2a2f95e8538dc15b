//! Journey options produced by the planner.

use chrono::Duration;

use crate::catalog::{Departures, Route};
use crate::domain::Pence;

/// One bus ride: a route boarded at one stop and left at another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegSummary {
    pub route_id: String,
    pub route_name: String,
    pub from_stop: String,
    pub to_stop: String,
}

impl LegSummary {
    pub fn new(route: &Route, from_stop: &str, to_stop: &str) -> Self {
        Self {
            route_id: route.id().to_string(),
            route_name: route.name().to_string(),
            from_stop: from_stop.to_string(),
            to_stop: to_stop.to_string(),
        }
    }
}

/// A journey on a single route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectItinerary {
    pub leg: LegSummary,
    pub duration: Duration,
    pub fare: Pence,

    /// Departures from the origin stop.
    pub departures: Departures,
}

/// A journey on two routes, changing at an interchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionItinerary {
    pub interchange: String,
    pub first_leg: LegSummary,
    pub second_leg: LegSummary,

    /// Riding time on both legs plus the transfer allowance.
    pub duration: Duration,

    /// Sum of the two leg fares.
    pub fare: Pence,

    /// Departures from the origin stop on the first leg's route.
    pub departures: Departures,
}

/// A candidate journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Itinerary {
    Direct(DirectItinerary),
    Connection(ConnectionItinerary),
}

impl Itinerary {
    pub fn is_direct(&self) -> bool {
        matches!(self, Itinerary::Direct(_))
    }

    pub fn duration(&self) -> Duration {
        match self {
            Itinerary::Direct(d) => d.duration,
            Itinerary::Connection(c) => c.duration,
        }
    }

    pub fn fare(&self) -> Pence {
        match self {
            Itinerary::Direct(d) => d.fare,
            Itinerary::Connection(c) => c.fare,
        }
    }

    pub fn departures(&self) -> &Departures {
        match self {
            Itinerary::Direct(d) => &d.departures,
            Itinerary::Connection(c) => &c.departures,
        }
    }

    /// The bus rides in travel order.
    pub fn legs(&self) -> Vec<&LegSummary> {
        match self {
            Itinerary::Direct(d) => vec![&d.leg],
            Itinerary::Connection(c) => vec![&c.first_leg, &c.second_leg],
        }
    }
}

impl From<DirectItinerary> for Itinerary {
    fn from(value: DirectItinerary) -> Self {
        Itinerary::Direct(value)
    }
}

impl From<ConnectionItinerary> for Itinerary {
    fn from(value: ConnectionItinerary) -> Self {
        Itinerary::Connection(value)
    }
}
