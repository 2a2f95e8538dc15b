//! The full timetable: every route plus the fare schedule.

use std::collections::HashSet;
use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::ServiceDay;

use super::fares::FareSchedule;
use super::ordered::ordered_entries;
use super::route::Route;

/// Routes and fares, loaded once and shared read-only.
///
/// Routes keep the order they were listed in, which is the order journey
/// results are returned in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    routes: Vec<Route>,
    fares: FareSchedule,
}

impl Timetable {
    pub fn new(routes: Vec<Route>, fares: FareSchedule) -> Self {
        Self { routes, fares }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn fares(&self) -> &FareSchedule {
        &self.fares
    }

    /// Look up a route by identifier.
    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id() == id)
    }

    /// Check the timetable for data the planner silently tolerates.
    ///
    /// The planner never calls this: an unknown scheduled stop just means
    /// its departures are unreachable. Callers may log the issues at load
    /// time.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();
        let mut seen_ids = HashSet::new();

        for route in &self.routes {
            if !seen_ids.insert(route.id()) {
                issues.push(IntegrityIssue::DuplicateRouteId {
                    route_id: route.id().to_string(),
                });
            }

            if route.stops().is_empty() {
                issues.push(IntegrityIssue::EmptyRoute {
                    route_id: route.id().to_string(),
                });
            }

            for day in [ServiceDay::Weekday, ServiceDay::Saturday] {
                for stop in route.schedules().for_day(day).stops() {
                    if !route.serves(stop) {
                        issues.push(IntegrityIssue::UnknownScheduledStop {
                            route_id: route.id().to_string(),
                            day,
                            stop: stop.to_string(),
                        });
                    }
                }
            }
        }

        issues
    }
}

/// A timetable inconsistency found by [`Timetable::integrity_issues`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// Two routes share an identifier; lookups by id only see the first.
    DuplicateRouteId { route_id: String },

    /// A route with no stops can never be travelled.
    EmptyRoute { route_id: String },

    /// A schedule lists departures from a stop the route does not call at.
    UnknownScheduledStop {
        route_id: String,
        day: ServiceDay,
        stop: String,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::DuplicateRouteId { route_id } => {
                write!(f, "route id '{route_id}' is used more than once")
            }
            IntegrityIssue::EmptyRoute { route_id } => {
                write!(f, "route '{route_id}' has no stops")
            }
            IntegrityIssue::UnknownScheduledStop {
                route_id,
                day,
                stop,
            } => write!(
                f,
                "route '{route_id}' {day} schedule lists '{stop}', which is not one of its stops"
            ),
        }
    }
}

/// On-disk layout: `{"routes": {id: route, ...}, "fares": {...}}`.
#[derive(Deserialize)]
struct Document {
    #[serde(with = "ordered_entries")]
    routes: Vec<(String, Route)>,
    fares: FareSchedule,
}

impl<'de> Deserialize<'de> for Timetable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = Document::deserialize(deserializer)?;
        let routes = doc
            .routes
            .into_iter()
            .map(|(id, mut route)| {
                route.set_id(id);
                route
            })
            .collect();
        Ok(Timetable::new(routes, doc.fares))
    }
}

impl Serialize for Timetable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut doc = serializer.serialize_struct("Timetable", 2)?;
        doc.serialize_field("routes", &RoutesById(&self.routes))?;
        doc.serialize_field("fares", &self.fares)?;
        doc.end()
    }
}

/// Serializes routes as an object keyed by route id.
struct RoutesById<'a>(&'a [Route]);

impl Serialize for RoutesById<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|r| (r.id(), r)))
    }
}
