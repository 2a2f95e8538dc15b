//! Bus journey planner.
//!
//! Answers "how do I get from this stop to that stop?" over a fixed
//! timetable. Direct routes are found first; only if there are none does the
//! planner look for journeys that change buses once at an interchange.
//! Durations and fares are estimates derived from how many stops are
//! travelled.

mod config;
mod connection;
mod direct;
mod fare;
mod itinerary;
mod search;
mod stops;

pub use config::PlannerConfig;
pub use connection::find_connections;
pub use direct::find_direct;
pub use fare::estimate_fare;
pub use itinerary::{ConnectionItinerary, DirectItinerary, Itinerary, LegSummary};
pub use search::{JourneyPlan, JourneyPlanner, JourneyQuery, PlanError};
pub use stops::all_stops;
