//! Data transfer objects for web requests and responses.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::{DepartureTime, PassengerCategory, Pence};
use crate::planner::{ConnectionItinerary, DirectItinerary, Itinerary, JourneyPlan, LegSummary};
use crate::quotes::{CarHireQuote, HireVehicle, Insurance, Landmark, TaxiQuote, TaxiVehicle};

/// Query string for the timetable endpoint.
#[derive(Debug, Deserialize)]
pub struct TimetableQuery {
    /// Route identifier; unknown identifiers fall back to the whole timetable
    pub route: Option<String>,
}

/// All stop names, sorted.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    pub stops: Vec<String>,
}

/// Request to plan a journey.
#[derive(Debug, Deserialize)]
pub struct PlanJourneyRequest {
    /// Origin stop name
    pub from: String,

    /// Destination stop name
    pub to: String,

    /// Fare category (defaults to adult)
    #[serde(default)]
    pub category: PassengerCategory,

    /// Travel date as YYYY-MM-DD (defaults to today)
    pub date: Option<String>,

    /// Departure time as HH:MM (defaults to 09:00)
    pub time: Option<String>,
}

/// Response for journey planning.
#[derive(Debug, Serialize)]
pub struct PlanJourneyResponse {
    pub from: String,
    pub to: String,
    pub category: PassengerCategory,

    /// Travel date as YYYY-MM-DD
    pub date: String,

    /// Preferred departure time
    pub time: DepartureTime,

    /// Journey options; all direct or all connections
    pub routes: Vec<ItineraryResult>,
}

/// A journey option.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItineraryResult {
    Direct(DirectResult),
    Connection(ConnectionResult),
}

/// A single-route journey.
#[derive(Debug, Serialize)]
pub struct DirectResult {
    #[serde(flatten)]
    pub leg: LegResult,

    /// Estimated riding time in minutes
    pub duration_mins: i64,

    /// Riding time for display, e.g. "30 mins"
    pub estimated_duration: String,

    pub fare: Pence,
    pub weekday_departures: Vec<DepartureTime>,
    pub saturday_departures: Vec<DepartureTime>,
}

/// A journey changing buses once.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    /// Stop where the passenger changes
    pub interchange: String,

    pub first_leg: LegResult,
    pub second_leg: LegResult,

    /// Riding time plus transfer allowance, in minutes
    pub duration_mins: i64,

    /// Total time for display, e.g. "60 mins"
    pub estimated_duration: String,

    /// Combined fare for both legs
    pub fare: Pence,

    /// Departures from the origin on the first route
    pub weekday_departures: Vec<DepartureTime>,
    pub saturday_departures: Vec<DepartureTime>,
}

/// One bus ride within a journey.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub route_id: String,
    pub route_name: String,
    pub from_stop: String,
    pub to_stop: String,
}

/// Request for a taxi fare estimate.
#[derive(Debug, Deserialize)]
pub struct TaxiQuoteRequest {
    pub pickup: Landmark,
    pub dropoff: Landmark,
    pub vehicle_type: TaxiVehicle,
}

/// Taxi fare estimate.
#[derive(Debug, Serialize)]
pub struct TaxiQuoteResponse {
    pub pickup: Landmark,
    pub dropoff: Landmark,
    pub vehicle_type: TaxiVehicle,
    pub distance_miles: f64,
    pub fare: Pence,
}

/// Request for a car hire quote.
#[derive(Debug, Deserialize)]
pub struct CarHireQuoteRequest {
    pub vehicle: HireVehicle,

    /// Optional insurance cover
    #[serde(default)]
    pub insurance: Option<Insurance>,

    /// Pickup date as YYYY-MM-DD
    pub pickup_date: String,

    /// Return date as YYYY-MM-DD
    pub return_date: String,
}

/// Car hire quote.
#[derive(Debug, Serialize)]
pub struct CarHireQuoteResponse {
    pub vehicle: HireVehicle,
    pub vehicle_name: &'static str,
    pub insurance: Option<Insurance>,
    pub rental_days: u32,
    pub vehicle_cost: Pence,
    pub insurance_cost: Pence,
    pub total: Pence,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl PlanJourneyResponse {
    /// Create from a planner result.
    pub fn from_plan(plan: &JourneyPlan) -> Self {
        Self {
            from: plan.from.clone(),
            to: plan.to.clone(),
            category: plan.category,
            date: plan.date.format("%Y-%m-%d").to_string(),
            time: plan.time,
            routes: plan.itineraries.iter().map(ItineraryResult::from).collect(),
        }
    }
}

impl From<&Itinerary> for ItineraryResult {
    fn from(itinerary: &Itinerary) -> Self {
        match itinerary {
            Itinerary::Direct(direct) => ItineraryResult::Direct(DirectResult::from(direct)),
            Itinerary::Connection(connection) => {
                ItineraryResult::Connection(ConnectionResult::from(connection))
            }
        }
    }
}

impl From<&DirectItinerary> for DirectResult {
    fn from(direct: &DirectItinerary) -> Self {
        Self {
            leg: LegResult::from(&direct.leg),
            duration_mins: direct.duration.num_minutes(),
            estimated_duration: format_duration(direct.duration),
            fare: direct.fare,
            weekday_departures: direct.departures.weekday.clone(),
            saturday_departures: direct.departures.saturday.clone(),
        }
    }
}

impl From<&ConnectionItinerary> for ConnectionResult {
    fn from(connection: &ConnectionItinerary) -> Self {
        Self {
            interchange: connection.interchange.clone(),
            first_leg: LegResult::from(&connection.first_leg),
            second_leg: LegResult::from(&connection.second_leg),
            duration_mins: connection.duration.num_minutes(),
            estimated_duration: format_duration(connection.duration),
            fare: connection.fare,
            weekday_departures: connection.departures.weekday.clone(),
            saturday_departures: connection.departures.saturday.clone(),
        }
    }
}

impl From<&LegSummary> for LegResult {
    fn from(leg: &LegSummary) -> Self {
        Self {
            route_id: leg.route_id.clone(),
            route_name: leg.route_name.clone(),
            from_stop: leg.from_stop.clone(),
            to_stop: leg.to_stop.clone(),
        }
    }
}

impl TaxiQuoteResponse {
    pub fn new(request: &TaxiQuoteRequest, quote: TaxiQuote) -> Self {
        Self {
            pickup: request.pickup,
            dropoff: request.dropoff,
            vehicle_type: request.vehicle_type,
            distance_miles: quote.distance.as_miles(),
            fare: quote.fare,
        }
    }
}

impl From<CarHireQuote> for CarHireQuoteResponse {
    fn from(quote: CarHireQuote) -> Self {
        Self {
            vehicle: quote.vehicle,
            vehicle_name: quote.vehicle.label(),
            insurance: quote.insurance,
            rental_days: quote.days,
            vehicle_cost: quote.vehicle_cost,
            insurance_cost: quote.insurance_cost,
            total: quote.total,
        }
    }
}

/// Format a duration as "N mins".
pub fn format_duration(duration: Duration) -> String {
    format!("{} mins", duration.num_minutes())
}
