//! Askama templates for the web frontend.

use askama::Template;

use crate::catalog::{Route, Timetable};
use crate::domain::{DepartureTime, FareTier, PassengerCategory, ServiceDay};
use crate::planner::{Itinerary, JourneyPlan, LegSummary};
use crate::quotes::{HireVehicle, Landmark};

use super::dto::format_duration;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page: timetables, journey planner form, fares.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stops: Vec<String>,
    pub routes: Vec<RouteView>,
    pub fares: Vec<FareRowView>,
    pub child_age_limit: u8,
    pub landmarks: Vec<&'static str>,
    pub hire_vehicles: Vec<HireVehicleView>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub details: Option<String>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Journey results fragment.
#[derive(Template)]
#[template(path = "journey_results.html")]
pub struct JourneyResultsTemplate {
    pub from: String,
    pub to: String,
    pub date: String,
    pub time: String,
    pub category: String,
    pub itineraries: Vec<ItineraryView>,
}

/// Journey planning failure fragment.
#[derive(Template)]
#[template(path = "journey_error.html")]
pub struct JourneyErrorTemplate {
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Route timetable view model.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub id: String,
    pub name: String,
    pub stops: Vec<StopTimesView>,
}

/// Departures from one stop of a route.
#[derive(Debug, Clone)]
pub struct StopTimesView {
    pub stop: String,
    pub weekday: String,
    pub saturday: String,
}

impl RouteView {
    /// Create from a catalog Route.
    pub fn from_route(route: &Route) -> Self {
        let stops = route
            .stops()
            .iter()
            .map(|stop| {
                let schedules = route.schedules();
                StopTimesView {
                    stop: stop.clone(),
                    weekday: join_times(schedules.for_day(ServiceDay::Weekday).departures(stop)),
                    saturday: join_times(schedules.for_day(ServiceDay::Saturday).departures(stop)),
                }
            })
            .collect();

        Self {
            id: route.id().to_string(),
            name: route.name().to_string(),
            stops,
        }
    }
}

/// One fare band with adult and child prices.
#[derive(Debug, Clone)]
pub struct FareRowView {
    pub label: &'static str,
    pub adult: String,
    pub child: String,
}

impl FareRowView {
    /// One row per fare tier, shortest first.
    pub fn rows(timetable: &Timetable) -> Vec<Self> {
        let fares = timetable.fares();
        FareTier::ALL
            .iter()
            .map(|&tier| FareRowView {
                label: tier.label(),
                adult: fares.price(PassengerCategory::Adult, tier).to_string(),
                child: fares.price(PassengerCategory::Child, tier).to_string(),
            })
            .collect()
    }
}

/// Hire vehicle option for the car hire form.
#[derive(Debug, Clone)]
pub struct HireVehicleView {
    pub value: String,
    pub label: &'static str,
    pub daily_rate: String,
}

impl HireVehicleView {
    pub fn all() -> Vec<Self> {
        HireVehicle::ALL
            .iter()
            .map(|vehicle| HireVehicleView {
                value: serde_json::to_value(vehicle)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default(),
                label: vehicle.label(),
                daily_rate: vehicle.daily_rate().to_string(),
            })
            .collect()
    }
}

impl IndexTemplate {
    /// Build the home page for a timetable.
    pub fn new(timetable: &Timetable, stops: Vec<String>) -> Self {
        Self {
            stops,
            routes: timetable.routes().iter().map(RouteView::from_route).collect(),
            fares: FareRowView::rows(timetable),
            child_age_limit: timetable.fares().child_age_limit,
            landmarks: Landmark::ALL.iter().map(Landmark::name).collect(),
            hire_vehicles: HireVehicleView::all(),
        }
    }
}

/// Journey option view model.
#[derive(Debug, Clone)]
pub struct ItineraryView {
    pub is_direct: bool,
    pub interchange: Option<String>,
    pub legs: Vec<LegView>,
    pub duration: String,
    pub fare: String,
    pub weekday_departures: String,
    pub saturday_departures: String,
}

/// One bus ride within a journey.
#[derive(Debug, Clone)]
pub struct LegView {
    pub route_name: String,
    pub from_stop: String,
    pub to_stop: String,
}

impl ItineraryView {
    /// Create from a planner Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let interchange = match itinerary {
            Itinerary::Direct(_) => None,
            Itinerary::Connection(c) => Some(c.interchange.clone()),
        };
        let departures = itinerary.departures();

        Self {
            is_direct: itinerary.is_direct(),
            interchange,
            legs: itinerary.legs().into_iter().map(LegView::from_leg).collect(),
            duration: format_duration(itinerary.duration()),
            fare: itinerary.fare().to_string(),
            weekday_departures: departures_or(
                &departures.weekday,
                "No weekday departures available",
            ),
            saturday_departures: departures_or(
                &departures.saturday,
                "No Saturday departures available",
            ),
        }
    }
}

impl LegView {
    pub fn from_leg(leg: &LegSummary) -> Self {
        Self {
            route_name: leg.route_name.clone(),
            from_stop: leg.from_stop.clone(),
            to_stop: leg.to_stop.clone(),
        }
    }
}

impl JourneyResultsTemplate {
    /// Build the results fragment for a plan.
    pub fn from_plan(plan: &JourneyPlan) -> Self {
        Self {
            from: plan.from.clone(),
            to: plan.to.clone(),
            date: plan.date.format("%A %-d %B %Y").to_string(),
            time: plan.time.to_string(),
            category: plan.category.label().to_string(),
            itineraries: plan
                .itineraries
                .iter()
                .map(ItineraryView::from_itinerary)
                .collect(),
        }
    }
}

fn join_times(times: &[DepartureTime]) -> String {
    times
        .iter()
        .map(DepartureTime::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn departures_or(times: &[DepartureTime], empty: &str) -> String {
    if times.is_empty() {
        empty.to_string()
    } else {
        join_times(times)
    }
}
