//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    middleware::map_response,
    response::{Html, IntoResponse, Response},
    routing::{get, get_service, post},
};
use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, error, info, warn};

use crate::domain::DepartureTime;
use crate::planner::{JourneyPlanner, JourneyQuery, PlanError};
use crate::quotes::{QuoteError, estimate_taxi_fare, quote_car_hire};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Departure time assumed when a plan request does not give one.
const DEFAULT_DEPARTURE: &str = "09:00";

/// Filename offered to browsers for the printable timetable.
const PDF_DISPOSITION: &str = "inline; filename=st-helena-bus-timetables.pdf";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let timetable_pdf =
        get_service(ServeFile::new(state.pdf_path.as_ref())).layer(map_response(pdf_response));

    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/timetable-data", get(timetable_data))
        .route("/api/timetable-pdf", timetable_pdf)
        .route("/api/stops", get(list_stops))
        .route("/api/journey/plan", post(plan_journey))
        .route("/api/quotes/taxi", post(taxi_quote))
        .route("/api/quotes/car-hire", post(car_hire_quote))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with timetables, planner form and fares.
async fn index_page(State(state): State<AppState>) -> Response {
    askama_axum::into_response(&IndexTemplate::new(&state.timetable, stop_names(&state)))
}

/// Unknown paths: an error page for browsers, JSON otherwise.
async fn not_found(headers: HeaderMap) -> Response {
    if accepts_html(&headers) {
        let template = ErrorTemplate {
            title: "Page not found".to_string(),
            message: "There is nothing at this address.".to_string(),
            details: None,
        };
        return (StatusCode::NOT_FOUND, askama_axum::into_response(&template)).into_response();
    }

    AppError::NotFound {
        message: "Not found".to_string(),
    }
    .into_response()
}

/// Whole timetable, or one route if `?route=` names a known route.
async fn timetable_data(
    State(state): State<AppState>,
    Query(query): Query<TimetableQuery>,
) -> Response {
    let timetable = state.timetable.as_ref();
    match query.route.as_deref().and_then(|id| timetable.route(id)) {
        Some(route) => Json(route).into_response(),
        None => Json(timetable).into_response(),
    }
}

/// Headers for the printable timetable, streamed from disk by `ServeFile`.
async fn pdf_response(mut response: Response) -> Response {
    if response.status() == StatusCode::NOT_FOUND {
        warn!("timetable PDF unavailable");
        return AppError::NotFound {
            message: "Timetable PDF not available".to_string(),
        }
        .into_response();
    }

    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static(PDF_DISPOSITION),
    );
    response
}

/// All stop names, sorted.
async fn list_stops(State(state): State<AppState>) -> Json<StopsResponse> {
    Json(StopsResponse {
        stops: stop_names(&state),
    })
}

fn stop_names(state: &AppState) -> Vec<String> {
    JourneyPlanner::new(&state.timetable, &state.config)
        .stops()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Parse a JSON body, logging it on failure.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(body = %String::from_utf8_lossy(body), "rejected request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| AppError::BadRequest {
        message: format!("Invalid {field}: {value}"),
    })
}

/// Plan a journey between two stops.
async fn plan_journey(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let req: PlanJourneyRequest = parse_json(&body)?;

    let date = match req.date.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(d) => parse_date("date", d)?,
        None => Local::now().date_naive(),
    };

    let time_str = req.time.as_deref().unwrap_or(DEFAULT_DEPARTURE);
    let time = DepartureTime::parse_hhmm(time_str).map_err(|e| AppError::BadRequest {
        message: format!("Invalid time: {e}"),
    })?;

    let query = JourneyQuery::new(&req.from, &req.to, req.category, date, time);
    let planner = JourneyPlanner::new(&state.timetable, &state.config);

    let plan = match planner.plan(&query) {
        Ok(plan) => plan,
        Err(e) => {
            info!(from = %req.from, to = %req.to, error = %e, "no journey");
            if accepts_html(&headers) {
                let html = JourneyErrorTemplate {
                    message: e.to_string(),
                }
                .render()
                .map_err(|e| AppError::Internal {
                    message: format!("Template error: {}", e),
                })?;
                return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
            }
            return Err(AppError::from(e));
        }
    };

    info!(
        from = %plan.from,
        to = %plan.to,
        options = plan.itineraries.len(),
        "planned journey"
    );

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = JourneyResultsTemplate::from_plan(&plan);
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(PlanJourneyResponse::from_plan(&plan)).into_response())
    }
}

/// Estimate a taxi fare between two landmarks.
async fn taxi_quote(body: Bytes) -> Result<Json<TaxiQuoteResponse>, AppError> {
    let req: TaxiQuoteRequest = parse_json(&body)?;
    let quote = estimate_taxi_fare(req.pickup, req.dropoff, req.vehicle_type);
    Ok(Json(TaxiQuoteResponse::new(&req, quote)))
}

/// Price a car hire.
async fn car_hire_quote(body: Bytes) -> Result<Json<CarHireQuoteResponse>, AppError> {
    let req: CarHireQuoteRequest = parse_json(&body)?;
    let pickup = parse_date("pickup_date", &req.pickup_date)?;
    let return_date = parse_date("return_date", &req.return_date)?;

    let quote = quote_car_hire(req.vehicle, req.insurance, pickup, return_date)?;
    Ok(Json(CarHireQuoteResponse::from(quote)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unprocessable { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        AppError::Unprocessable {
            message: e.to_string(),
        }
    }
}

impl From<QuoteError> for AppError {
    fn from(e: QuoteError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            debug!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod routes_tests;
