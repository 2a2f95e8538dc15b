//! HTTP tests: serve the router on an ephemeral port and call it.

use std::path::Path;

use reqwest::StatusCode;
use serde_json::{Value, json};
use tempfile::TempDir;

use super::*;
use crate::catalog::{CatalogProvider, EmbeddedCatalog};
use crate::planner::PlannerConfig;

const PDF_BYTES: &[u8] = b"%PDF-1.4\n% test\n%%EOF\n";

/// A running server and the temp dir backing its files.
struct TestServer {
    base: String,
    _dir: TempDir,
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

async fn serve(pdf_path: &Path, static_dir: &Path) -> String {
    let timetable = EmbeddedCatalog.load().unwrap();
    let state = AppState::new(timetable, PlannerConfig::default(), pdf_path);
    let app = create_router(state, static_dir);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

async fn start() -> TestServer {
    let dir = TempDir::new().unwrap();
    let pdf_path = dir.path().join("timetables.pdf");
    std::fs::write(&pdf_path, PDF_BYTES).unwrap();
    let static_dir = dir.path().join("static");
    std::fs::create_dir(&static_dir).unwrap();
    std::fs::write(static_dir.join("style.css"), "body {}").unwrap();

    let base = serve(&pdf_path, &static_dir).await;
    TestServer { base, _dir: dir }
}

async fn post_json(server: &TestServer, path: &str, body: Value) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(server.url(path))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

async fn get_json(server: &TestServer, path: &str) -> (StatusCode, Value) {
    let response = reqwest::get(server.url(path)).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

// ============================================================================
// Pages and data
// ============================================================================

#[tokio::test]
async fn health_check() {
    let server = start().await;
    let response = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn index_page_lists_stops() {
    let server = start().await;
    let response = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains("Half Tree Hollow"));
    assert!(html.contains("Sandy Bay &amp; Blue Hill") || html.contains("Sandy Bay & Blue Hill"));
}

#[tokio::test]
async fn static_files_are_served() {
    let server = start().await;
    let response = reqwest::get(server.url("/static/style.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "body {}");
}

#[tokio::test]
async fn stops_are_sorted() {
    let server = start().await;
    let (status, body) = get_json(&server, "/api/stops").await;
    assert_eq!(status, StatusCode::OK);

    let stops: Vec<&str> = body["stops"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s.as_str().unwrap())
        .collect();
    assert_eq!(stops.len(), 10);
    assert_eq!(stops[0], "Airport");
    let mut sorted = stops.clone();
    sorted.sort();
    assert_eq!(stops, sorted);
}

#[tokio::test]
async fn whole_timetable() {
    let server = start().await;
    let (status, body) = get_json(&server, "/api/timetable-data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["routes"]["longwood"]["name"], "Longwood Bus Route");
    assert_eq!(body["fares"]["adult"]["up_to_3_miles"], 2.45);
    assert_eq!(body["fares"]["child"]["3_to_6_miles"], 1.5);
    assert_eq!(body["fares"]["child_age_limit"], 10);
}

#[tokio::test]
async fn single_route_by_id() {
    let server = start().await;
    let (status, body) = get_json(&server, "/api/timetable-data?route=levelwood").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Levelwood Bus Route");
    assert_eq!(body["stops"][1], "Levelwood");
    assert_eq!(body["schedules"]["saturday"]["Levelwood"][0], "10:45");
    assert!(body.get("routes").is_none());
}

#[tokio::test]
async fn unknown_route_returns_whole_timetable() {
    let server = start().await;
    let (status, body) = get_json(&server, "/api/timetable-data?route=nowhere").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["routes"].is_object());
    assert!(body["fares"].is_object());
}

#[tokio::test]
async fn timetable_pdf_headers() {
    let server = start().await;
    let response = reqwest::get(server.url("/api/timetable-pdf")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_TYPE],
        "application/pdf"
    );
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_DISPOSITION],
        "inline; filename=st-helena-bus-timetables.pdf"
    );
    assert_eq!(response.bytes().await.unwrap().as_ref(), PDF_BYTES);
}

#[tokio::test]
async fn timetable_pdf_serves_byte_ranges() {
    let server = start().await;
    let response = reqwest::Client::new()
        .get(server.url("/api/timetable-pdf"))
        .header(reqwest::header::RANGE, "bytes=0-3")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_DISPOSITION],
        "inline; filename=st-helena-bus-timetables.pdf"
    );
    assert_eq!(response.bytes().await.unwrap().as_ref(), &PDF_BYTES[..4]);
}

#[tokio::test]
async fn missing_pdf_is_not_found() {
    let dir = TempDir::new().unwrap();
    let base = serve(&dir.path().join("missing.pdf"), dir.path()).await;
    let server = TestServer { base, _dir: dir };

    let (status, body) = get_json(&server, "/api/timetable-pdf").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("PDF"));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = start().await;
    let (status, body) = get_json(&server, "/no/such/page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");

    let response = reqwest::Client::new()
        .get(server.url("/no/such/page"))
        .header(reqwest::header::ACCEPT, "text/html")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.text().await.unwrap().contains("Page not found"));
}

// ============================================================================
// Journey planning
// ============================================================================

#[tokio::test]
async fn plan_direct_journey() {
    let server = start().await;
    let (status, body) = post_json(
        &server,
        "/api/journey/plan",
        json!({
            "from": "Jamestown",
            "to": "Airport",
            "date": "2025-03-01",
            "time": "10:00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["from"], "Jamestown");
    assert_eq!(body["to"], "Airport");
    assert_eq!(body["date"], "2025-03-01");
    assert_eq!(body["time"], "10:00");
    assert_eq!(body["category"], "adult");

    let routes = body["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0]["type"], "direct");
    assert_eq!(routes[0]["route_id"], "longwood");
    assert_eq!(routes[0]["route_name"], "Longwood Bus Route");
    assert_eq!(routes[0]["duration_mins"], 30);
    assert_eq!(routes[0]["estimated_duration"], "30 mins");
    assert_eq!(routes[0]["fare"], 2.45);
    assert_eq!(routes[0]["saturday_departures"], json!(["09:30", "13:30"]));
}

#[tokio::test]
async fn plan_child_fare() {
    let server = start().await;
    let (status, body) = post_json(
        &server,
        "/api/journey/plan",
        json!({"from": "Jamestown", "to": "Airport", "category": "child"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "child");
    assert_eq!(body["time"], "09:00");
    assert_eq!(body["routes"][0]["fare"], 1.2);
}

#[tokio::test]
async fn plan_unknown_stop_is_unprocessable() {
    let server = start().await;
    let (status, body) = post_json(
        &server,
        "/api/journey/plan",
        json!({"from": "Atlantis", "to": "Airport"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        "One or both of the selected stops are not valid. Please select valid stops."
    );
}

#[tokio::test]
async fn plan_without_route_is_unprocessable() {
    let server = start().await;
    let (status, body) = post_json(
        &server,
        "/api/journey/plan",
        json!({"from": "Half Tree Hollow", "to": "Sandy Bay"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        "No routes found between these stops. Please try different stops or check the timetables."
    );
}

#[tokio::test]
async fn plan_rejects_malformed_input() {
    let server = start().await;

    let response = reqwest::Client::new()
        .post(server.url("/api/journey/plan"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        &server,
        "/api/journey/plan",
        json!({"from": "Jamestown", "to": "Airport", "time": "25:00"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        &server,
        "/api/journey/plan",
        json!({"from": "Jamestown", "to": "Airport", "date": "tomorrow"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn plan_as_html_fragment() {
    let server = start().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/api/journey/plan"))
        .header(reqwest::header::ACCEPT, "text/html")
        .json(&json!({"from": "Jamestown", "to": "Longwood (Return)", "date": "2025-03-01"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains("Longwood Bus Route"));
    assert!(html.contains("45 mins"));
    assert!(html.contains("£3.15"));

    let response = client
        .post(server.url("/api/journey/plan"))
        .header(reqwest::header::ACCEPT, "text/html")
        .json(&json!({"from": "Half Tree Hollow", "to": "Sandy Bay"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().await.unwrap().contains("No routes found"));
}

// ============================================================================
// Quotes
// ============================================================================

#[tokio::test]
async fn taxi_quote_known_pair() {
    let server = start().await;
    let (status, body) = post_json(
        &server,
        "/api/quotes/taxi",
        json!({"pickup": "Longwood House", "dropoff": "Jamestown Wharf", "vehicle_type": "minivan"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["distance_miles"], 5.2);
    // 5.50 + 5.2 * 0.80
    assert_eq!(body["fare"], 9.66);
}

#[tokio::test]
async fn taxi_quote_rejects_unknown_landmark() {
    let server = start().await;
    let (status, body) = post_json(
        &server,
        "/api/quotes/taxi",
        json!({"pickup": "Moon", "dropoff": "Airport", "vehicle_type": "sedan"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[tokio::test]
async fn car_hire_quote() {
    let server = start().await;
    let (status, body) = post_json(
        &server,
        "/api/quotes/car-hire",
        json!({
            "vehicle": "rav4",
            "insurance": "standard",
            "pickup_date": "2025-03-01",
            "return_date": "2025-03-05"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rental_days"], 4);
    assert_eq!(body["vehicle_cost"], 180.0);
    assert_eq!(body["insurance_cost"], 40.0);
    assert_eq!(body["total"], 220.0);
}

#[tokio::test]
async fn car_hire_quote_bad_date() {
    let server = start().await;
    let (status, body) = post_json(
        &server,
        "/api/quotes/car-hire",
        json!({"vehicle": "jimny", "pickup_date": "soon", "return_date": "2025-03-05"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid pickup_date: soon");
}

#[tokio::test]
async fn car_hire_quote_too_long_to_price() {
    let server = start().await;
    let (status, body) = post_json(
        &server,
        "/api/quotes/car-hire",
        json!({
            "vehicle": "ranger",
            "insurance": "premium",
            "pickup_date": "0001-01-01",
            "return_date": "9999-12-31"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("too long"));
}
