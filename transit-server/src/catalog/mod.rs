//! Route catalog: bus routes, departure schedules and fares.
//!
//! The catalog is immutable once loaded. It is deserialized from a JSON
//! document of the form:
//!
//! ```json
//! {
//!   "routes": {
//!     "longwood": {
//!       "name": "Longwood Bus Route",
//!       "stops": ["Jamestown", "Longwood", "Airport"],
//!       "schedules": {
//!         "weekday": {"Jamestown": ["07:30", "09:30"]},
//!         "saturday": {"Jamestown": ["09:30"]}
//!       }
//!     }
//!   },
//!   "fares": {
//!     "adult": {"up_to_3_miles": 2.45, "3_to_6_miles": 3.15, "over_6_miles": 3.60},
//!     "child": {"up_to_3_miles": 1.20, "3_to_6_miles": 1.50, "over_6_miles": 1.80},
//!     "child_age_limit": 10
//!   }
//! }
//! ```

mod fares;
mod ordered;
mod provider;
mod route;
mod timetable;

pub use fares::{FareBands, FareSchedule};
pub use provider::{CatalogError, CatalogProvider, EmbeddedCatalog, FileCatalog};
pub use route::{Departures, Route, Schedule, Schedules};
pub use timetable::{IntegrityIssue, Timetable};
