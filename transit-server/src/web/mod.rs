//! Web layer for the bus journey planner.
//!
//! Provides the planner page, timetable and fare data, journey planning, and
//! taxi and car hire quotes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
