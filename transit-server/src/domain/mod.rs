//! Domain types for the bus journey planner.
//!
//! Value types that enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod category;
mod money;
mod time;

pub use category::{FareTier, PassengerCategory, ServiceDay};
pub use money::{InvalidPrice, Pence};
pub use time::{DepartureTime, TimeError};
