//! Price quotes for getting around the island without the bus.

mod car_hire;
mod taxi;

pub use car_hire::{
    CarHireQuote, HireVehicle, Insurance, QuoteError, quote_car_hire, rental_days,
};
pub use taxi::{
    DEFAULT_DISTANCE, Landmark, RATE_PER_TENTH, TaxiQuote, TaxiVehicle, TenthsOfMile,
    distance_between, estimate_taxi_fare,
};
