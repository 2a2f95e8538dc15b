//! Car hire quotes: a daily rate per vehicle plus optional daily insurance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Pence;

/// Hire vehicles on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HireVehicle {
    Rav4,
    Jimny,
    Corolla,
    Ranger,
}

impl HireVehicle {
    pub const ALL: [HireVehicle; 4] = [
        HireVehicle::Rav4,
        HireVehicle::Jimny,
        HireVehicle::Corolla,
        HireVehicle::Ranger,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HireVehicle::Rav4 => "Toyota RAV4",
            HireVehicle::Jimny => "Suzuki Jimny",
            HireVehicle::Corolla => "Toyota Corolla",
            HireVehicle::Ranger => "Ford Ranger",
        }
    }

    pub fn daily_rate(&self) -> Pence {
        match self {
            HireVehicle::Rav4 => Pence::new(4500),
            HireVehicle::Jimny => Pence::new(3500),
            HireVehicle::Corolla => Pence::new(3000),
            HireVehicle::Ranger => Pence::new(5500),
        }
    }
}

/// Insurance cover, charged per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Insurance {
    Basic,
    Standard,
    Premium,
}

impl Insurance {
    pub fn daily_rate(&self) -> Pence {
        match self {
            Insurance::Basic => Pence::new(500),
            Insurance::Standard => Pence::new(1000),
            Insurance::Premium => Pence::new(1500),
        }
    }
}

/// Number of days charged between pickup and return.
///
/// The order of the dates does not matter. A same-day hire is one day.
pub fn rental_days(pickup: NaiveDate, return_date: NaiveDate) -> u32 {
    let days = (return_date - pickup).num_days().unsigned_abs();
    u32::try_from(days).unwrap_or(u32::MAX).max(1)
}

/// Error returned when a hire cannot be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("rental period of {days} days is too long to price")]
    PeriodTooLong { days: u32 },
}

/// A priced car hire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarHireQuote {
    pub vehicle: HireVehicle,
    pub insurance: Option<Insurance>,
    pub days: u32,
    pub vehicle_cost: Pence,
    pub insurance_cost: Pence,
    pub total: Pence,
}

/// Price a hire of `vehicle` from `pickup` to `return_date`.
pub fn quote_car_hire(
    vehicle: HireVehicle,
    insurance: Option<Insurance>,
    pickup: NaiveDate,
    return_date: NaiveDate,
) -> Result<CarHireQuote, QuoteError> {
    let days = rental_days(pickup, return_date);
    let too_long = QuoteError::PeriodTooLong { days };

    let vehicle_cost = vehicle.daily_rate().checked_mul(days).ok_or(too_long)?;
    let insurance_cost = match insurance {
        Some(cover) => cover.daily_rate().checked_mul(days).ok_or(too_long)?,
        None => Pence::ZERO,
    };
    let total = vehicle_cost.checked_add(insurance_cost).ok_or(too_long)?;

    Ok(CarHireQuote {
        vehicle,
        insurance,
        days,
        vehicle_cost,
        insurance_cost,
        total,
    })
}
