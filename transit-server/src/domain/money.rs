//! Prices in pounds sterling.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when a decimal price cannot be represented.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid price {value}: {reason}")]
pub struct InvalidPrice {
    value: f64,
    reason: &'static str,
}

/// A price held as a whole number of pence.
///
/// Timetable data and JSON responses use decimal pounds (`2.45`); inside the
/// crate prices are integers so that summing fares never drifts.
///
/// # Examples
///
/// ```
/// use transit_server::domain::Pence;
///
/// let fare = Pence::from_pounds(2.45).unwrap();
/// assert_eq!(fare.as_pence(), 245);
/// assert_eq!(fare.to_string(), "£2.45");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pence(u32);

impl Pence {
    pub const ZERO: Pence = Pence(0);

    pub const fn new(pence: u32) -> Self {
        Self(pence)
    }

    /// Convert a decimal pound amount, rounding to the nearest penny.
    pub fn from_pounds(pounds: f64) -> Result<Self, InvalidPrice> {
        if !pounds.is_finite() {
            return Err(InvalidPrice {
                value: pounds,
                reason: "must be a finite number",
            });
        }
        if pounds < 0.0 {
            return Err(InvalidPrice {
                value: pounds,
                reason: "must not be negative",
            });
        }
        let pence = (pounds * 100.0).round();
        if pence > u32::MAX as f64 {
            return Err(InvalidPrice {
                value: pounds,
                reason: "too large",
            });
        }
        Ok(Self(pence as u32))
    }

    pub fn as_pence(&self) -> u32 {
        self.0
    }

    pub fn as_pounds(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// `None` if the sum does not fit.
    pub fn checked_add(self, rhs: Pence) -> Option<Pence> {
        self.0.checked_add(rhs.0).map(Pence)
    }

    /// `None` if the product does not fit.
    pub fn checked_mul(self, rhs: u32) -> Option<Pence> {
        self.0.checked_mul(rhs).map(Pence)
    }
}

/// Saturates at the largest representable price.
impl Add for Pence {
    type Output = Pence;

    fn add(self, rhs: Pence) -> Pence {
        Pence(self.0.saturating_add(rhs.0))
    }
}

/// Saturates at the largest representable price.
impl Mul<u32> for Pence {
    type Output = Pence;

    fn mul(self, rhs: u32) -> Pence {
        Pence(self.0.saturating_mul(rhs))
    }
}

impl Sum for Pence {
    fn sum<I: Iterator<Item = Pence>>(iter: I) -> Pence {
        iter.fold(Pence::ZERO, Add::add)
    }
}

impl fmt::Display for Pence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Pence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_pounds())
    }
}

impl<'de> Deserialize<'de> for Pence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pounds = f64::deserialize(deserializer)?;
        Pence::from_pounds(pounds).map_err(serde::de::Error::custom)
    }
}
