//! Timetable departure times.
//!
//! The timetable lists departures as "HH:MM" strings. Buses on the island
//! never run past midnight, so a departure is a plain time of day with no
//! date attached.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A scheduled departure time of day.
///
/// # Examples
///
/// ```
/// use transit_server::domain::DepartureTime;
///
/// let time = DepartureTime::parse_hhmm("07:30").unwrap();
/// assert_eq!(time.to_string(), "07:30");
/// assert!(DepartureTime::parse_hhmm("7:30").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DepartureTime(NaiveTime);

impl DepartureTime {
    /// Create a departure time from hour and minute.
    ///
    /// Returns `None` if either component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_server::domain::DepartureTime;
    ///
    /// assert!(DepartureTime::parse_hhmm("00:00").is_ok());
    /// assert!(DepartureTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(DepartureTime::parse_hhmm("0930").is_err());
    /// assert!(DepartureTime::parse_hhmm("09:3").is_err());
    /// assert!(DepartureTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the underlying time of day.
    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Debug for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DepartureTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for DepartureTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DepartureTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DepartureTime::parse_hhmm(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = DepartureTime::parse_hhmm("00:00").unwrap();
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);

        let t = DepartureTime::parse_hhmm("23:59").unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);

        let t = DepartureTime::parse_hhmm("07:30").unwrap();
        assert_eq!(t.hour(), 7);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn reject_bad_format() {
        assert!(DepartureTime::parse_hhmm("").is_err());
        assert!(DepartureTime::parse_hhmm("7:30").is_err());
        assert!(DepartureTime::parse_hhmm("07-30").is_err());
        assert!(DepartureTime::parse_hhmm("07:3a").is_err());
        assert!(DepartureTime::parse_hhmm("07:30:00").is_err());
    }

    #[test]
    fn reject_out_of_range() {
        assert!(DepartureTime::parse_hhmm("24:00").is_err());
        assert!(DepartureTime::parse_hhmm("12:60").is_err());
    }

    #[test]
    fn ordering_follows_time_of_day() {
        let early = DepartureTime::parse_hhmm("08:15").unwrap();
        let late = DepartureTime::parse_hhmm("14:00").unwrap();
        assert!(early < late);
    }

    #[test]
    fn display_pads_with_zeros() {
        let t = DepartureTime::from_hm(9, 5).unwrap();
        assert_eq!(t.to_string(), "09:05");
        assert_eq!(format!("{:?}", t), "DepartureTime(09:05)");
    }

    #[test]
    fn serde_uses_hhmm_strings() {
        let t: DepartureTime = serde_json::from_str("\"16:45\"").unwrap();
        assert_eq!(t, DepartureTime::from_hm(16, 45).unwrap());
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"16:45\"");

        let err = serde_json::from_str::<DepartureTime>("\"16.45\"").unwrap_err();
        assert!(err.to_string().contains("invalid time"));
    }
}
