//! Bus routes and their departure schedules.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::{DepartureTime, ServiceDay};

use super::ordered::ordered_entries;

/// Departure times for one service day, keyed by stop name.
///
/// Entries keep the order they were listed in the timetable document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    entries: Vec<(String, Vec<DepartureTime>)>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Departure times at `stop`, or an empty slice if none are scheduled.
    pub fn departures(&self, stop: &str) -> &[DepartureTime] {
        self.entries
            .iter()
            .find(|(name, _)| name == stop)
            .map(|(_, times)| times.as_slice())
            .unwrap_or(&[])
    }

    /// Set the departure times at `stop`, replacing any existing entry.
    pub fn insert(&mut self, stop: impl Into<String>, times: Vec<DepartureTime>) {
        let stop = stop.into();
        match self.entries.iter_mut().find(|(name, _)| *name == stop) {
            Some((_, existing)) => *existing = times,
            None => self.entries.push((stop, times)),
        }
    }

    /// Stop names that have an entry in this schedule.
    pub fn stops(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ordered_entries::serialize(&self.entries, serializer)
    }
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self {
            entries: ordered_entries::deserialize(deserializer)?,
        })
    }
}

/// The weekday and Saturday timetables of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedules {
    #[serde(default)]
    pub weekday: Schedule,
    #[serde(default)]
    pub saturday: Schedule,
}

impl Schedules {
    pub fn for_day(&self, day: ServiceDay) -> &Schedule {
        match day {
            ServiceDay::Weekday => &self.weekday,
            ServiceDay::Saturday => &self.saturday,
        }
    }

    fn for_day_mut(&mut self, day: ServiceDay) -> &mut Schedule {
        match day {
            ServiceDay::Weekday => &mut self.weekday,
            ServiceDay::Saturday => &mut self.saturday,
        }
    }
}

/// Departures from one stop on both service days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Departures {
    pub weekday: Vec<DepartureTime>,
    pub saturday: Vec<DepartureTime>,
}

/// A named bus route.
///
/// The stop sequence is the only source of direction: a stop earlier in the
/// list is "before" a later one. Return legs are listed as separate stops
/// (e.g. "Jamestown (Return)").
///
/// The route identifier is the key of the route in the timetable document,
/// so it is not part of the serialized route body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    #[serde(skip)]
    id: String,
    name: String,
    stops: Vec<String>,
    #[serde(default)]
    schedules: Schedules,
}

impl Route {
    /// Create a route with no scheduled departures.
    pub fn new<I, S>(id: impl Into<String>, name: impl Into<String>, stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            stops: stops.into_iter().map(Into::into).collect(),
            schedules: Schedules::default(),
        }
    }

    /// Add departure times at a stop for one service day.
    pub fn with_departures(
        mut self,
        day: ServiceDay,
        stop: impl Into<String>,
        times: Vec<DepartureTime>,
    ) -> Self {
        self.schedules.for_day_mut(day).insert(stop, times);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn set_id(&mut self, id: String) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    pub fn schedules(&self) -> &Schedules {
        &self.schedules
    }

    /// Index of the first occurrence of `stop` in the stop sequence.
    pub fn position(&self, stop: &str) -> Option<usize> {
        self.stops.iter().position(|s| s == stop)
    }

    /// Whether the route calls at `stop`.
    pub fn serves(&self, stop: &str) -> bool {
        self.position(stop).is_some()
    }

    /// Scheduled departures from `stop` on both service days.
    pub fn departures(&self, stop: &str) -> Departures {
        Departures {
            weekday: self.schedules.weekday.departures(stop).to_vec(),
            saturday: self.schedules.saturday.departures(stop).to_vec(),
        }
    }
}
