//! Planner configuration.

use chrono::Duration;

/// Policy constants for journey planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Stops where a passenger may change buses, tried in this order.
    ///
    /// This is a fixed whitelist, not derived from which stops are shared
    /// between routes.
    pub interchanges: Vec<String>,

    /// Assumed travel time between consecutive stops (minutes).
    pub minutes_per_stop: i64,

    /// Extra time added to a connection for changing buses (minutes).
    pub transfer_mins: i64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new<I, S>(interchanges: I, minutes_per_stop: i64, transfer_mins: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            interchanges: interchanges.into_iter().map(Into::into).collect(),
            minutes_per_stop,
            transfer_mins,
        }
    }

    /// Estimated riding time for travelling `stops` stops along a route.
    pub fn ride_time(&self, stops: usize) -> Duration {
        Duration::minutes(stops as i64 * self.minutes_per_stop)
    }

    /// Returns the transfer allowance as a Duration.
    pub fn transfer_time(&self) -> Duration {
        Duration::minutes(self.transfer_mins)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            interchanges: vec!["Jamestown".to_string(), "Longwood".to_string()],
            minutes_per_stop: 15,
            transfer_mins: 30,
        }
    }
}
