//! Closed sets used to index the fare schedule and timetables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Passenger category for fare lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassengerCategory {
    #[default]
    Adult,
    Child,
}

impl PassengerCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PassengerCategory::Adult => "Adult",
            PassengerCategory::Child => "Child",
        }
    }
}

impl fmt::Display for PassengerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distance band used to price a bus journey.
///
/// Real distances are not known, so the band is picked from the number of
/// stops travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FareTier {
    UpTo3Miles,
    ThreeTo6Miles,
    Over6Miles,
}

impl FareTier {
    pub const ALL: [FareTier; 3] = [
        FareTier::UpTo3Miles,
        FareTier::ThreeTo6Miles,
        FareTier::Over6Miles,
    ];

    /// Pick the tier for a stop-count distance.
    ///
    /// Up to 2 stops is the shortest band, up to 4 the middle band.
    pub fn for_stop_distance(stops: usize) -> Self {
        if stops <= 2 {
            FareTier::UpTo3Miles
        } else if stops <= 4 {
            FareTier::ThreeTo6Miles
        } else {
            FareTier::Over6Miles
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FareTier::UpTo3Miles => "Up to 3 miles",
            FareTier::ThreeTo6Miles => "3 to 6 miles",
            FareTier::Over6Miles => "Over 6 miles",
        }
    }
}

/// Which of the two published timetables applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceDay {
    Weekday,
    Saturday,
}

impl fmt::Display for ServiceDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceDay::Weekday => f.write_str("weekday"),
            ServiceDay::Saturday => f.write_str("saturday"),
        }
    }
}
