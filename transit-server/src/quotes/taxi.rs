//! Taxi fare estimates.
//!
//! There is no road network: distances come from a short table of known
//! landmark pairs, with a flat default for everything else.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Pence;

/// Pickup and drop-off points offered for taxi bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Landmark {
    #[serde(rename = "Jamestown Wharf")]
    JamestownWharf,
    #[serde(rename = "Longwood House")]
    LongwoodHouse,
    Airport,
    #[serde(rename = "Half Tree Hollow")]
    HalfTreeHollow,
    #[serde(rename = "St Pauls Cathedral")]
    StPaulsCathedral,
    #[serde(rename = "Sandy Bay Beach")]
    SandyBayBeach,
    #[serde(rename = "Blue Hill")]
    BlueHill,
    Levelwood,
    #[serde(rename = "Plantation House")]
    PlantationHouse,
    #[serde(rename = "Diana's Peak")]
    DianasPeak,
    #[serde(rename = "High Knoll Fort")]
    HighKnollFort,
    #[serde(rename = "Ladder Hill")]
    LadderHill,
    #[serde(rename = "Rosemary Plain")]
    RosemaryPlain,
    #[serde(rename = "The Briars")]
    TheBriars,
}

impl Landmark {
    pub const ALL: [Landmark; 14] = [
        Landmark::JamestownWharf,
        Landmark::LongwoodHouse,
        Landmark::Airport,
        Landmark::HalfTreeHollow,
        Landmark::StPaulsCathedral,
        Landmark::SandyBayBeach,
        Landmark::BlueHill,
        Landmark::Levelwood,
        Landmark::PlantationHouse,
        Landmark::DianasPeak,
        Landmark::HighKnollFort,
        Landmark::LadderHill,
        Landmark::RosemaryPlain,
        Landmark::TheBriars,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Landmark::JamestownWharf => "Jamestown Wharf",
            Landmark::LongwoodHouse => "Longwood House",
            Landmark::Airport => "Airport",
            Landmark::HalfTreeHollow => "Half Tree Hollow",
            Landmark::StPaulsCathedral => "St Pauls Cathedral",
            Landmark::SandyBayBeach => "Sandy Bay Beach",
            Landmark::BlueHill => "Blue Hill",
            Landmark::Levelwood => "Levelwood",
            Landmark::PlantationHouse => "Plantation House",
            Landmark::DianasPeak => "Diana's Peak",
            Landmark::HighKnollFort => "High Knoll Fort",
            Landmark::LadderHill => "Ladder Hill",
            Landmark::RosemaryPlain => "Rosemary Plain",
            Landmark::TheBriars => "The Briars",
        }
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Taxi vehicle class, which sets the base rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxiVehicle {
    Sedan,
    Suv,
    Minivan,
}

impl TaxiVehicle {
    pub fn base_rate(&self) -> Pence {
        match self {
            TaxiVehicle::Sedan => Pence::new(350),
            TaxiVehicle::Suv => Pence::new(450),
            TaxiVehicle::Minivan => Pence::new(550),
        }
    }
}

/// A distance in tenths of a mile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TenthsOfMile(pub u32);

impl TenthsOfMile {
    pub fn as_miles(&self) -> f64 {
        self.0 as f64 / 10.0
    }
}

/// Distance assumed for any pair not in [`KNOWN_DISTANCES`].
pub const DEFAULT_DISTANCE: TenthsOfMile = TenthsOfMile(50);

/// Charge per tenth of a mile (80p per mile).
pub const RATE_PER_TENTH: Pence = Pence::new(8);

/// Known landmark-to-landmark distances. Order within a pair is irrelevant.
const KNOWN_DISTANCES: [(Landmark, Landmark, TenthsOfMile); 4] = [
    (Landmark::JamestownWharf, Landmark::Airport, TenthsOfMile(85)),
    (Landmark::JamestownWharf, Landmark::LongwoodHouse, TenthsOfMile(52)),
    (Landmark::JamestownWharf, Landmark::HalfTreeHollow, TenthsOfMile(21)),
    (Landmark::Airport, Landmark::LongwoodHouse, TenthsOfMile(34)),
];

/// Road distance between two landmarks.
pub fn distance_between(a: Landmark, b: Landmark) -> TenthsOfMile {
    KNOWN_DISTANCES
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, d)| *d)
        .unwrap_or(DEFAULT_DISTANCE)
}

/// An estimated taxi fare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxiQuote {
    pub distance: TenthsOfMile,
    pub fare: Pence,
}

/// Estimate the fare for a taxi ride.
pub fn estimate_taxi_fare(pickup: Landmark, dropoff: Landmark, vehicle: TaxiVehicle) -> TaxiQuote {
    let distance = distance_between(pickup, dropoff);
    TaxiQuote {
        distance,
        fare: vehicle.base_rate() + RATE_PER_TENTH * distance.0,
    }
}
