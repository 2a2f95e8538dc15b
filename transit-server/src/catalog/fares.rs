//! Bus fare schedule.

use serde::{Deserialize, Serialize};

use crate::domain::{FareTier, PassengerCategory, Pence};

/// Prices for the three distance bands of one passenger category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareBands {
    pub up_to_3_miles: Pence,
    #[serde(rename = "3_to_6_miles")]
    pub three_to_6_miles: Pence,
    pub over_6_miles: Pence,
}

impl FareBands {
    pub fn new(up_to_3_miles: Pence, three_to_6_miles: Pence, over_6_miles: Pence) -> Self {
        Self {
            up_to_3_miles,
            three_to_6_miles,
            over_6_miles,
        }
    }

    pub fn price(&self, tier: FareTier) -> Pence {
        match tier {
            FareTier::UpTo3Miles => self.up_to_3_miles,
            FareTier::ThreeTo6Miles => self.three_to_6_miles,
            FareTier::Over6Miles => self.over_6_miles,
        }
    }
}

/// Fares by passenger category and distance band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareSchedule {
    pub adult: FareBands,
    pub child: FareBands,

    /// Oldest age that still travels on a child fare. Shown to passengers,
    /// never checked.
    pub child_age_limit: u8,
}

impl FareSchedule {
    pub fn new(adult: FareBands, child: FareBands, child_age_limit: u8) -> Self {
        Self {
            adult,
            child,
            child_age_limit,
        }
    }

    pub fn bands(&self, category: PassengerCategory) -> &FareBands {
        match category {
            PassengerCategory::Adult => &self.adult,
            PassengerCategory::Child => &self.child,
        }
    }

    pub fn price(&self, category: PassengerCategory, tier: FareTier) -> Pence {
        self.bands(category).price(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> FareSchedule {
        FareSchedule::new(
            FareBands::new(Pence::new(245), Pence::new(315), Pence::new(360)),
            FareBands::new(Pence::new(120), Pence::new(150), Pence::new(180)),
            10,
        )
    }

    #[test]
    fn price_by_category_and_tier() {
        let fares = schedule();
        assert_eq!(
            fares.price(PassengerCategory::Adult, FareTier::UpTo3Miles),
            Pence::new(245)
        );
        assert_eq!(
            fares.price(PassengerCategory::Adult, FareTier::Over6Miles),
            Pence::new(360)
        );
        assert_eq!(
            fares.price(PassengerCategory::Child, FareTier::ThreeTo6Miles),
            Pence::new(150)
        );
    }

    #[test]
    fn deserialize_document_keys() {
        let json = r#"{
            "adult": {"up_to_3_miles": 2.45, "3_to_6_miles": 3.15, "over_6_miles": 3.60},
            "child": {"up_to_3_miles": 1.20, "3_to_6_miles": 1.50, "over_6_miles": 1.80},
            "child_age_limit": 10
        }"#;
        let fares: FareSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(fares, schedule());
    }

    #[test]
    fn serialize_keeps_document_keys() {
        let value = serde_json::to_value(schedule()).unwrap();
        assert_eq!(value["adult"]["3_to_6_miles"], 3.15);
        assert_eq!(value["child"]["up_to_3_miles"], 1.2);
        assert_eq!(value["child_age_limit"], 10);
    }
}
