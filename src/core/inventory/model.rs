use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Categories offered by the add-part form. Parts may still carry any string.
pub const CATEGORY_SUGGESTIONS: &[&str] = &[
    "Engine",
    "Transmission",
    "Brakes",
    "Suspension",
    "Electrical",
    "Exhaust",
    "Interior",
    "Exterior",
    "Wheels & Tires",
    "Other",
];

/// Vehicle makes offered by the add-part form.
pub const MAKE_SUGGESTIONS: &[&str] = &[
    "Toyota",
    "Honda",
    "Ford",
    "Chevrolet",
    "BMW",
    "Mercedes-Benz",
    "Audi",
    "Porsche",
    "Volkswagen",
    "Nissan",
    "Mazda",
    "Subaru",
    "Hyundai",
    "Kia",
    "Other",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Condition {
    #[default]
    New,
    Used,
    Refurbished,
    Damaged,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::Used,
        Condition::Refurbished,
        Condition::Damaged,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
            Condition::Refurbished => "Refurbished",
            Condition::Damaged => "Damaged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid part condition: {0:?}")]
pub struct ParseConditionError(pub String);

impl FromStr for Condition {
    type Err = ParseConditionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "New" => Ok(Condition::New),
            "Used" => Ok(Condition::Used),
            "Refurbished" => Ok(Condition::Refurbished),
            "Damaged" => Ok(Condition::Damaged),
            other => Err(ParseConditionError(other.to_string())),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
