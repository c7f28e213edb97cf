// The closed set of ticket categories.
//
// Responsibilities
// - Parse the caller-supplied category string (wire form: ADULT, CHILD, INFANT).
// - Know whether a category consumes a seat. Infants travel on an adult's lap
//   and never take a seat of their own.
//
// Boundaries
// - Unit prices are not fixed here; they live in the injectable PriceTable so
//   tests and deployments can override them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown ticket type: {0}")]
pub struct UnknownCategory(pub String);

impl TicketCategory {
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, Self::Infant)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl FromStr for TicketCategory {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "ADULT" => Ok(Self::Adult),
            "CHILD" => Ok(Self::Child),
            "INFANT" => Ok(Self::Infant),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
