use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    // Infants sit on an adult's lap.
    pub fn occupies_seat(&self) -> bool {
        match self {
            Self::Adult | Self::Child => true,
            Self::Infant => false,
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Adult => write!(f, "ADULT"),
            Self::Child => write!(f, "CHILD"),
            Self::Infant => write!(f, "INFANT"),
        }
    }
}

impl FromStr for TicketCategory {
    type Err = ParseTicketRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adult" => Ok(Self::Adult),
            "child" => Ok(Self::Child),
            "infant" => Ok(Self::Infant),
            _ => Err(ParseTicketRequestError::UnknownCategory(s.to_string())),
        }
    }
}

/// A number of tickets of one category within an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    category: TicketCategory,
    count: u32,
}

impl TicketRequest {
    pub fn new(category: TicketCategory, count: u32) -> Self {
        Self { category, count }
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl fmt::Display for TicketRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.category, self.count)
    }
}

/// Accepts `adult=2` or `child:1`.
impl FromStr for TicketRequest {
    type Err = ParseTicketRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, count) = s
            .split_once(['=', ':'])
            .ok_or_else(|| ParseTicketRequestError::Malformed(s.to_string()))?;
        let count = count
            .trim()
            .parse::<u32>()
            .map_err(|_| ParseTicketRequestError::InvalidCount(count.to_string()))?;
        Ok(Self::new(category.parse()?, count))
    }
}

#[derive(Debug, PartialEq)]
pub enum ParseTicketRequestError {
    Malformed(String),
    UnknownCategory(String),
    InvalidCount(String),
}

impl fmt::Display for ParseTicketRequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Malformed(s) => {
                write!(f, "Failed to parse ticket request {s:?}: expected <category>=<count>")
            }
            Self::UnknownCategory(s) => {
                write!(f, "Failed to parse ticket request: unknown category {s:?}")
            }
            Self::InvalidCount(s) => {
                write!(f, "Failed to parse ticket request: invalid count {s:?}")
            }
        }
    }
}

impl Error for ParseTicketRequestError {}
