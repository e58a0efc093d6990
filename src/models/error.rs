use std::{error::Error, fmt, io};

use crate::services::remote::ExternalError;

use super::order::AccountId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidOrderReason {
    InvalidAccount { account_id: AccountId },
    TooManyTickets { requested: u64, max: u32 },
    NoAdultTicket,
}

/// An order that failed validation. Nothing was charged or reserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOrder {
    reason: InvalidOrderReason,
}

impl InvalidOrder {
    pub fn reason(&self) -> &InvalidOrderReason {
        &self.reason
    }

    pub fn is_account_error(&self) -> bool {
        matches!(self.reason, InvalidOrderReason::InvalidAccount { .. })
    }

    pub fn is_composition_error(&self) -> bool {
        !self.is_account_error()
    }
}

impl From<InvalidOrderReason> for InvalidOrder {
    fn from(reason: InvalidOrderReason) -> Self {
        Self { reason }
    }
}

impl fmt::Display for InvalidOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.reason {
            InvalidOrderReason::InvalidAccount { account_id } => {
                write!(f, "Invalid order: account id {account_id} must be positive")
            }
            InvalidOrderReason::TooManyTickets { requested, max } => write!(
                f,
                "Invalid order: {requested} tickets requested, at most {max} allowed"
            ),
            InvalidOrderReason::NoAdultTicket => {
                write!(f, "Invalid order: at least one adult ticket is required")
            }
        }
    }
}

impl Error for InvalidOrder {}

#[derive(Debug)]
pub enum PurchaseError {
    Invalid(InvalidOrder),
    Payment(ExternalError),
    Reservation(ExternalError),
}

impl From<InvalidOrder> for PurchaseError {
    fn from(value: InvalidOrder) -> Self {
        PurchaseError::Invalid(value)
    }
}

impl fmt::Display for PurchaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PurchaseError::Invalid(e) => write!(f, "Purchase failed: {e}"),
            PurchaseError::Payment(e) => write!(f, "Purchase failed during payment: {e}"),
            PurchaseError::Reservation(e) => {
                write!(f, "Purchase failed during seat reservation: {e}")
            }
        }
    }
}

impl Error for PurchaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PurchaseError::Invalid(e) => Some(e),
            PurchaseError::Payment(e) | PurchaseError::Reservation(e) => Some(e),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl From<io::Error> for ConfigError {
    fn from(value: io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read config: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config: {e}"),
            Self::Invalid(e) => write!(f, "Invalid config: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}
