use std::{error::Error, fmt};

/// Failure reported by a payment or seat reservation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalError {
    pub service: &'static str,
    pub message: String,
}

impl ExternalError {
    pub fn new<M: Into<String>>(service: &'static str, message: M) -> Self {
        Self {
            service,
            message: message.into(),
        }
    }
}

impl fmt::Display for ExternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ExternalError from {}: {}", self.service, self.message)
    }
}

impl Error for ExternalError {}
