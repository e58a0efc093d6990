use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::models::{error::ConfigError, pricing::PriceTable};

pub const DEFAULT_MAX_TICKETS: u32 = 25;

/// Rules applied to every purchase.
///
/// ```json
/// { "max_tickets": 25, "prices": { "adult": 25, "child": 15, "infant": 0 } }
/// ```
///
/// Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketServiceConfig {
    pub max_tickets: u32,
    pub prices: PriceTable,
}

impl Default for TicketServiceConfig {
    fn default() -> Self {
        Self {
            max_tickets: DEFAULT_MAX_TICKETS,
            prices: PriceTable::default(),
        }
    }
}

impl TicketServiceConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tickets == 0 {
            return Err(ConfigError::Invalid(
                "max_tickets must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
