use serde::{Deserialize, Serialize};

use super::ticket::{TicketCategory, TicketRequest};

// Signed so that zero and negative identifiers reach validation.
pub type AccountId = i64;

/// One purchase attempt. Built fresh by the caller and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub account_id: AccountId,
    pub requests: Vec<TicketRequest>,
}

impl Order {
    pub fn new(account_id: AccountId, requests: Vec<TicketRequest>) -> Self {
        Self {
            account_id,
            requests,
        }
    }

    pub fn count(&self, category: TicketCategory) -> u64 {
        self.requests
            .iter()
            .filter(|r| r.category() == category)
            .map(|r| u64::from(r.count()))
            .sum()
    }

    pub fn total_tickets(&self) -> u64 {
        self.requests.iter().map(|r| u64::from(r.count())).sum()
    }
}
