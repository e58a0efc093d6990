use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, RwLock,
};

use crate::{
    models::order::AccountId,
    services::{
        payment::TicketPaymentService, remote::ExternalError,
        reservation::SeatReservationService,
    },
};

/// Calls received by an in-memory collaborator, in arrival order.
#[derive(Debug, Clone, Default)]
struct CallLog {
    calls: Arc<RwLock<Vec<(AccountId, u64)>>>,
    failing: Arc<AtomicBool>,
}

impl CallLog {
    fn record(
        &self,
        service: &'static str,
        account_id: AccountId,
        value: u64,
    ) -> Result<(), ExternalError> {
        if self.failing.load(Ordering::SeqCst) {
            log::trace!("{service} refusing call for account {account_id}");
            return Err(ExternalError::new(service, "service unavailable"));
        }
        self.calls
            .write()
            .expect("call log lock")
            .push((account_id, value));
        Ok(())
    }

    fn calls(&self) -> Vec<(AccountId, u64)> {
        self.calls.read().expect("call log lock").clone()
    }
}

/// Records every payment; clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentService {
    log: CallLog,
}

impl InMemoryPaymentService {
    pub fn new() -> Self {
        Default::default()
    }

    /// A service that rejects every payment.
    pub fn failing() -> Self {
        let service = Self::new();
        service.set_failing(true);
        service
    }

    pub fn set_failing(&self, failing: bool) {
        self.log.failing.store(failing, Ordering::SeqCst);
    }

    /// `(account_id, amount)` for each accepted payment.
    pub fn payments(&self) -> Vec<(AccountId, u64)> {
        self.log.calls()
    }
}

#[async_trait::async_trait]
impl TicketPaymentService for InMemoryPaymentService {
    async fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), ExternalError> {
        self.log.record("payment", account_id, amount)
    }
}

/// Records every reservation; clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservationService {
    log: CallLog,
}

impl InMemorySeatReservationService {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn failing() -> Self {
        let service = Self::new();
        service.set_failing(true);
        service
    }

    pub fn set_failing(&self, failing: bool) {
        self.log.failing.store(failing, Ordering::SeqCst);
    }

    /// `(account_id, seats)` for each accepted reservation.
    pub fn reservations(&self) -> Vec<(AccountId, u64)> {
        self.log.calls()
    }
}

#[async_trait::async_trait]
impl SeatReservationService for InMemorySeatReservationService {
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        seats: u64,
    ) -> Result<(), ExternalError> {
        self.log.record("seat reservation", account_id, seats)
    }
}
