use crate::{
    models::order::AccountId,
    services::{
        payment::TicketPaymentService, remote::ExternalError,
        reservation::SeatReservationService,
    },
};

#[derive(Default, Clone)]
pub struct BlackholePaymentService {}

#[async_trait::async_trait]
impl TicketPaymentService for BlackholePaymentService {
    async fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), ExternalError> {
        log::debug!("blackhole payment of {amount} for account {account_id}");
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct BlackholeSeatReservationService {}

#[async_trait::async_trait]
impl SeatReservationService for BlackholeSeatReservationService {
    async fn reserve_seats(
        &self,
        account_id: AccountId,
        seats: u64,
    ) -> Result<(), ExternalError> {
        log::debug!("blackhole reservation of {seats} seats for account {account_id}");
        Ok(())
    }
}
