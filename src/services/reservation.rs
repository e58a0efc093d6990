use async_trait::async_trait;

use crate::models::order::AccountId;

use super::remote::ExternalError;

#[async_trait]
pub trait SeatReservationService {
    async fn reserve_seats(&self, account_id: AccountId, seats: u64)
        -> Result<(), ExternalError>;
}
