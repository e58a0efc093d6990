use async_trait::async_trait;

use crate::models::order::AccountId;

use super::remote::ExternalError;

#[async_trait]
pub trait TicketPaymentService {
    async fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), ExternalError>;
}
