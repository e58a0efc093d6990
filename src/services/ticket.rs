use crate::{
    config::TicketServiceConfig,
    models::{
        error::{InvalidOrder, InvalidOrderReason, PurchaseError},
        order::{AccountId, Order},
        pricing::price_order,
        ticket::{TicketCategory, TicketRequest},
    },
};

use super::{payment::TicketPaymentService, reservation::SeatReservationService};

/// Checks the account first, then the ticket cap, then the adult rule, and
/// reports the first rule that fails.
pub fn validate_order(order: &Order, config: &TicketServiceConfig) -> Result<(), InvalidOrder> {
    if order.account_id <= 0 {
        return Err(InvalidOrderReason::InvalidAccount {
            account_id: order.account_id,
        }
        .into());
    }

    let requested = order.total_tickets();
    if requested > u64::from(config.max_tickets) {
        return Err(InvalidOrderReason::TooManyTickets {
            requested,
            max: config.max_tickets,
        }
        .into());
    }

    if order.count(TicketCategory::Adult) == 0 {
        return Err(InvalidOrderReason::NoAdultTicket.into());
    }

    Ok(())
}

/// Validates and prices ticket orders, then charges the account and reserves
/// the seats.
///
/// Payment happens before reservation. A failed payment stops the purchase,
/// but a failed reservation does not refund the payment.
pub struct TicketService<P, R> {
    config: TicketServiceConfig,
    payment: P,
    reservation: R,
}

impl<P, R> TicketService<P, R>
where
    P: TicketPaymentService + Send + Sync,
    R: SeatReservationService + Send + Sync,
{
    pub fn new(payment: P, reservation: R) -> Self {
        Self::with_config(TicketServiceConfig::default(), payment, reservation)
    }

    pub fn with_config(config: TicketServiceConfig, payment: P, reservation: R) -> Self {
        Self {
            config,
            payment,
            reservation,
        }
    }

    pub fn config(&self) -> &TicketServiceConfig {
        &self.config
    }

    pub async fn purchase(
        &self,
        account_id: AccountId,
        requests: impl IntoIterator<Item = TicketRequest>,
    ) -> Result<(), PurchaseError> {
        let order = Order::new(account_id, requests.into_iter().collect());
        log::trace!("purchase for account {account_id} with {:?}", order.requests);

        if let Err(e) = validate_order(&order, &self.config) {
            log::warn!("rejected purchase for account {account_id}: {e}");
            return Err(e.into());
        }

        let pricing = price_order(&order, &self.config.prices);
        log::debug!(
            "charging account {account_id} {} for {} seats",
            pricing.total_charge,
            pricing.total_seats
        );

        self.payment
            .make_payment(account_id, pricing.total_charge)
            .await
            .map_err(PurchaseError::Payment)?;
        self.reservation
            .reserve_seats(account_id, pricing.total_seats)
            .await
            .map_err(PurchaseError::Reservation)?;

        log::info!(
            "purchase completed for account {account_id}: charged {}, reserved {} seats",
            pricing.total_charge,
            pricing.total_seats
        );
        Ok(())
    }
}
