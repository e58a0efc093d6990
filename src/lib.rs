pub mod config;
pub mod gateways;
pub mod models;
pub mod services;

pub use config::TicketServiceConfig;
pub use models::{
    error::{InvalidOrder, InvalidOrderReason, PurchaseError},
    order::{AccountId, Order},
    pricing::{price_order, PriceTable, PricingResult},
    ticket::{TicketCategory, TicketRequest},
};
pub use services::{
    payment::TicketPaymentService,
    remote::ExternalError,
    reservation::SeatReservationService,
    ticket::{validate_order, TicketService},
};
