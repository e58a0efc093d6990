pub mod error;
pub mod order;
pub mod pricing;
pub mod ticket;
