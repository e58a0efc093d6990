pub mod payment;
pub mod remote;
pub mod reservation;
pub mod ticket;
