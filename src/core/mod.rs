pub mod free_slots;
pub mod parking_lot;
pub mod pricing;

pub use crate::domain::model::{Slot, SlotStatus, Ticket};
pub use crate::domain::ports::{PricingPolicy, TicketRepository};
pub use crate::utils::error::Result;
