pub mod command;
pub mod handler;

use crate::adapters::memory::InMemoryTicketRepository;
use crate::config::LotConfig;
use crate::core::parking_lot::ParkingLot;
use crate::core::pricing::FlatRatePricing;
use handler::CommandHandler;

pub type DefaultHandler = CommandHandler<InMemoryTicketRepository, FlatRatePricing>;

/// Wires the in-memory store and configured pricing into a handler.
pub fn build_handler(config: &LotConfig) -> DefaultHandler {
    let lot = ParkingLot::with_rules(
        InMemoryTicketRepository::new(),
        config.pricing(),
        config.rules(),
    );
    CommandHandler::new(lot)
}
