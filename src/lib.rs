pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::InMemoryTicketRepository;
pub use app::command::Command;
pub use app::handler::{CommandHandler, Outcome, RunSummary};
pub use app::build_handler;
pub use config::LotConfig;
pub use crate::core::{parking_lot::ParkingLot, pricing::FlatRatePricing};
pub use utils::error::{ParkingError, Result};
