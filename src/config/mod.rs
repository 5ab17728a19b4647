#[cfg(feature = "cli")]
pub mod cli;
pub mod lot_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use lot_config::LotConfig;
