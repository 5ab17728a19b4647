use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "parking_lot")]
#[command(about = "Runs parking lot commands from a file")]
#[command(
    after_help = "Exit status: 0 when the file was processed, even if some commands failed; \
                  1 on bad arguments or when the command file cannot be opened or read."
)]
pub struct CliConfig {
    /// File with one command per line
    pub input: PathBuf,

    /// TOML file with pricing and rule overrides
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input.to_string_lossy())?;
        if let Some(config) = &self.config {
            validate_path("config", &config.to_string_lossy())?;
        }
        Ok(())
    }
}
