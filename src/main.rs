use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use parking_lot_app::utils::{logger, validation::Validate};
use parking_lot_app::{build_handler, CliConfig, LotConfig};

fn main() -> anyhow::Result<()> {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    config.validate()?;

    let lot_config = match &config.config {
        Some(path) => LotConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => LotConfig::default(),
    };
    lot_config.validate()?;

    let mut handler = build_handler(&lot_config);
    let result = {
        let mut out = std::io::stdout().lock();
        handler.process_file(&config.input, &mut out)
    };

    if let Err(e) = result {
        tracing::error!("Run aborted: {} (severity {:?})", e, e.severity());
        println!("Execution error: {}", e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}
