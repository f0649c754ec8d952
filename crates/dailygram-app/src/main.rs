use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

use dailygram_app_lib::application::services::ConfigService;
use dailygram_app_lib::presentation::cli::{self, Cli};
use dailygram_app_lib::presentation::error::CommandError;
use dailygram_infrastructure::logging::{init_logger, LoggerOptions};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match start(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("[cli] {}", err);
            eprintln!(
                "{}",
                serde_json::to_string(&err).unwrap_or_else(|_| err.to_string())
            );
            ExitCode::FAILURE
        }
    }
}

async fn start(cli: Cli) -> Result<String, CommandError> {
    let config_dir = cli.config_dir()?;
    let config = Arc::new(ConfigService::new(&config_dir)?);

    // stdout carries the JSON result, so console logging stays off.
    let options = LoggerOptions::new(config_dir.join("logs"))
        .with_level(config.get_log_level().as_str())
        .with_stdout(false);
    if let Err(e) = init_logger(options) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    cli::run(cli, config).await
}
