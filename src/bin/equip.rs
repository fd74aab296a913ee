use clap::Parser;
use equip_ledger::cli::utils::{error_code_of, output_error};
use equip_ledger::cli::{Cli, OutputFormat};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = equip_ledger::config::config();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting equip in {:?} mode against {}", config.environment, config.api.base_url);

    let cli = Cli::parse();
    let output_format = OutputFormat::from_cli(&cli);

    if let Err(e) = equip_ledger::cli::run(cli).await {
        let message = match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => format!("{e:?}"),
            _ => e.to_string(),
        };
        output_error(&output_format, &message, error_code_of(&e))?;
        std::process::exit(1);
    }

    Ok(())
}
