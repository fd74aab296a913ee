pub mod commands;
pub mod config;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "equip")]
#[command(about = "Equip CLI - Browse the equipment borrow/return ledger")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, global = true, help = "Ledger server URL (overrides EQUIP_API_URL)")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Login, logout and session status")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Equipment you have returned")]
    Returned(commands::ledger::LedgerArgs),

    #[command(about = "Equipment you have borrowed")]
    Borrowed(commands::ledger::LedgerArgs),

    #[command(about = "List registered users")]
    Users,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let api = config::api_config(cli.server.as_deref())?;

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, &api, output_format).await,
        Commands::Returned(args) => {
            commands::ledger::handle(crate::ledger::LedgerKind::Returned, args, &api, output_format).await
        }
        Commands::Borrowed(args) => {
            commands::ledger::handle(crate::ledger::LedgerKind::Borrowed, args, &api, output_format).await
        }
        Commands::Users => commands::users::handle(&api, output_format).await,
    }
}
