use clap::Subcommand;
use serde_json::json;

use crate::api::payload::find_user;
use crate::cli::config::{open_client, open_session};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::ApiConfig;
use crate::error::ClientError;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Start a session")]
    Login {
        #[arg(help = "Email registered in the users sheet")]
        email: String,
        #[arg(long, help = "Bearer token issued by the ledger server (defaults to EQUIP_TOKEN)")]
        token: Option<String>,
        #[arg(long, help = "Display name; looked up from the users sheet when omitted")]
        name: Option<String>,
    },

    #[command(about = "Clear the local session")]
    Logout,

    #[command(about = "Show current session")]
    Status,
}

pub async fn handle(cmd: AuthCommands, api: &ApiConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { email, token, name } => {
            let token = match token.or_else(|| std::env::var("EQUIP_TOKEN").ok()) {
                Some(t) if !t.trim().is_empty() => t.trim().to_string(),
                _ => anyhow::bail!("A token is required: pass --token or set EQUIP_TOKEN"),
            };

            let mut client = open_client(api)?;
            client.session_mut().set_token(token.clone())?;

            let name = match name {
                Some(name) => name,
                None => {
                    let users = client.fetch_users().await?;
                    match find_user(&users, &email) {
                        Some(user) => user.name.clone(),
                        None => {
                            client.session_mut().teardown()?;
                            return Err(ClientError::UnknownUser(email).into());
                        }
                    }
                }
            };

            client.session_mut().login(token, email.trim(), name.trim())?;

            output_success(
                &output_format,
                &format!("Logged in as {} <{}>", name.trim(), email.trim()),
                Some(json!({ "userEmail": email.trim(), "userName": name.trim() })),
            )
        }
        AuthCommands::Logout => {
            let mut session = open_session()?;
            session.teardown()?;
            output_success(&output_format, "Logged out", None)
        }
        AuthCommands::Status => {
            let session = open_session()?;
            let current = session.session();

            match output_format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "logged_in": current.user_email.is_some(),
                            "userEmail": current.user_email,
                            "userName": current.user_name,
                            "has_token": current.token.is_some(),
                            "loggedInAt": current.logged_in_at,
                        }))?
                    );
                }
                OutputFormat::Text => match &current.user_email {
                    Some(email) => {
                        println!("Logged in: {}", email);
                        println!("Name: {}", current.user_name.as_deref().unwrap_or("<unknown>"));
                        println!("Token: {}", if current.token.is_some() { "present" } else { "missing" });
                        if let Some(at) = current.logged_in_at {
                            println!("Since: {}", at.format("%Y-%m-%d %H:%M"));
                        }
                    }
                    None => println!("Not logged in"),
                },
            }
            Ok(())
        }
    }
}
