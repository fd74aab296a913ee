use serde_json::json;

use crate::cli::config::open_client;
use crate::cli::utils::{format_table, output_empty_collection};
use crate::cli::OutputFormat;
use crate::config::ApiConfig;

pub async fn handle(api: &ApiConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut client = open_client(api)?;
    let users = client.fetch_users().await?;

    if users.is_empty() {
        return output_empty_collection(&output_format, "users", "No users registered");
    }

    let current = client.session().user_email().map(str::to_ascii_lowercase);

    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "users": users }))?);
        }
        OutputFormat::Text => {
            let headers = vec!["EMAIL".to_string(), "NAME".to_string()];
            let rows: Vec<Vec<String>> = users
                .iter()
                .map(|u| {
                    let marker = if current.as_deref() == Some(u.email.to_ascii_lowercase().as_str()) { "*" } else { " " };
                    vec![format!("{}{}", marker, u.email), u.name.clone()]
                })
                .collect();
            println!("{}", format_table(&headers, &rows));
        }
    }
    Ok(())
}
