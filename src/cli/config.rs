use std::fs;
use std::path::PathBuf;

use crate::api::ApiClient;
use crate::config::{api_base_url, ApiConfig};
use crate::session::{FileSessionStore, SessionContext};

pub fn get_config_dir() -> anyhow::Result<PathBuf> {
    let config_dir = if let Ok(custom_dir) = std::env::var("EQUIP_CLI_CONFIG_DIR") {
        PathBuf::from(custom_dir)
    } else {
        let home = std::env::var("HOME").map_err(|_| anyhow::anyhow!("HOME environment variable not set"))?;
        PathBuf::from(home).join(".config").join("equip").join("cli")
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

/// API settings from the environment, with `--server` taking precedence
pub fn api_config(server: Option<&str>) -> anyhow::Result<ApiConfig> {
    let mut api = crate::config::config().api.clone();
    if let Some(server) = server {
        api.base_url = api_base_url(server)
            .map_err(|e| anyhow::anyhow!("Invalid server URL '{}': {}", server, e))?;
    }
    Ok(api)
}

pub fn open_session() -> anyhow::Result<SessionContext> {
    let store = FileSessionStore::new(get_config_dir()?);
    Ok(SessionContext::init(Box::new(store))?)
}

pub fn open_client(api: &ApiConfig) -> anyhow::Result<ApiClient> {
    Ok(ApiClient::new(api, open_session()?)?)
}
