use once_cell::sync::Lazy;
use std::env;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub api: ApiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Root of the ledger API, already including the `/api` prefix
    pub base_url: Url,
    /// None leaves reqwest's default in place
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("EQUIP_API_URL") {
            match api_base_url(&v) {
                Ok(url) => self.api.base_url = url,
                Err(e) => tracing::warn!("Ignoring invalid EQUIP_API_URL {:?}: {}", v, e),
            }
        }
        if let Ok(v) = env::var("EQUIP_REQUEST_TIMEOUT_SECS") {
            self.api.request_timeout_secs = v.parse().ok();
        }
        if let Ok(v) = env::var("EQUIP_LOG") {
            self.log.level = v;
        }

        self
    }

    pub fn with_base_url(mut self, server: &str) -> Result<Self, url::ParseError> {
        self.api.base_url = api_base_url(server)?;
        Ok(self)
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig {
                base_url: Url::parse("http://localhost:5000/api").expect("static url"),
                request_timeout_secs: None,
            },
            log: LogConfig {
                level: "debug".to_string(),
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig {
                base_url: Url::parse("http://localhost:5000/api").expect("static url"),
                request_timeout_secs: Some(30),
            },
            log: LogConfig {
                level: "warn".to_string(),
            },
        }
    }
}

/// Server root as configured by the operator, with the `/api` prefix appended
pub fn api_base_url(server: &str) -> Result<Url, url::ParseError> {
    let trimmed = server.trim().trim_end_matches('/');
    Url::parse(&format!("{}/api", trimmed))
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}
