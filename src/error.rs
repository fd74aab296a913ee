// Client Error Types
use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the ledger API or handling the local session
#[derive(Debug, Error)]
pub enum ClientError {
    // 401 from the API; the session has already been torn down
    #[error("Session expired. Please run `equip auth login` again.")]
    SessionExpired,

    #[error("Cannot connect to server. Please log in again.")]
    ConnectionFailed(#[source] reqwest::Error),

    #[error("Please log in to view data.")]
    NotLoggedIn,

    #[error("No user registered for email '{0}'")]
    UnknownUser(String),

    #[error("Upstream error with status: {0}")]
    UpstreamStatus(StatusCode),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Session storage error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// HTTP status associated with the failure, when there is one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::SessionExpired => Some(401),
            ClientError::UpstreamStatus(status) => Some(status.as_u16()),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Stable code for JSON output
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::SessionExpired => "SESSION_EXPIRED",
            ClientError::ConnectionFailed(_) => "CONNECTION_FAILED",
            ClientError::NotLoggedIn => "NOT_LOGGED_IN",
            ClientError::UnknownUser(_) => "UNKNOWN_USER",
            ClientError::UpstreamStatus(_) => "UPSTREAM_ERROR",
            ClientError::Http(_) => "HTTP_ERROR",
            ClientError::Json(_) => "INVALID_JSON",
            ClientError::UrlParse(_) => "INVALID_URL",
            ClientError::Io(_) => "SESSION_STORAGE",
        }
    }

    /// Whether the operator has to log in again before retrying
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            ClientError::SessionExpired | ClientError::ConnectionFailed(_) | ClientError::NotLoggedIn
        )
    }
}
