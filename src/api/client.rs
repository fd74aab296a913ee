use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, error, warn};
use url::Url;

use super::payload::{parse_users, unwrap_data, UserEntry};
use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::ledger::LedgerKind;
use crate::session::SessionContext;
use crate::view::LedgerSource;

pub const USERS_PATH: &str = "/users";

/// HTTP client for the ledger API.
///
/// Every request carries the session token as a bearer credential. A 401, or a
/// failure to reach the server at all, tears the session down before the error
/// is returned so the next command starts from the login step.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: SessionContext) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
            session,
        })
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionContext {
        &mut self.session
    }

    fn resource_url(&self, path: &str) -> Result<Url, ClientError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, path))?)
    }

    /// GET a resource and return the unwrapped `data` value
    pub async fn get(&mut self, path: &str) -> Result<Value, ClientError> {
        let url = self.resource_url(path)?;

        let mut request = self.http.get(url.clone());
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        debug!(%url, "GET");
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() => {
                warn!(%url, error = %e, "cannot reach ledger API, clearing session");
                self.expire_session();
                return Err(ClientError::ConnectionFailed(e));
            }
            Err(e) => return Err(e.into()),
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(%url, "ledger API rejected credentials, clearing session");
            self.expire_session();
            return Err(ClientError::SessionExpired);
        }
        if !status.is_success() {
            error!(%url, %status, "ledger API request failed");
            return Err(ClientError::UpstreamStatus(status));
        }

        let body: Value = response.json().await?;
        Ok(unwrap_data(body))
    }

    /// The in-memory session is already gone when the store fails to clear,
    /// so the store error is only logged and the request error wins.
    fn expire_session(&mut self) {
        if let Err(e) = self.session.teardown() {
            error!(error = %e, "failed to clear stored session");
        }
    }

    pub async fn fetch_returned(&mut self) -> Result<Value, ClientError> {
        self.get(LedgerKind::Returned.path()).await
    }

    pub async fn fetch_borrowed(&mut self) -> Result<Value, ClientError> {
        self.get(LedgerKind::Borrowed.path()).await
    }

    pub async fn fetch_users(&mut self) -> Result<Vec<UserEntry>, ClientError> {
        let data = self.get(USERS_PATH).await?;
        Ok(parse_users(&data))
    }
}

#[async_trait]
impl LedgerSource for ApiClient {
    async fn fetch_ledger(&mut self, kind: LedgerKind) -> Result<Value, ClientError> {
        match kind {
            LedgerKind::Returned => self.fetch_returned().await,
            LedgerKind::Borrowed => self.fetch_borrowed().await,
        }
    }
}
