use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Persisted login state. Key names match what the ledger web client stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "userEmail", default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(rename = "userName", default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(rename = "loggedInAt", default, skip_serializing_if = "Option::is_none")]
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user_email.is_none() && self.user_name.is_none()
    }
}

/// Backing storage for a [`Session`]
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Session, ClientError>;
    fn save(&self, session: &Session) -> Result<(), ClientError>;
    fn clear(&self) -> Result<(), ClientError>;
}

/// Stores the session as `session.json` inside the CLI config directory
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(config_dir: impl AsRef<Path>) -> Self {
        Self {
            path: config_dir.as_ref().join("session.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Session, ClientError> {
        if !self.path.exists() {
            return Ok(Session::default());
        }

        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(session) => Ok(session),
            Err(e) => {
                // unreadable session counts as logged out; the next save overwrites it
                tracing::warn!(path = %self.path.display(), error = %e, "discarding corrupt session file");
                Ok(Session::default())
            }
        }
    }

    fn save(&self, session: &Session) -> Result<(), ClientError> {
        let content = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store, used when nothing should touch disk
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Session>,
}

impl MemorySessionStore {
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(session),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.inner.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Session, ClientError> {
        Ok(self.snapshot())
    }

    fn save(&self, session: &Session) -> Result<(), ClientError> {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = session.clone();
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Session::default();
        }
        Ok(())
    }
}

/// Live session handed to the request layer and the commands.
///
/// Created with [`SessionContext::init`] and ended with
/// [`SessionContext::teardown`], which wipes both memory and the store.
pub struct SessionContext {
    store: Box<dyn SessionStore>,
    current: Session,
}

impl SessionContext {
    pub fn init(store: Box<dyn SessionStore>) -> Result<Self, ClientError> {
        let current = store.load()?;
        tracing::debug!(
            has_token = current.token.is_some(),
            user_email = current.user_email.as_deref().unwrap_or("<none>"),
            "session loaded"
        );
        Ok(Self { store, current })
    }

    pub fn session(&self) -> &Session {
        &self.current
    }

    pub fn token(&self) -> Option<&str> {
        self.current.token.as_deref()
    }

    pub fn user_email(&self) -> Option<&str> {
        self.current.user_email.as_deref()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.current.user_name.as_deref()
    }

    /// Access gate for the ledger screens
    pub fn require_login(&self) -> Result<&str, ClientError> {
        self.user_email().ok_or(ClientError::NotLoggedIn)
    }

    pub fn set_token(&mut self, token: impl Into<String>) -> Result<(), ClientError> {
        self.current.token = Some(token.into());
        self.store.save(&self.current)
    }

    pub fn login(
        &mut self,
        token: impl Into<String>,
        user_email: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Result<(), ClientError> {
        self.current = Session {
            token: Some(token.into()),
            user_email: Some(user_email.into()),
            user_name: Some(user_name.into()),
            logged_in_at: Some(Utc::now()),
        };
        self.store.save(&self.current)?;
        tracing::info!(user_email = self.user_email().unwrap_or_default(), "session started");
        Ok(())
    }

    /// Clears every session key
    pub fn teardown(&mut self) -> Result<(), ClientError> {
        self.current = Session::default();
        self.store.clear()?;
        tracing::info!("session cleared");
        Ok(())
    }
}
