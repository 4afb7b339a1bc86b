//! # Auth Session
//!
//! Login state and its on-disk record.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Session Lifecycle                          │
//! │                                                                 │
//! │   app start ──► SessionStore::load ──► LoggedOut | LoggedIn     │
//! │                                                                 │
//! │   LoggedOut ──sign-in succeeds──► LoggedIn { user_id }          │
//! │                │                        │                       │
//! │                │ save record            │ sign-out              │
//! │                ▼                        ▼                       │
//! │          session.toml            delete session.toml            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is written on every transition, so a restart resumes exactly
//! where the clerk left off. A missing or unreadable file simply means
//! logged out.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{ClientError, ClientResult};

// =============================================================================
// Session State
// =============================================================================

/// The client's view of who (if anyone) is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSession {
    /// No authenticated user. Protected screens must redirect to sign-in.
    LoggedOut,
    /// An authenticated user identified by the server-issued id.
    LoggedIn { user_id: String },
}

impl AuthSession {
    /// True when a user is signed in.
    pub fn is_logged_in(&self) -> bool {
        matches!(self, AuthSession::LoggedIn { .. })
    }

    /// Returns the signed-in user's id, if any.
    pub fn user_id(&self) -> Option<&str> {
        match self {
            AuthSession::LoggedIn { user_id } => Some(user_id),
            AuthSession::LoggedOut => None,
        }
    }

    /// Transition for a successful sign-in.
    pub fn login(&mut self, user_id: String) {
        info!(user_id = %user_id, "Session: logged in");
        *self = AuthSession::LoggedIn { user_id };
    }

    /// Transition for sign-out.
    pub fn logout(&mut self) {
        info!("Session: logged out");
        *self = AuthSession::LoggedOut;
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        AuthSession::LoggedOut
    }
}

// =============================================================================
// On-Disk Record
// =============================================================================

/// Serialized form of the session.
///
/// ```toml
/// is_logged_in = true
/// user_id = "665f1c2e9b1d"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionRecord {
    #[serde(default)]
    is_logged_in: bool,
    #[serde(default)]
    user_id: Option<String>,
}

impl From<&AuthSession> for SessionRecord {
    fn from(session: &AuthSession) -> Self {
        match session {
            AuthSession::LoggedOut => SessionRecord {
                is_logged_in: false,
                user_id: None,
            },
            AuthSession::LoggedIn { user_id } => SessionRecord {
                is_logged_in: true,
                user_id: Some(user_id.clone()),
            },
        }
    }
}

impl From<SessionRecord> for AuthSession {
    fn from(record: SessionRecord) -> Self {
        match (record.is_logged_in, record.user_id) {
            (true, Some(user_id)) if !user_id.is_empty() => AuthSession::LoggedIn { user_id },
            _ => AuthSession::LoggedOut,
        }
    }
}

// =============================================================================
// Session Store
// =============================================================================

/// Reads and writes the session record at a fixed path.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store at an explicit path.
    pub fn new(path: PathBuf) -> Self {
        SessionStore { path }
    }

    /// Creates a store at the platform data directory.
    pub fn at_default_path() -> ClientResult<Self> {
        let path = Self::default_session_path().ok_or_else(|| {
            ClientError::SessionLoadFailed("No data directory available".into())
        })?;
        Ok(SessionStore { path })
    }

    fn default_session_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "atlas", "retail")
            .map(|dirs| dirs.data_dir().join("session.toml"))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted session.
    ///
    /// A missing file is not an error: it means nobody is signed in.
    /// A corrupt file is logged and treated the same way.
    pub fn load(&self) -> AuthSession {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = ?self.path, "No session file, starting logged out");
                return AuthSession::LoggedOut;
            }
            Err(e) => {
                warn!(path = ?self.path, "Failed to read session file: {}", e);
                return AuthSession::LoggedOut;
            }
        };

        match toml::from_str::<SessionRecord>(&contents) {
            Ok(record) => {
                let session = AuthSession::from(record);
                debug!(logged_in = session.is_logged_in(), "Session restored");
                session
            }
            Err(e) => {
                warn!(path = ?self.path, "Corrupt session file: {}", e);
                AuthSession::LoggedOut
            }
        }
    }

    /// Persists the session after a transition.
    ///
    /// Logged out sessions delete the file rather than writing a tombstone.
    pub fn save(&self, session: &AuthSession) -> ClientResult<()> {
        match session {
            AuthSession::LoggedOut => self.clear(),
            AuthSession::LoggedIn { .. } => {
                if let Some(parent) = self.path.parent() {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| ClientError::SessionSaveFailed(e.to_string()))?;
                }

                let record = SessionRecord::from(session);
                let contents = toml::to_string_pretty(&record)?;
                std::fs::write(&self.path, contents)
                    .map_err(|e| ClientError::SessionSaveFailed(e.to_string()))?;

                debug!(path = ?self.path, "Session saved");
                Ok(())
            }
        }
    }

    /// Removes the session file if present.
    pub fn clear(&self) -> ClientResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = ?self.path, "Session file removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::SessionSaveFailed(e.to_string())),
        }
    }
}
