//! Authentication state shared across the app.
//!
//! Wraps the persisted session: the store is read once at startup and
//! written back on every login/logout transition, so a restart resumes
//! where the clerk left off.

use std::sync::{Arc, Mutex};

use atlas_client::{AuthSession, ClientResult, SessionStore};

/// Thread-safe session holder bound to its on-disk store.
#[derive(Debug, Clone)]
pub struct AuthState {
    session: Arc<Mutex<AuthSession>>,
    store: Arc<SessionStore>,
}

impl AuthState {
    /// Bootstraps from the store, restoring any persisted session.
    pub fn from_store(store: SessionStore) -> Self {
        let session = store.load();
        AuthState {
            session: Arc::new(Mutex::new(session)),
            store: Arc::new(store),
        }
    }

    /// Current session snapshot.
    pub fn current(&self) -> AuthSession {
        self.session.lock().expect("Session mutex poisoned").clone()
    }

    /// True when a user is signed in.
    pub fn is_logged_in(&self) -> bool {
        self.session
            .lock()
            .expect("Session mutex poisoned")
            .is_logged_in()
    }

    /// Records a successful sign-in and persists it.
    pub fn login(&self, user_id: String) -> ClientResult<()> {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        session.login(user_id);
        self.store.save(&session)
    }

    /// Signs out and removes the persisted record.
    pub fn logout(&self) -> ClientResult<()> {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        session.logout();
        self.store.save(&session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_state(name: &str) -> AuthState {
        let mut path = std::env::temp_dir();
        path.push(format!("atlas-auth-test-{}-{}", std::process::id(), name));
        path.push("session.toml");
        let _ = std::fs::remove_file(&path);
        AuthState::from_store(SessionStore::new(path))
    }

    fn cleanup(state: &AuthState) {
        if let Some(parent) = state.store.path().parent() {
            let _ = std::fs::remove_dir_all(parent);
        }
    }

    #[test]
    fn test_starts_logged_out_without_store_file() {
        let state = temp_state("fresh");
        assert!(!state.is_logged_in());
        assert_eq!(state.current(), AuthSession::LoggedOut);
        cleanup(&state);
    }

    #[test]
    fn test_login_persists_across_restart() {
        let state = temp_state("persist");
        state.login("665f1c2e9b1d".to_string()).unwrap();
        assert!(state.is_logged_in());

        // A new state over the same store restores the session.
        let reborn = AuthState::from_store(SessionStore::new(state.store.path().to_path_buf()));
        assert_eq!(
            reborn.current(),
            AuthSession::LoggedIn {
                user_id: "665f1c2e9b1d".to_string()
            }
        );
        cleanup(&state);
    }

    #[test]
    fn test_logout_clears_persisted_session() {
        let state = temp_state("logout");
        state.login("665f1c2e9b1d".to_string()).unwrap();
        state.logout().unwrap();

        assert!(!state.is_logged_in());
        assert!(!state.store.path().exists());
        cleanup(&state);
    }
}
