//! # Auth Commands
//!
//! Registration, sign-in, and sign-out.
//!
//! ## Session Handling
//! Sign-in stores the server-issued user id in [`AuthState`], which
//! persists it to disk; the HTTP credential itself lives in the client's
//! cookie jar. Sign-out clears both the in-memory session and the file.

use tracing::debug;

use atlas_client::{ApiClient, SigninRequest, SignupRequest};
use atlas_core::validation::validate_required;

use crate::error::ApiError;
use crate::state::AuthState;

/// Registers a new account.
///
/// ## Validation
/// All four fields are required; no format rules are applied locally.
/// The server enforces uniqueness and returns its own wording on
/// conflict, which is surfaced verbatim.
///
/// ## Returns
/// The server's confirmation message.
pub async fn sign_up(
    client: &ApiClient,
    name: &str,
    phone: &str,
    email: &str,
    password: &str,
) -> Result<String, ApiError> {
    debug!(email = %email, "sign_up command");

    validate_required("name", name)?;
    validate_required("phone", phone)?;
    validate_required("email", email)?;
    validate_required("password", password)?;

    let request = SignupRequest {
        name: name.trim().to_string(),
        phone: phone.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
    };

    let message = client.sign_up(&request).await?;
    Ok(message)
}

/// Authenticates and opens a session.
///
/// ## Behavior
/// On success the session transitions to logged-in and is written to
/// disk, so the next launch skips the sign-in screen. The session cookie
/// lands in the client's jar as a side effect of the request.
///
/// ## Returns
/// The server-issued user id.
pub async fn sign_in(
    client: &ApiClient,
    auth: &AuthState,
    email: &str,
    password: &str,
) -> Result<String, ApiError> {
    debug!(email = %email, "sign_in command");

    validate_required("email", email)?;
    validate_required("password", password)?;

    let request = SigninRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };

    let user_id = client.sign_in(&request).await?;
    auth.login(user_id.clone())?;
    Ok(user_id)
}

/// Ends the session and removes the persisted record.
///
/// Protected routes redirect to sign-in from the next navigation on.
pub fn sign_out(auth: &AuthState) -> Result<(), ApiError> {
    debug!("sign_out command");
    auth.logout()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_client::{AppConfig, SessionStore};
    use crate::error::ErrorCode;

    fn test_client() -> ApiClient {
        ApiClient::new(&AppConfig::default()).unwrap()
    }

    fn test_auth(name: &str) -> AuthState {
        let mut path = std::env::temp_dir();
        path.push(format!("atlas-auth-cmd-test-{}-{}", std::process::id(), name));
        path.push("session.toml");
        let _ = std::fs::remove_file(&path);
        AuthState::from_store(SessionStore::new(path))
    }

    #[tokio::test]
    async fn test_sign_up_requires_every_field() {
        let client = test_client();

        let err = sign_up(&client, "", "9876543210", "a@b.com", "pw")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");

        let err = sign_up(&client, "Asha", "9876543210", "a@b.com", "  ")
            .await
            .unwrap_err();
        assert_eq!(err.message, "password is required");
    }

    #[tokio::test]
    async fn test_sign_in_requires_credentials() {
        let client = test_client();
        let auth = test_auth("signin-validation");

        let err = sign_in(&client, &auth, "", "pw").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // A failed validation must not open a session.
        assert!(!auth.is_logged_in());
    }

    #[test]
    fn test_sign_out_is_idempotent() {
        let auth = test_auth("signout");
        sign_out(&auth).unwrap();
        sign_out(&auth).unwrap();
        assert!(!auth.is_logged_in());
    }
}
