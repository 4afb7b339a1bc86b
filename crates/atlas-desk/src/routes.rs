//! # Route Guard
//!
//! The navigable views and the auth gate in front of them.
//!
//! ## Navigation Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Route Guard                              │
//! │                                                                 │
//! │   public:     SignIn   SignUp                                   │
//! │                                                                 │
//! │   protected:  Dashboard  Customers  Products  Sales  Reports    │
//! │                   ▲                                             │
//! │                   │ resolve(route, session)                     │
//! │                   │                                             │
//! │        LoggedIn ──┴─► Granted                                   │
//! │        LoggedOut ───► RedirectToSignIn (no fetch happens)       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Resolution is pure: the shell asks before rendering, and a redirect
//! answer means no protected data fetch is started for that navigation.

use atlas_client::AuthSession;

// =============================================================================
// Routes
// =============================================================================

/// Every navigable view in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignIn,
    SignUp,
    Dashboard,
    Customers,
    Products,
    Sales,
    Reports,
}

impl Route {
    /// True for views that require a signed-in session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::SignIn | Route::SignUp)
    }

    /// Canonical path, used for logging and shell-side navigation.
    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
            Route::Dashboard => "/",
            Route::Customers => "/customers",
            Route::Products => "/products",
            Route::Sales => "/sales",
            Route::Reports => "/reports",
        }
    }
}

// =============================================================================
// Guard Resolution
// =============================================================================

/// Outcome of asking whether a route may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Render the view.
    Granted,
    /// Navigate to sign-in instead; do not start the view's fetches.
    RedirectToSignIn,
}

/// Gates one navigation attempt against the current session.
pub fn resolve(route: Route, session: &AuthSession) -> RouteAccess {
    if route.is_protected() && !session.is_logged_in() {
        RouteAccess::RedirectToSignIn
    } else {
        RouteAccess::Granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_views_are_public() {
        assert!(!Route::SignIn.is_protected());
        assert!(!Route::SignUp.is_protected());
        assert!(Route::Dashboard.is_protected());
        assert!(Route::Reports.is_protected());
    }

    #[test]
    fn test_logged_out_is_redirected_from_protected_views() {
        let session = AuthSession::LoggedOut;

        assert_eq!(resolve(Route::Sales, &session), RouteAccess::RedirectToSignIn);
        assert_eq!(resolve(Route::SignIn, &session), RouteAccess::Granted);
    }

    #[test]
    fn test_logged_in_reaches_everything() {
        let session = AuthSession::LoggedIn {
            user_id: "u1".to_string(),
        };

        assert_eq!(resolve(Route::Customers, &session), RouteAccess::Granted);
        assert_eq!(resolve(Route::SignIn, &session), RouteAccess::Granted);
    }
}
