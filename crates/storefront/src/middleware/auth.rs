//! Admin authentication extractor and session helpers.
//!
//! The admin console is gated by a single boolean in the visitor session.
//! Missing it is not an error: gated routes redirect to the login form.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::VisitorSession;

/// Path of the admin login form.
pub const ADMIN_LOGIN_PATH: &str = "/admin";

/// Extractor that requires an admin session.
///
/// Yields the session so handlers can queue notices without extracting it twice.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireAdmin(session): RequireAdmin) -> impl IntoResponse {
///     "only admins see this"
/// }
/// ```
pub struct RequireAdmin(pub Session);

/// Rejection for [`RequireAdmin`].
pub enum AdminRejection {
    /// Not logged in as admin.
    RedirectToLogin,
    /// The session layer is missing from the router.
    MissingSessionLayer,
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to(ADMIN_LOGIN_PATH).into_response(),
            Self::MissingSessionLayer => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(AdminRejection::MissingSessionLayer)?;

        // An unreadable session is treated like a missing login
        let is_admin = VisitorSession::load(&session)
            .await
            .is_ok_and(|visitor| visitor.admin);

        if !is_admin {
            tracing::debug!(path = %parts.uri.path(), "Admin session required");
            return Err(AdminRejection::RedirectToLogin);
        }

        Ok(Self(session))
    }
}

/// Mark the session as logged in to the admin console.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    let mut visitor = VisitorSession::load(session).await?;
    visitor.admin = true;
    visitor.save(session).await
}

/// Clear the admin flag (logout). The cart is kept.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    let mut visitor = VisitorSession::load(session).await?;
    visitor.admin = false;
    visitor.save(session).await
}
