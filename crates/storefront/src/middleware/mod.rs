//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (binary only; capture errors and transactions)
//! 2. `TraceLayer` (request span with a `request_id` field)
//! 3. Request ID (fill the span field, echo `x-request-id`)
//! 4. Security headers
//! 5. Session layer (tower-sessions, in-memory store, signed cookie)
//!
//! Admin gating is an extractor ([`RequireAdmin`]) rather than a layer so
//! that `/admin` itself stays reachable.

pub mod auth;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{ADMIN_LOGIN_PATH, RequireAdmin, clear_admin, set_admin};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
