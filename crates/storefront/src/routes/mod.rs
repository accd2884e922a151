//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Landing page with the catalog
//! GET  /plans                    - Full catalog listing
//! GET  /plan/{id}                - Plan detail (404 plain text if unknown)
//! GET  /contact                  - Contact details
//!
//! # Cart
//! GET  /cart                     - Cart contents and total
//! GET  /add-to-cart/{id}         - Add plan, redirect to /cart
//! GET  /remove/{id}              - Remove plan, redirect to /cart
//!
//! # Checkout
//! GET  /payment                  - Payment instructions (redirects to /plans if cart empty)
//! POST /submit_utr               - Submit UTR, notify operator, clear cart
//!
//! # Admin
//! GET  /admin                    - Login form
//! POST /admin                    - Credential check
//! POST /admin/logout             - Clear admin flag
//! GET  /admin/dashboard          - Catalog management (gated)
//! POST /admin/add-plan           - Add plan (gated)
//! POST /admin/delete-plan/{id}   - Delete plan (gated)
//! ```

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod page;
pub mod plans;

use axum::{
    Router,
    routing::{get, post},
};
use otthub_core::PlanId;
use serde::Deserialize;

use crate::state::AppState;

pub use page::PageContext;

/// Raw `{id}` path segment.
///
/// Extraction never fails: a segment that is not a `u32` (`abc`, `-1`,
/// `4294967296`) names no plan and takes the same branch as an unknown id.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct PlanIdParam(String);

impl PlanIdParam {
    /// The plan id, if the segment is one.
    #[must_use]
    pub fn plan_id(&self) -> Option<PlanId> {
        self.0.parse::<u32>().ok().map(PlanId::new)
    }
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(cart::show))
        .route("/add-to-cart/{id}", get(cart::add))
        .route("/remove/{id}", get(cart::remove))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/payment", get(checkout::payment))
        .route("/submit_utr", post(checkout::submit_utr))
}

/// Create the admin console routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::login_page).post(admin::login))
        .route("/logout", post(admin::logout))
        .route("/dashboard", get(admin::dashboard))
        .route("/add-plan", post(admin::add_plan))
        .route("/delete-plan/{id}", post(admin::delete_plan))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog pages
        .route("/", get(home::index))
        .route("/plans", get(plans::index))
        .route("/plan/{id}", get(plans::show))
        .route("/contact", get(home::contact))
        // Cart and checkout
        .merge(cart_routes())
        .merge(checkout_routes())
        // Admin console
        .nest("/admin", admin_routes())
}
