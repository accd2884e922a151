//! Cart route handlers.
//!
//! The cart is a set of plan ids in the visitor session. Ids are resolved
//! against the catalog on every render, so deleted plans drop out of the
//! page and total without touching the stored cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use otthub_core::{Plan, Price};
use tower_sessions::Session;
use tracing::instrument;

use super::{PageContext, PlanIdParam};
use crate::error::Result;
use crate::filters;
use crate::models::{FlashLevel, VisitorSession, flash};
use crate::services::CartSummary;
use crate::state::AppState;

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub page: PageContext,
    pub items: Vec<Plan>,
    pub total: Price,
}

/// Display the cart with its resolved items and total.
#[instrument(skip_all)]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<CartTemplate> {
    let visitor = VisitorSession::load(&session).await?;
    let summary = CartSummary::resolve(&visitor.cart, state.catalog());
    let page = PageContext::load(&session, state.catalog()).await?;

    Ok(CartTemplate {
        page,
        items: summary.items,
        total: summary.total,
    })
}

/// Add a plan to the cart.
///
/// Unknown plans are refused with a notice and a redirect back to `/plans`.
/// Adding a plan twice leaves the cart unchanged.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<PlanIdParam>,
) -> Result<Response> {
    let Some(id) = id.plan_id().filter(|id| state.catalog().get(*id).is_some()) else {
        flash::push(&session, FlashLevel::Danger, "Invalid product").await?;
        return Ok(Redirect::to("/plans").into_response());
    };

    let mut visitor = VisitorSession::load(&session).await?;
    if visitor.cart.insert(id) {
        visitor.save(&session).await?;
        tracing::debug!(plan_id = %id, "Added plan to cart");
    }

    flash::push(&session, FlashLevel::Success, "Added to cart").await?;
    Ok(Redirect::to("/cart").into_response())
}

/// Remove a plan from the cart. Removing an absent or unparseable id is a no-op.
#[instrument(skip(session))]
pub async fn remove(session: Session, Path(id): Path<PlanIdParam>) -> Result<Response> {
    let Some(id) = id.plan_id() else {
        return Ok(Redirect::to("/cart").into_response());
    };

    let mut visitor = VisitorSession::load(&session).await?;
    if visitor.cart.remove(id) {
        visitor.save(&session).await?;
        tracing::debug!(plan_id = %id, "Removed plan from cart");
    }

    Ok(Redirect::to("/cart").into_response())
}
