//! Payment page and UTR submission.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use otthub_core::{Plan, Price};
use tower_sessions::Session;
use tracing::instrument;

use super::PageContext;
use crate::error::Result;
use crate::filters;
use crate::models::{FlashLevel, VisitorSession, flash};
use crate::services::{CartSummary, CheckoutStage, PaymentSubmission, UtrForm};
use crate::state::AppState;

/// Notice shown once a UTR has been accepted.
pub const SUBMITTED_NOTICE: &str = "UTR submitted. Owner will verify.";

/// Payment instructions template.
#[derive(Template, WebTemplate)]
#[template(path = "payment.html")]
pub struct PaymentTemplate {
    pub page: PageContext,
    pub items: Vec<Plan>,
    pub total: Price,
}

/// Submission confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "success.html")]
pub struct SuccessTemplate {
    pub page: PageContext,
}

/// Display payment instructions for the resolved cart.
///
/// A cart with nothing resolvable sends the visitor back to `/plans`.
#[instrument(skip_all)]
pub async fn payment(State(state): State<AppState>, session: Session) -> Result<Response> {
    let visitor = VisitorSession::load(&session).await?;
    let summary = CartSummary::resolve(&visitor.cart, state.catalog());

    if let Err(e) = CheckoutStage::for_cart(&summary).begin_payment() {
        flash::push(&session, FlashLevel::Info, e.to_string()).await?;
        return Ok(Redirect::to("/plans").into_response());
    }

    let page = PageContext::load(&session, state.catalog()).await?;
    Ok(PaymentTemplate {
        page,
        items: summary.items,
        total: summary.total,
    }
    .into_response())
}

/// Accept a UTR, notify the operator and clear the cart.
///
/// Notification failures are logged and never surface to the visitor.
#[instrument(skip(state, session, form))]
pub async fn submit_utr(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UtrForm>,
) -> Result<Response> {
    let submission = match PaymentSubmission::from_form(&form) {
        Ok(submission) => submission,
        Err(e) => {
            flash::push(&session, FlashLevel::Danger, e.to_string()).await?;
            return Ok(Redirect::to("/payment").into_response());
        }
    };

    let mut visitor = VisitorSession::load(&session).await?;
    let summary = CartSummary::resolve(&visitor.cart, state.catalog());
    let stage = CheckoutStage::for_cart(&summary).submit(&submission);

    tracing::info!(
        ?stage,
        utr = %submission.utr,
        amount = %summary.total,
        items = summary.items.len(),
        "UTR submitted"
    );

    match state.telegram() {
        Some(telegram) => {
            let text = submission.notification_text(&summary);
            if let Err(e) = telegram.send_message(&text).await {
                tracing::error!(error = %e, utr = %submission.utr, "Failed to notify operator");
            }
        }
        None => {
            tracing::warn!(utr = %submission.utr, "Operator notifications disabled, UTR not forwarded");
        }
    }

    visitor.cart.clear();
    visitor.save(&session).await?;

    flash::push(&session, FlashLevel::Success, SUBMITTED_NOTICE).await?;
    let page = PageContext::load(&session, state.catalog()).await?;
    Ok(SuccessTemplate { page }.into_response())
}
