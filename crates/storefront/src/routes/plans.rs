//! Catalog listing and plan detail.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use otthub_core::Plan;
use tower_sessions::Session;
use tracing::instrument;

use super::{PageContext, PlanIdParam};
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Catalog listing template.
#[derive(Template, WebTemplate)]
#[template(path = "plans.html")]
pub struct PlansTemplate {
    pub page: PageContext,
    pub plans: Vec<Plan>,
}

/// Plan detail template.
#[derive(Template, WebTemplate)]
#[template(path = "plan_detail.html")]
pub struct PlanDetailTemplate {
    pub page: PageContext,
    pub plan: Plan,
}

/// Display every plan in id order.
#[instrument(skip_all)]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<PlansTemplate> {
    let page = PageContext::load(&session, state.catalog()).await?;
    Ok(PlansTemplate {
        page,
        plans: state.catalog().list(),
    })
}

/// Display one plan.
///
/// Unknown or unparseable ids get a plain-text 404.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<PlanIdParam>,
) -> Result<PlanDetailTemplate> {
    let plan = id
        .plan_id()
        .and_then(|id| state.catalog().get(id))
        .ok_or_else(|| AppError::NotFound("Plan not found".to_string()))?;

    let page = PageContext::load(&session, state.catalog()).await?;
    Ok(PlanDetailTemplate { page, plan })
}
