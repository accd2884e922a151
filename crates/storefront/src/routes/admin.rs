//! Admin console route handlers.
//!
//! `/admin` is open; everything else takes [`RequireAdmin`], which redirects
//! back to `/admin` when the session has not logged in.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use otthub_core::{NewPlan, Plan, PlanFields};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::{PageContext, PlanIdParam};
use crate::error::Result;
use crate::filters;
use crate::middleware::{ADMIN_LOGIN_PATH, RequireAdmin, clear_admin, set_admin};
use crate::models::{FlashLevel, flash};
use crate::state::AppState;

/// Path of the catalog management view.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Login form data.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Add-plan form data. Every field is optional text; parsing never fails.
#[derive(Debug, Default, Deserialize)]
pub struct AddPlanForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub stock: Option<String>,
}

impl AddPlanForm {
    fn fields(&self) -> PlanFields<'_> {
        PlanFields {
            name: self.name.as_deref(),
            price: self.price.as_deref(),
            logo: self.logo.as_deref(),
            desc: self.desc.as_deref(),
            stock: self.stock.as_deref(),
        }
    }
}

/// Admin login template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub page: PageContext,
    pub error: bool,
}

/// Catalog management template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub page: PageContext,
    pub plans: Vec<Plan>,
}

/// Render the login form.
///
/// GET /admin
#[instrument(skip_all)]
pub async fn login_page(State(state): State<AppState>, session: Session) -> Result<LoginTemplate> {
    let page = PageContext::load(&session, state.catalog()).await?;
    Ok(LoginTemplate { page, error: false })
}

/// Check submitted credentials.
///
/// POST /admin
///
/// A mismatch re-renders the form with the error flag set. There is no
/// lockout.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let username = form.username.as_deref().unwrap_or_default();
    let password = form.password.as_deref().unwrap_or_default();

    if !state.config().admin.matches(username, password) {
        tracing::warn!(username, "Admin login failed");
        let page = PageContext::load(&session, state.catalog()).await?;
        return Ok(LoginTemplate { page, error: true }.into_response());
    }

    // New session id on privilege change
    session.cycle_id().await?;
    set_admin(&session).await?;
    tracing::info!(username, "Admin logged in");

    Ok(Redirect::to(DASHBOARD_PATH).into_response())
}

/// Clear the admin flag. The visitor's cart survives.
///
/// POST /admin/logout
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_admin(&session).await?;
    Ok(Redirect::to(ADMIN_LOGIN_PATH))
}

/// Catalog management view.
///
/// GET /admin/dashboard
#[instrument(skip_all)]
pub async fn dashboard(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
) -> Result<DashboardTemplate> {
    let page = PageContext::load(&session, state.catalog()).await?;
    Ok(DashboardTemplate {
        page,
        plans: state.catalog().list(),
    })
}

/// Add a plan from the dashboard form.
///
/// POST /admin/add-plan
#[instrument(skip_all)]
pub async fn add_plan(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<AddPlanForm>,
) -> Result<Redirect> {
    let plan = state.catalog().create(NewPlan::from_fields(form.fields()));
    tracing::info!(plan_id = %plan.id, name = %plan.name, price = %plan.price, "Plan added");

    flash::push(&session, FlashLevel::Success, "Plan added").await?;
    Ok(Redirect::to(DASHBOARD_PATH))
}

/// Delete a plan. Unknown or unparseable ids are a no-op.
///
/// POST /admin/delete-plan/{id}
#[instrument(skip(session, state))]
pub async fn delete_plan(
    RequireAdmin(session): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<PlanIdParam>,
) -> Result<Redirect> {
    if let Some(id) = id.plan_id().filter(|id| state.catalog().delete(*id)) {
        tracing::info!(plan_id = %id, "Plan deleted");
    }

    flash::push(&session, FlashLevel::Info, "Plan deleted").await?;
    Ok(Redirect::to(DASHBOARD_PATH))
}
