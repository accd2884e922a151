//! Landing and contact pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use otthub_core::Plan;
use tower_sessions::Session;
use tracing::instrument;

use super::PageContext;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: PageContext,
    pub plans: Vec<Plan>,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: PageContext,
}

/// Display the landing page with the whole catalog.
#[instrument(skip_all)]
pub async fn index(State(state): State<AppState>, session: Session) -> Result<IndexTemplate> {
    let page = PageContext::load(&session, state.catalog()).await?;
    Ok(IndexTemplate {
        page,
        plans: state.catalog().list(),
    })
}

/// Display the contact page.
#[instrument(skip_all)]
pub async fn contact(State(state): State<AppState>, session: Session) -> Result<ContactTemplate> {
    let page = PageContext::load(&session, state.catalog()).await?;
    Ok(ContactTemplate { page })
}
