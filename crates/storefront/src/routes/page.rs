//! Data every full page needs for the shared layout.

use tower_sessions::Session;

use crate::db::PlanRepository;
use crate::error::Result;
use crate::models::{FlashMessage, VisitorSession, flash};
use crate::services::CartSummary;

/// Layout context embedded in every page template as `page`.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// Notices queued since the last rendered page. Taking them clears the queue.
    pub flashes: Vec<FlashMessage>,
    /// Number of carted plans still in the catalog.
    pub cart_count: usize,
    pub is_admin: bool,
}

impl PageContext {
    /// Build the layout context, consuming any queued notices.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn load(session: &Session, catalog: &dyn PlanRepository) -> Result<Self> {
        let visitor = VisitorSession::load(session).await?;
        let flashes = flash::take(session).await?;
        let cart_count = CartSummary::resolve(&visitor.cart, catalog).items.len();

        Ok(Self {
            flashes,
            cart_count,
            is_admin: visitor.admin,
        })
    }
}
